//! # Store Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Repository (get_by_id / create / update / update_stock)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError::Store (in the app) ← variant kept intact                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Menu prints "Error: Product not found: 42"                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shopkeep_core::Entity;
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record with this id.
    ///
    /// ## When This Occurs
    /// - `get_by_id` / `update` on an unknown id
    /// - Product removed between add-to-cart and checkout
    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: i64 },

    /// A record with this id already exists.
    #[error("{entity} with id {id} already exists")]
    Duplicate { entity: Entity, id: i64 },

    /// Conditional stock write lost against a concurrent change.
    ///
    /// ## When This Occurs
    /// Two checkouts draw on the same product at the same time; the one
    /// that writes second sees a stock value it did not read.
    #[error("Stock for product {product_id} changed concurrently: expected {expected}, found {actual}")]
    StockConflict {
        product_id: i64,
        expected: i64,
        actual: i64,
    },
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: Entity, id: i64) -> Self {
        StoreError::NotFound { entity, id }
    }

    /// Creates a Duplicate error.
    pub fn duplicate(entity: Entity, id: i64) -> Self {
        StoreError::Duplicate { entity, id }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            StoreError::not_found(Entity::Product, 42).to_string(),
            "Product not found: 42"
        );
        assert_eq!(
            StoreError::duplicate(Entity::Customer, 7).to_string(),
            "Customer with id 7 already exists"
        );
    }
}
