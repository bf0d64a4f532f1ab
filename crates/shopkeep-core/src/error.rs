//! # Error Types
//!
//! Domain-specific error types for shopkeep-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopkeep-core errors (this file)                                      │
//! │  ├── CoreError        - Cart and checkout rule violations              │
//! │  └── ValidationError  - Product/customer field failures                │
//! │                                                                         │
//! │  shopkeep-store errors (separate crate)                                │
//! │  └── StoreError       - NotFound / Duplicate / StockConflict           │
//! │                                                                         │
//! │  shopkeep-cli errors (in app)                                          │
//! │  └── AppError         - Wraps both, exposes an ErrorCode               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError ─┐                                  │
//! │                        StoreError ──┴──► AppError → menu prints it     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is a business-rule violation, not a technical fault.
//! Errors travel to the caller unchanged; no layer retries or swallows them.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart and checkout rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Not enough stock to satisfy the requested quantity.
    ///
    /// ## When This Occurs
    /// - Adding more units to a cart than the product currently has
    /// - Checkout finds live stock below a cart line's quantity
    #[error("Insufficient stock for {name} (#{product_id}): available {available}, requested {requested}")]
    InsufficientStock {
        product_id: i64,
        name: String,
        available: i64,
        requested: i64,
    },

    /// Quantity must be strictly positive.
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity { quantity: i64 },

    /// A line quantity or money amount left the i64 range.
    ///
    /// ## When This Occurs
    /// - A very large price times a very large quantity
    /// - Adding units to a line whose quantity is already near the limit
    #[error("Amount exceeds the supported range")]
    AmountOverflow,

    /// Checkout was attempted on a cart with no lines.
    #[error("Cart for customer {customer_id} is empty")]
    EmptyCart { customer_id: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field validation errors for products and customers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Identifier is zero or negative.
    #[error("{field} must be a positive integer, got {value}")]
    InvalidId { field: String, value: i64 },

    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Price must be greater than zero.
    #[error("price must be greater than zero, got {cents} cents")]
    InvalidPrice { cents: i64 },

    /// Stock cannot be negative.
    #[error("stock cannot be negative, got {stock}")]
    InvalidStock { stock: i64 },

    /// Invalid format (e.g. malformed email, unparsable price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Shorthand for [`ValidationError::Required`].
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Shorthand for [`ValidationError::InvalidFormat`].
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            product_id: 1,
            name: "Widget".to_string(),
            available: 5,
            requested: 10,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Widget (#1): available 5, requested 10"
        );

        let err = CoreError::EmptyCart { customer_id: 7 };
        assert_eq!(err.to_string(), "Cart for customer 7 is empty");

        assert_eq!(
            CoreError::AmountOverflow.to_string(),
            "Amount exceeds the supported range"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::required("name").to_string(), "name is required");

        let err = ValidationError::InvalidId {
            field: "product id".to_string(),
            value: 0,
        };
        assert_eq!(err.to_string(), "product id must be a positive integer, got 0");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::required("email").into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
