//! # Product Repository
//!
//! In-memory product table.
//!
//! ## Key Operations
//! - CRUD by id
//! - Conditional stock writes for checkout
//!
//! ## Conditional Stock Write
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Checkout A reads stock=5          Checkout B reads stock=5         │
//! │  A: update_stock(1, 5, 2)  ✅      B: update_stock(1, 5, 3)  ❌     │
//! │                                       StockConflict { actual: 2 }   │
//! │                                                                     │
//! │  Without the expected value B would overwrite A's decrement.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::sync::RwLock;

use shopkeep_core::{Entity, Product};
use tracing::debug;

use super::{read, write, ProductStore};
use crate::error::{StoreError, StoreResult};

/// Repository for products, keyed by product id.
///
/// ## Usage
/// ```rust
/// use shopkeep_core::{Money, Product};
/// use shopkeep_store::{MemoryProductRepository, ProductStore};
///
/// let repo = MemoryProductRepository::new();
/// repo.create(Product::new(1, "Widget", Money::from_cents(999), 5)).unwrap();
///
/// let widget = repo.update_stock(1, 5, 2).unwrap();
/// assert_eq!(widget.stock, 2);
/// ```
#[derive(Debug, Default)]
pub struct MemoryProductRepository {
    by_id: RwLock<BTreeMap<i64, Product>>,
}

impl MemoryProductRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductStore for MemoryProductRepository {
    fn create(&self, product: Product) -> StoreResult<()> {
        debug!(product_id = %product.id, name = %product.name, "Creating product");

        let mut table = write(&self.by_id);
        if table.contains_key(&product.id) {
            return Err(StoreError::duplicate(Entity::Product, product.id));
        }
        table.insert(product.id, product);
        Ok(())
    }

    fn get_by_id(&self, id: i64) -> StoreResult<Product> {
        read(&self.by_id)
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(Entity::Product, id))
    }

    fn update(&self, product: Product) -> StoreResult<()> {
        debug!(product_id = %product.id, stock = %product.stock, "Updating product");

        let mut table = write(&self.by_id);
        match table.get_mut(&product.id) {
            Some(slot) => {
                *slot = product;
                Ok(())
            }
            None => Err(StoreError::not_found(Entity::Product, product.id)),
        }
    }

    fn update_stock(&self, id: i64, expected: i64, new_stock: i64) -> StoreResult<Product> {
        debug!(product_id = %id, expected = %expected, new_stock = %new_stock, "Updating stock");

        let mut table = write(&self.by_id);
        let product = table
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found(Entity::Product, id))?;

        if product.stock != expected {
            return Err(StoreError::StockConflict {
                product_id: id,
                expected,
                actual: product.stock,
            });
        }

        product.stock = new_stock;
        Ok(product.clone())
    }

    fn list(&self) -> Vec<Product> {
        read(&self.by_id).values().cloned().collect()
    }

    fn count(&self) -> usize {
        read(&self.by_id).len()
    }
}
