//! # Catalog Service
//!
//! Product and customer maintenance: create, list, restock, reprice.
//!
//! Every write validates first, then hands the record to the store, so a
//! rejected record never reaches a table.

use shopkeep_core::validation::{validate_customer, validate_product, validate_quantity};
use shopkeep_core::{Customer, Money, Product, ValidationError};
use shopkeep_store::Store;
use tracing::info;

use crate::error::AppResult;

/// Product and customer operations.
#[derive(Debug, Clone, Copy)]
pub struct CatalogService<'a> {
    store: &'a Store,
}

impl<'a> CatalogService<'a> {
    pub fn new(store: &'a Store) -> Self {
        CatalogService { store }
    }

    /// Validates and stores a new product.
    ///
    /// ## Errors
    /// `InvalidId`, `Required`, `InvalidPrice`, `InvalidStock` (first failing
    /// field wins), then `Duplicate` from the store.
    pub fn create_product(&self, product: Product) -> AppResult<Product> {
        validate_product(&product)?;
        self.store.products().create(product.clone())?;

        info!(product_id = %product.id, name = %product.name, "Product created");
        Ok(product)
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.store.products().list()
    }

    /// Validates and stores a new customer.
    pub fn create_customer(&self, customer: Customer) -> AppResult<Customer> {
        validate_customer(&customer)?;
        self.store.customers().create(customer.clone())?;

        info!(customer_id = %customer.id, "Customer created");
        Ok(customer)
    }

    pub fn list_customers(&self) -> Vec<Customer> {
        self.store.customers().list()
    }

    /// Adds `quantity` units to a product's stock.
    ///
    /// Uses the conditional stock write, so a checkout running at the same
    /// time cannot have its decrement overwritten.
    pub fn restock_product(&self, product_id: i64, quantity: i64) -> AppResult<Product> {
        validate_quantity(quantity)?;

        let product = self.store.products().get_by_id(product_id)?;
        let new_stock = product
            .stock
            .checked_add(quantity)
            .ok_or(ValidationError::InvalidStock { stock: i64::MAX })?;

        let updated = self
            .store
            .products()
            .update_stock(product_id, product.stock, new_stock)?;

        info!(product_id = %product_id, added = quantity, stock = updated.stock, "Product restocked");
        Ok(updated)
    }

    /// Changes a product's unit price.
    ///
    /// Cart lines already holding this product keep the price they were
    /// added at.
    pub fn update_price(&self, product_id: i64, price: Money) -> AppResult<Product> {
        if !price.is_positive() {
            return Err(ValidationError::InvalidPrice {
                cents: price.cents(),
            }
            .into());
        }

        let mut product = self.store.products().get_by_id(product_id)?;
        let old_price = product.price;
        product.price = price;
        self.store.products().update(product.clone())?;

        info!(product_id = %product_id, old = %old_price, new = %price, "Price updated");
        Ok(product)
    }
}
