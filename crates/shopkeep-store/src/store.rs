//! # Store Bundle
//!
//! Owns the three repositories for the lifetime of the application.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Store Ownership                                │
//! │                                                                         │
//! │  App startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreConfig::new().seed_demo_data(true) ← Configure                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::new(config) ← Build tables (+ demo catalog)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │                 Store                    │                           │
//! │  │  ┌──────────┐ ┌───────────┐ ┌───────┐  │                           │
//! │  │  │ products │ │ customers │ │ carts │  │                           │
//! │  │  └──────────┘ └───────────┘ └───────┘  │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       │ &Store borrowed by each service                                │
//! │       ▼                                                                 │
//! │  CartService ── CheckoutService ── CatalogService                      │
//! │                                                                         │
//! │  No global state: dropping the Store drops every table.                │
//! │  The in-memory tables can be swapped for any other implementation     │
//! │  of the same trait (with_product_store / with_cart_store).            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use tracing::{debug, info, warn};

use crate::repository::cart::MemoryCartRepository;
use crate::repository::customer::MemoryCustomerRepository;
use crate::repository::product::MemoryProductRepository;
use crate::repository::{CartStore, CustomerStore, ProductStore};
use crate::seed;

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust
/// use shopkeep_store::{Store, StoreConfig};
///
/// let store = Store::new(StoreConfig::new().seed_demo_data(true));
/// assert!(store.counts().products > 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Preload the demo catalog and customers.
    /// Default: false
    pub seed_demo_data: bool,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether demo data is loaded on construction.
    pub fn seed_demo_data(mut self, seed: bool) -> Self {
        self.seed_demo_data = seed;
        self
    }
}

// =============================================================================
// Store
// =============================================================================

/// Entity counts, for diagnostics and startup logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCounts {
    pub products: usize,
    pub customers: usize,
    pub carts: usize,
}

/// Main store handle providing repository access.
///
/// Accessors hand out trait objects so callers only see the contracts.
pub struct Store {
    products: Box<dyn ProductStore>,
    customers: Box<dyn CustomerStore>,
    carts: Box<dyn CartStore>,
}

impl Default for Store {
    fn default() -> Self {
        Store {
            products: Box::new(MemoryProductRepository::new()),
            customers: Box::new(MemoryCustomerRepository::new()),
            carts: Box::new(MemoryCartRepository::new()),
        }
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("counts", &self.counts())
            .finish()
    }
}

impl Store {
    /// Creates a store, loading demo data if configured.
    ///
    /// Seeding goes through the same `create` calls as user input, so a
    /// duplicate in the demo tables is logged and skipped, not fatal.
    pub fn new(config: StoreConfig) -> Self {
        let store = Store::default();

        if config.seed_demo_data {
            store.seed();
        }

        let counts = store.counts();
        info!(
            products = counts.products,
            customers = counts.customers,
            "Store initialized"
        );
        store
    }

    /// Creates an empty store (for tests and the default CLI session).
    pub fn in_memory() -> Self {
        Store::default()
    }

    /// Replaces the product table.
    ///
    /// ## Example
    /// ```rust
    /// use shopkeep_store::{MemoryProductRepository, Store};
    ///
    /// let store = Store::in_memory().with_product_store(MemoryProductRepository::new());
    /// assert_eq!(store.counts().products, 0);
    /// ```
    pub fn with_product_store(mut self, products: impl ProductStore + 'static) -> Self {
        self.products = Box::new(products);
        self
    }

    /// Replaces the cart table.
    pub fn with_cart_store(mut self, carts: impl CartStore + 'static) -> Self {
        self.carts = Box::new(carts);
        self
    }

    fn seed(&self) {
        debug!("Seeding demo data");

        for product in seed::demo_products() {
            if let Err(e) = self.products.create(product) {
                warn!(error = %e, "Skipping demo product");
            }
        }
        for customer in seed::demo_customers() {
            if let Err(e) = self.customers.create(customer) {
                warn!(error = %e, "Skipping demo customer");
            }
        }
    }

    /// Returns the product store.
    pub fn products(&self) -> &dyn ProductStore {
        self.products.as_ref()
    }

    /// Returns the customer store.
    pub fn customers(&self) -> &dyn CustomerStore {
        self.customers.as_ref()
    }

    /// Returns the cart store.
    pub fn carts(&self) -> &dyn CartStore {
        self.carts.as_ref()
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            products: self.products.count(),
            customers: self.customers.count(),
            carts: self.carts.count(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_is_empty() {
        let store = Store::in_memory();
        assert_eq!(
            store.counts(),
            StoreCounts {
                products: 0,
                customers: 0,
                carts: 0
            }
        );
    }

    #[test]
    fn test_seeded_store() {
        let store = Store::new(StoreConfig::new().seed_demo_data(true));
        let counts = store.counts();

        assert_eq!(counts.products, seed::demo_products().len());
        assert_eq!(counts.customers, seed::demo_customers().len());
        assert_eq!(counts.carts, 0);
    }

    #[test]
    fn test_replaced_tables_are_used() {
        let products = MemoryProductRepository::new();
        products
            .create(shopkeep_core::Product::new(
                1,
                "Widget",
                shopkeep_core::Money::from_cents(999),
                5,
            ))
            .unwrap();

        let store = Store::in_memory()
            .with_product_store(products)
            .with_cart_store(MemoryCartRepository::new());

        assert_eq!(store.products().get_by_id(1).unwrap().stock, 5);
        assert_eq!(store.counts().products, 1);
        assert!(format!("{:?}", store).contains("products: 1"));
    }

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::new().seed_demo_data(true);
        assert!(config.seed_demo_data);
        assert!(!StoreConfig::default().seed_demo_data);
    }
}
