//! # State Module
//!
//! Application state: the store plus the configuration it was built from.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  AppConfig::from_env()                                                 │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  ┌──────────────────────────────────────────────┐                      │
//! │  │                 AppState                      │                      │
//! │  │  ┌──────────────┐     ┌──────────────────┐   │                      │
//! │  │  │    Store     │     │    AppConfig     │   │                      │
//! │  │  │  products    │     │  store_name      │   │                      │
//! │  │  │  customers   │     │  currency        │   │                      │
//! │  │  │  carts       │     │  checkout policy │   │                      │
//! │  │  └──────────────┘     └──────────────────┘   │                      │
//! │  └──────────────────────────────────────────────┘                      │
//! │          │                                                              │
//! │          ├── catalog()  ──► CatalogService                             │
//! │          ├── carts()    ──► CartService                                │
//! │          └── checkout() ──► CheckoutService (policy from config)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Services borrow the store; nothing here is global.

mod config;

pub use config::{AppConfig, ReceiptFormat};

use shopkeep_store::{Store, StoreConfig};

use crate::services::{CartService, CatalogService, CheckoutService};

/// Everything a session needs.
#[derive(Debug)]
pub struct AppState {
    store: Store,
    config: AppConfig,
}

impl AppState {
    /// Builds the store described by `config`.
    pub fn new(config: AppConfig) -> Self {
        let store = Store::new(StoreConfig::new().seed_demo_data(config.seed_demo_data));
        AppState { store, config }
    }

    /// Wraps an existing store (for tests).
    pub fn with_store(store: Store, config: AppConfig) -> Self {
        AppState { store, config }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn catalog(&self) -> CatalogService<'_> {
        CatalogService::new(&self.store)
    }

    pub fn carts(&self) -> CartService<'_> {
        CartService::new(&self.store)
    }

    pub fn checkout(&self) -> CheckoutService<'_> {
        CheckoutService::new(&self.store).with_failure_policy(self.config.checkout_failure)
    }
}
