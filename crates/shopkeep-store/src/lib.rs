//! # shopkeep-store: Storage Layer for Shopkeep
//!
//! This crate defines the store contracts the services depend on and the
//! in-memory repositories that implement them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopkeep Data Flow                               │
//! │                                                                         │
//! │  CartService::add_product_to_cart                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   shopkeep-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌─────────────────────┐  ┌───────────┐  │   │
//! │  │   │    Store      │    │   Contracts         │  │  Seed     │  │   │
//! │  │   │  (store.rs)   │    │  (repository/)      │  │ (seed.rs) │  │   │
//! │  │   │               │    │                     │  │           │  │   │
//! │  │   │ owns the      │───►│ ProductStore        │  │ demo      │  │   │
//! │  │   │ repositories  │    │ CustomerStore       │  │ catalog   │  │   │
//! │  │   │               │    │ CartStore           │  │           │  │   │
//! │  │   └───────────────┘    └─────────────────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RwLock<BTreeMap<id, _>> tables, alive as long as the Store            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `Store` bundle and its configuration
//! - [`repository`] - Store traits and in-memory implementations
//! - [`error`] - Store error types
//! - [`seed`] - Demo products and customers
//!
//! ## Usage
//!
//! ```rust
//! use shopkeep_core::{Money, Product};
//! use shopkeep_store::Store;
//!
//! let store = Store::in_memory();
//! store
//!     .products()
//!     .create(Product::new(1, "Widget", Money::from_cents(999), 5))
//!     .unwrap();
//!
//! assert_eq!(store.products().get_by_id(1).unwrap().stock, 5);
//! assert!(store.carts().get(7).is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::{Store, StoreConfig, StoreCounts};

pub use repository::cart::MemoryCartRepository;
pub use repository::customer::MemoryCustomerRepository;
pub use repository::product::MemoryProductRepository;
pub use repository::{CartStore, CustomerStore, ProductStore};
