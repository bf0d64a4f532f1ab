//! # Repository Module
//!
//! Store contracts and their in-memory implementations.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  Services depend on the traits, never on a concrete table.             │
//! │                                                                         │
//! │  CheckoutService                                                       │
//! │       │                                                                 │
//! │       │  products.get_by_id(1)                                         │
//! │       │  products.update_stock(1, 5, 2)                                │
//! │       ▼                                                                 │
//! │  dyn ProductStore                                                      │
//! │  ├── create(&self, product)                                            │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── update(&self, product)                                            │
//! │  ├── update_stock(&self, id, expected, new)                            │
//! │  ├── list(&self)                                                       │
//! │  └── count(&self)                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MemoryProductRepository (RwLock<BTreeMap<i64, Product>>)              │
//! │                                                                         │
//! │  A persistent implementation plugs into the same traits.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`MemoryProductRepository`](product::MemoryProductRepository)
//! - [`MemoryCustomerRepository`](customer::MemoryCustomerRepository)
//! - [`MemoryCartRepository`](cart::MemoryCartRepository)

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use shopkeep_core::{Cart, Customer, Product};

use crate::error::StoreResult;

pub mod cart;
pub mod customer;
pub mod product;

// =============================================================================
// Contracts
// =============================================================================

/// Key-based access to products.
pub trait ProductStore: Send + Sync {
    /// Inserts a new product. Fails with `Duplicate` if the id is taken.
    fn create(&self, product: Product) -> StoreResult<()>;

    /// Fetches the current record. Fails with `NotFound`.
    fn get_by_id(&self, id: i64) -> StoreResult<Product>;

    /// Replaces an existing record. Fails with `NotFound`.
    fn update(&self, product: Product) -> StoreResult<()>;

    /// Sets stock to `new_stock` only if it still equals `expected`.
    ///
    /// Returns the updated product, `NotFound`, or `StockConflict` when
    /// another writer got there first.
    fn update_stock(&self, id: i64, expected: i64, new_stock: i64) -> StoreResult<Product>;

    /// All products, ordered by id.
    fn list(&self) -> Vec<Product>;

    fn count(&self) -> usize;
}

/// Key-based access to customers.
pub trait CustomerStore: Send + Sync {
    /// Inserts a new customer. Fails with `Duplicate` if the id is taken.
    fn create(&self, customer: Customer) -> StoreResult<()>;

    /// Fetches a customer. Fails with `NotFound`.
    fn get_by_id(&self, id: i64) -> StoreResult<Customer>;

    /// All customers, ordered by id.
    fn list(&self) -> Vec<Customer>;

    fn count(&self) -> usize;
}

/// Per-customer cart storage.
///
/// A cart always exists conceptually: `get` never fails.
///
/// ## Concurrent Writers
/// ```text
/// Service A: get(7) ─► [Widget]             Service B: get(7) ─► [Widget]
/// A: save_if([Widget], [Widget, Gadget]) ✅
///                                           B: save_if([Widget], []) ❌
///                                              Err([Widget, Gadget])
///                                           B re-applies its change to
///                                           the returned cart and retries
/// ```
/// Services that read, change and write a cart use `save_if`, so a
/// concurrent change is never silently overwritten.
pub trait CartStore: Send + Sync {
    /// The stored cart, or an empty cart for `customer_id` if none.
    fn get(&self, customer_id: i64) -> Cart;

    /// Overwrites the cart stored under `cart.customer_id`.
    fn save(&self, cart: &Cart);

    /// Stores `new` only if the stored cart still equals `expected`.
    ///
    /// A missing cart compares equal to an empty one. On mismatch nothing
    /// is written and the currently stored cart is returned.
    fn save_if(&self, expected: &Cart, new: &Cart) -> Result<(), Cart>;

    /// Replaces the customer's cart with an empty one (the key stays).
    fn clear(&self, customer_id: i64);

    /// Number of customers with a stored cart.
    fn count(&self) -> usize;
}

// =============================================================================
// Lock helpers
// =============================================================================

// A panic while holding the lock cannot leave a table half-written (every
// write is a single map operation), so a poisoned lock is still usable.

pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
