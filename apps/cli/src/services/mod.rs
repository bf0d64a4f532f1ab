//! # Services Module
//!
//! Application operations, one service per workflow.
//!
//! ```text
//! services/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── catalog.rs   ◄─── Products and customers
//! ├── cart.rs      ◄─── View / add / remove / clear / total
//! └── checkout.rs  ◄─── Cart → stock decrement → Order
//! ```
//!
//! Services are cheap borrowing handles over a [`Store`](shopkeep_store::Store);
//! get them from [`AppState`](crate::state::AppState) or build them directly.

pub mod cart;
pub mod catalog;
pub mod checkout;

#[cfg(test)]
mod doubles;

pub use cart::CartService;
pub use catalog::CatalogService;
pub use checkout::{generate_order_id, CheckoutFailurePolicy, CheckoutService};
