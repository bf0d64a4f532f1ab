//! # Cart Repository
//!
//! Stores one cart per customer id.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  get(7) on unknown id ──► empty Cart { customer_id: 7 } (not stored)   │
//! │                                                                         │
//! │  save(cart) ──► table[cart.customer_id] = cart                          │
//! │                                                                         │
//! │  save_if(expected, new) ──► like save, but only while the stored       │
//! │                             cart still equals `expected`; otherwise    │
//! │                             Err(stored cart), nothing written          │
//! │                                                                         │
//! │  clear(7) ──► table[7] = empty Cart (key kept, never deleted)           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No business rules here: stock and quantity checks belong to the services.

use std::collections::BTreeMap;
use std::sync::RwLock;

use shopkeep_core::Cart;
use tracing::debug;

use super::{read, write, CartStore};

/// Repository for carts, keyed by customer id.
#[derive(Debug, Default)]
pub struct MemoryCartRepository {
    by_customer_id: RwLock<BTreeMap<i64, Cart>>,
}

impl MemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for MemoryCartRepository {
    fn get(&self, customer_id: i64) -> Cart {
        read(&self.by_customer_id)
            .get(&customer_id)
            .cloned()
            .unwrap_or_else(|| Cart::new(customer_id))
    }

    fn save(&self, cart: &Cart) {
        debug!(customer_id = %cart.customer_id, lines = cart.items.len(), "Saving cart");
        write(&self.by_customer_id).insert(cart.customer_id, cart.clone());
    }

    fn save_if(&self, expected: &Cart, new: &Cart) -> Result<(), Cart> {
        let customer_id = new.customer_id;
        let mut table = write(&self.by_customer_id);

        let current = table
            .get(&customer_id)
            .cloned()
            .unwrap_or_else(|| Cart::new(customer_id));
        if current != *expected {
            debug!(customer_id = %customer_id, "Cart changed since it was read");
            return Err(current);
        }

        debug!(customer_id = %customer_id, lines = new.items.len(), "Saving cart");
        table.insert(customer_id, new.clone());
        Ok(())
    }

    fn clear(&self, customer_id: i64) {
        debug!(customer_id = %customer_id, "Clearing cart");
        write(&self.by_customer_id).insert(customer_id, Cart::new(customer_id));
    }

    /// Counts customers that have a stored cart (empty or not).
    fn count(&self) -> usize {
        read(&self.by_customer_id).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopkeep_core::{CartItem, Money, Product};

    fn cart_with_widget(customer_id: i64) -> Cart {
        let widget = Product::new(1, "Widget", Money::from_cents(999), 5);
        Cart::new(customer_id)
            .add_item(CartItem::from_product(&widget, 2))
            .unwrap()
    }

    #[test]
    fn test_get_unknown_yields_empty_cart() {
        let repo = MemoryCartRepository::new();
        let cart = repo.get(7);

        assert!(cart.is_empty());
        assert_eq!(cart.customer_id, 7);
        // reading does not create a record
        assert_eq!(repo.count(), 0);
    }

    #[test]
    fn test_save_and_get() {
        let repo = MemoryCartRepository::new();
        let cart = cart_with_widget(7);
        repo.save(&cart);

        assert_eq!(repo.get(7), cart);
        assert!(repo.get(8).is_empty());
    }

    #[test]
    fn test_save_if_unchanged() {
        let repo = MemoryCartRepository::new();
        let first = cart_with_widget(7);

        // nothing stored yet compares equal to an empty cart
        repo.save_if(&Cart::new(7), &first).unwrap();
        assert_eq!(repo.get(7), first);

        let second = first.remove_item(1);
        repo.save_if(&first, &second).unwrap();
        assert_eq!(repo.get(7), second);
    }

    #[test]
    fn test_save_if_conflict_returns_stored_cart() {
        let repo = MemoryCartRepository::new();
        let stale = repo.get(7);

        // another writer saves first
        let theirs = cart_with_widget(7);
        repo.save(&theirs);

        let mine = Cart::new(7);
        assert_eq!(repo.save_if(&stale, &mine), Err(theirs.clone()));
        assert_eq!(repo.get(7), theirs);
    }

    #[test]
    fn test_clear_keeps_key() {
        let repo = MemoryCartRepository::new();
        repo.save(&cart_with_widget(7));
        repo.clear(7);

        let cart = repo.get(7);
        assert!(cart.is_empty());
        assert_eq!(cart.customer_id, 7);
        assert_eq!(repo.count(), 1);
    }
}
