//! # Cart Service
//!
//! Applies the cart rules against live product data and persists the result.
//!
//! ## Add To Cart
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_product_to_cart(customer 7, product 1, qty 3)                     │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Fetch product                    ── NotFound               │    │
//! │  │  2. qty > 0                          ── InvalidQuantity        │    │
//! │  │  3. product.stock >= qty             ── InsufficientStock      │    │
//! │  │  4. cart.add_item(snapshot of name + price) ── AmountOverflow  │    │
//! │  │  5. save_if(read cart, new cart), back to 4 on conflict        │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                                                                         │
//! │  Stock is checked, not reserved. Two carts can both pass step 3        │
//! │  for the last units; checkout re-checks and one of them fails there.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Cart` operations return new values; this service is what stores them.
//! Every write goes through [`update_cart`], so two writers on the same
//! cart never overwrite each other's lines.

use std::convert::Infallible;

use shopkeep_core::validation::validate_quantity;
use shopkeep_core::{Cart, CartItem, CoreError, Money};
use shopkeep_store::{CartStore, Store};
use tracing::{debug, info};

use crate::error::AppResult;

/// Applies `change` to the stored cart and writes the result with
/// `save_if`. When another writer got there first, `change` runs again on
/// the cart that writer stored.
///
/// Returns the cart that was written, or the first error from `change`
/// (nothing is written in that case).
pub(crate) fn update_cart<E>(
    carts: &dyn CartStore,
    customer_id: i64,
    mut change: impl FnMut(&Cart) -> Result<Cart, E>,
) -> Result<Cart, E> {
    let mut current = carts.get(customer_id);
    loop {
        let next = change(&current)?;
        match carts.save_if(&current, &next) {
            Ok(()) => return Ok(next),
            Err(stored) => {
                debug!(customer_id = %customer_id, "Cart changed concurrently, reapplying");
                current = stored;
            }
        }
    }
}

/// Cart operations for one store.
#[derive(Debug, Clone, Copy)]
pub struct CartService<'a> {
    store: &'a Store,
}

impl<'a> CartService<'a> {
    pub fn new(store: &'a Store) -> Self {
        CartService { store }
    }

    /// The customer's stored cart, or an empty one.
    pub fn view_cart(&self, customer_id: i64) -> Cart {
        self.store.carts().get(customer_id)
    }

    /// Adds `quantity` units of a product, merging with an existing line.
    ///
    /// On any error the stored cart is untouched.
    pub fn add_product_to_cart(
        &self,
        customer_id: i64,
        product_id: i64,
        quantity: i64,
    ) -> AppResult<Cart> {
        debug!(customer_id = %customer_id, product_id = %product_id, quantity = %quantity, "add_product_to_cart");

        let product = self.store.products().get_by_id(product_id)?;
        validate_quantity(quantity)?;

        if !product.has_stock_for(quantity) {
            debug!(product_id = %product_id, available = product.stock, "Rejected: insufficient stock");
            return Err(CoreError::InsufficientStock {
                product_id,
                name: product.name,
                available: product.stock,
                requested: quantity,
            }
            .into());
        }

        let item = CartItem::from_product(&product, quantity);
        let cart = update_cart(self.store.carts(), customer_id, |cart| {
            cart.add_item(item.clone())
        })?;

        info!(customer_id = %customer_id, product_id = %product_id, quantity = %quantity, "Product added to cart");
        Ok(cart)
    }

    /// Drops the product's line. Removing an absent product is a no-op.
    pub fn remove_product_from_cart(&self, customer_id: i64, product_id: i64) -> Cart {
        let cart = update_cart(self.store.carts(), customer_id, |cart| {
            Ok::<_, Infallible>(cart.remove_item(product_id))
        })
        .unwrap_or_else(|never| match never {});

        debug!(customer_id = %customer_id, product_id = %product_id, "Product removed from cart");
        cart
    }

    pub fn clear_cart(&self, customer_id: i64) {
        self.store.carts().clear(customer_id);
        info!(customer_id = %customer_id, "Cart cleared");
    }

    /// Total of the stored cart. Only a cart saved around the Cart Model
    /// can fail here, with `AmountOverflow`.
    pub fn cart_total(&self, customer_id: i64) -> AppResult<Money> {
        Ok(self.store.carts().get(customer_id).total()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use shopkeep_core::Product;
    use crate::services::doubles::InterleavedCarts;

    fn store_with_widget() -> Store {
        let store = Store::in_memory();
        store
            .products()
            .create(Product::new(1, "Widget", Money::from_cents(999), 5))
            .unwrap();
        store
    }

    #[test]
    fn test_add_and_total() {
        let store = store_with_widget();
        let carts = CartService::new(&store);

        let cart = carts.add_product_to_cart(7, 1, 3).unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].name, "Widget");
        assert_eq!(cart.items[0].quantity, 3);
        assert_eq!(carts.cart_total(7), Ok(Money::from_cents(2997)));
        assert_eq!(carts.view_cart(7), cart);
    }

    #[test]
    fn test_add_does_not_reserve_stock() {
        let store = store_with_widget();
        let carts = CartService::new(&store);

        carts.add_product_to_cart(7, 1, 5).unwrap();
        carts.add_product_to_cart(8, 1, 5).unwrap();
        assert_eq!(store.products().get_by_id(1).unwrap().stock, 5);
    }

    #[test]
    fn test_add_keeps_first_snapshot() {
        let store = store_with_widget();
        let carts = CartService::new(&store);
        carts.add_product_to_cart(7, 1, 1).unwrap();

        let mut repriced = store.products().get_by_id(1).unwrap();
        repriced.price = Money::from_cents(1999);
        store.products().update(repriced).unwrap();

        let cart = carts.add_product_to_cart(7, 1, 2).unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 3);
        assert_eq!(cart.items[0].unit_price, Money::from_cents(999));
    }

    #[test]
    fn test_add_errors_leave_cart_unchanged() {
        let store = store_with_widget();
        let carts = CartService::new(&store);
        let before = carts.add_product_to_cart(7, 1, 2).unwrap();

        let err = carts.add_product_to_cart(7, 1, 10).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InsufficientStock);

        let err = carts.add_product_to_cart(7, 1, 0).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidQuantity);

        let err = carts.add_product_to_cart(7, 99, 1).unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotFound);

        assert_eq!(carts.view_cart(7), before);
    }

    #[test]
    fn test_missing_product_wins_over_bad_quantity() {
        let store = store_with_widget();
        let carts = CartService::new(&store);

        let err = carts.add_product_to_cart(7, 99, -1).unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = store_with_widget();
        let carts = CartService::new(&store);
        carts.add_product_to_cart(7, 1, 2).unwrap();

        let once = carts.remove_product_from_cart(7, 1);
        let twice = carts.remove_product_from_cart(7, 1);
        assert!(once.is_empty());
        assert_eq!(once, twice);

        // never an error, even for a customer with no cart
        assert!(carts.remove_product_from_cart(42, 1).is_empty());
    }

    #[test]
    fn test_clear_cart() {
        let store = store_with_widget();
        let carts = CartService::new(&store);
        carts.add_product_to_cart(7, 1, 2).unwrap();

        carts.clear_cart(7);
        assert!(carts.view_cart(7).is_empty());
        assert_eq!(carts.cart_total(7), Ok(Money::zero()));
    }

    #[test]
    fn test_add_overflow_leaves_cart_unchanged() {
        let store = Store::in_memory();
        let yacht = Money::parse_decimal("100000000000000").unwrap();
        store
            .products()
            .create(Product::new(7, "Yacht", yacht, 1000))
            .unwrap();
        store
            .products()
            .create(Product::new(8, "Penny", Money::from_cents(1), i64::MAX))
            .unwrap();
        let carts = CartService::new(&store);

        let err = carts.add_product_to_cart(1, 7, 1000).unwrap_err();
        assert_eq!(err.code(), ErrorCode::AmountOverflow);
        assert!(carts.view_cart(1).is_empty());

        carts.add_product_to_cart(1, 8, i64::MAX).unwrap();
        let err = carts.add_product_to_cart(1, 8, 1).unwrap_err();
        assert_eq!(err.code(), ErrorCode::AmountOverflow);
        assert_eq!(carts.view_cart(1).items[0].quantity, i64::MAX);
        assert_eq!(carts.cart_total(1), Ok(Money::from_cents(i64::MAX)));
    }

    #[test]
    fn test_total_of_overflowing_stored_cart_is_an_error() {
        let store = store_with_widget();
        let huge = Product::new(2, "Huge", Money::from_cents(i64::MAX), 1);
        store.carts().save(&Cart {
            customer_id: 7,
            items: vec![CartItem::from_product(&huge, 2)],
        });

        let err = CartService::new(&store).cart_total(7).unwrap_err();
        assert_eq!(err.code(), ErrorCode::AmountOverflow);
    }

    #[test]
    fn test_concurrent_add_is_not_lost() {
        let gadget = Product::new(2, "Gadget", Money::from_cents(2500), 4);
        let theirs = Cart::new(7)
            .add_item(CartItem::from_product(&gadget, 1))
            .unwrap();
        let store = store_with_widget().with_cart_store(InterleavedCarts::racing_with(theirs));

        let cart = CartService::new(&store).add_product_to_cart(7, 1, 2).unwrap();

        let ids: Vec<i64> = cart.items.iter().map(|i| i.product_id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(store.carts().get(7), cart);
    }

    #[test]
    fn test_concurrent_remove_keeps_other_writes() {
        let widget = Product::new(1, "Widget", Money::from_cents(999), 5);
        let gadget = Product::new(2, "Gadget", Money::from_cents(2500), 4);
        let mine = Cart::new(7)
            .add_item(CartItem::from_product(&widget, 2))
            .unwrap();
        let theirs = mine.add_item(CartItem::from_product(&gadget, 1)).unwrap();

        let store = Store::in_memory().with_cart_store(InterleavedCarts::racing_with(theirs));
        store.carts().save(&mine);

        let cart = CartService::new(&store).remove_product_from_cart(7, 1);

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].product_id, 2);
        assert_eq!(store.carts().get(7), cart);
    }
}
