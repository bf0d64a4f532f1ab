//! # Cart Model
//!
//! A customer's cart and the pure operations on it.
//!
//! ## Functional Updates
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  cart_v1 ──add_item(item)──► cart_v2     (cart_v1 unchanged)           │
//! │  cart_v2 ──remove_item(id)──► cart_v3    (cart_v2 unchanged)           │
//! │                                                                         │
//! │  Every operation borrows the cart and returns a new value.             │
//! │  Whoever owns storage must persist the returned value explicitly.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by `product_id` (adding the same product again
//!   increases the existing line's quantity)
//! - Every line quantity is > 0
//! - Name and price are snapshots from the first add; later adds of the
//!   same product never overwrite them
//! - A cart built through `add_item` always has a representable total

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;

/// An item in the shopping cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: i64,

    /// Product name at time of adding (frozen)
    pub name: String,

    /// Price at time of adding (frozen)
    pub unit_price: Money,

    pub quantity: i64,
}

impl CartItem {
    /// Creates a cart line from a product, freezing its current name and price.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
        }
    }

    /// unit_price × quantity, or `AmountOverflow`.
    #[inline]
    pub fn line_total(&self) -> CoreResult<Money> {
        self.unit_price
            .checked_mul(self.quantity)
            .ok_or(CoreError::AmountOverflow)
    }
}

/// The shopping cart of exactly one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub customer_id: i64,
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart for `customer_id`.
    pub fn new(customer_id: i64) -> Self {
        Cart {
            customer_id,
            items: Vec::new(),
        }
    }

    /// Returns a cart with `item` added.
    ///
    /// ## Behavior
    /// - `item.quantity <= 0`: `InvalidQuantity`, nothing changes
    /// - Product already in cart: its quantity grows by `item.quantity`,
    ///   the existing name/price snapshot is kept
    /// - Otherwise: `item` is appended
    /// - The new quantity or total would overflow: `AmountOverflow`,
    ///   nothing changes
    pub fn add_item(&self, item: CartItem) -> CoreResult<Cart> {
        if item.quantity <= 0 {
            return Err(CoreError::InvalidQuantity {
                quantity: item.quantity,
            });
        }

        let mut next = self.clone();
        match next
            .items
            .iter_mut()
            .find(|line| line.product_id == item.product_id)
        {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .checked_add(item.quantity)
                    .ok_or(CoreError::AmountOverflow)?;
            }
            None => next.items.push(item),
        }

        next.total()?;
        Ok(next)
    }

    /// Returns a cart without any line for `product_id`.
    ///
    /// Idempotent: removing an absent product yields an equal cart.
    pub fn remove_item(&self, product_id: i64) -> Cart {
        Cart {
            customer_id: self.customer_id,
            items: self
                .items
                .iter()
                .filter(|line| line.product_id != product_id)
                .cloned()
                .collect(),
        }
    }

    /// Sum of `unit_price × quantity` over all lines. Zero when empty.
    ///
    /// Fails with `AmountOverflow` instead of wrapping.
    pub fn total(&self) -> CoreResult<Money> {
        self.items.iter().try_fold(Money::zero(), |total, line| {
            total
                .checked_add(line.line_total()?)
                .ok_or(CoreError::AmountOverflow)
        })
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
