//! # Checkout Service
//!
//! Turns a customer's cart into an [`Order`] while decrementing stock.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         checkout(customer_id)                           │
//! │                                                                         │
//! │  1. customers.get_by_id ─────────────────────────── NotFound            │
//! │  2. claim the cart: must have lines ─────────────── EmptyCart           │
//! │     total must fit ──────────────────────────────── AmountOverflow      │
//! │     save_if(cart, empty cart), re-read on conflict                     │
//! │  3. for each claimed line, in cart order:                              │
//! │     a. products.get_by_id (live record) ─────────── NotFound            │
//! │     b. line quantity > 0 ────────────────────────── InvalidQuantity     │
//! │     c. live stock >= quantity ───────────────────── InsufficientStock   │
//! │     d. update_stock(id, live, live - qty) ───────── StockConflict       │
//! │     e. OrderItem from the cart's snapshot price                        │
//! │  4. build Order                                                        │
//! │                                                                         │
//! │  A failure in step 3 returns the line's error as-is. Lines already     │
//! │  written in 3d are then handled by the CheckoutFailurePolicy:          │
//! │                                                                         │
//! │  LeavePartial (default)     Compensate                                 │
//! │  ──────────────────────     ──────────                                 │
//! │  decrements stay applied    each applied line gets its units back      │
//! │  warn! logged               error! logged if a restore fails           │
//! │                                                                         │
//! │  The claimed lines go back into the cart in both cases.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Claiming the cart before touching stock means a line added while the
//! checkout runs stays in the cart for next time, and two checkouts of the
//! same cart cannot both place it: the second one finds it empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shopkeep_core::validation::validate_quantity;
use shopkeep_core::{Cart, CartItem, CoreError, Order, OrderItem};
use shopkeep_store::{Store, StoreError};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::cart::update_cart;
use crate::error::{AppError, AppResult};

/// What happens to earlier stock decrements when a later line fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutFailurePolicy {
    /// Keep them. The caller sees only the failing line's error.
    #[default]
    LeavePartial,

    /// Add the units back, newest first, then return the error.
    Compensate,
}

/// A stock write made by the current checkout.
#[derive(Debug, Clone, Copy)]
struct AppliedDecrement {
    product_id: i64,
    quantity: i64,
}

/// Checkout against one store.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutService<'a> {
    store: &'a Store,
    on_failure: CheckoutFailurePolicy,
}

impl<'a> CheckoutService<'a> {
    pub fn new(store: &'a Store) -> Self {
        CheckoutService {
            store,
            on_failure: CheckoutFailurePolicy::default(),
        }
    }

    pub fn with_failure_policy(mut self, policy: CheckoutFailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }

    /// Checks out the customer's cart.
    ///
    /// ## Returns
    /// * `Ok(Order)` - stock decremented for every line, cart cleared
    /// * `Err(AppError)` - the first failure; the cart keeps its lines
    pub fn checkout(&self, customer_id: i64) -> AppResult<Order> {
        debug!(customer_id = %customer_id, "checkout");

        let customer = self.store.customers().get_by_id(customer_id)?;
        let cart = self.claim_cart(customer_id)?;

        let mut applied = Vec::with_capacity(cart.items.len());
        let placed = self.decrement_stock(&cart, &mut applied).and_then(|items| {
            let now = Utc::now();
            Ok(Order::new(generate_order_id(now), &customer, items, now)?)
        });

        match placed {
            Ok(order) => {
                info!(
                    order_id = %order.id(),
                    customer_id = %customer_id,
                    total = %order.total(),
                    lines = order.items().len(),
                    "Checkout completed"
                );
                Ok(order)
            }
            Err(e) => {
                self.handle_failure(customer_id, &applied);
                self.return_lines(&cart);
                Err(e)
            }
        }
    }

    /// Empties the stored cart with a conditional write and returns the
    /// lines it held.
    fn claim_cart(&self, customer_id: i64) -> AppResult<Cart> {
        let mut claimed = Cart::new(customer_id);

        update_cart(self.store.carts(), customer_id, |current| {
            if current.is_empty() {
                return Err(AppError::from(CoreError::EmptyCart { customer_id }));
            }
            current.total()?;
            claimed = current.clone();
            Ok(Cart::new(customer_id))
        })?;

        Ok(claimed)
    }

    /// Step 3 over every line. `applied` records each stock write as it
    /// lands, so the caller can compensate when a later line fails.
    fn decrement_stock(
        &self,
        cart: &Cart,
        applied: &mut Vec<AppliedDecrement>,
    ) -> AppResult<Vec<OrderItem>> {
        let mut items = Vec::with_capacity(cart.items.len());

        for line in &cart.items {
            items.push(self.check_out_line(line)?);
            applied.push(AppliedDecrement {
                product_id: line.product_id,
                quantity: line.quantity,
            });
        }

        Ok(items)
    }

    /// Steps 3a-3e for a single cart line.
    fn check_out_line(&self, line: &CartItem) -> AppResult<OrderItem> {
        let product = self.store.products().get_by_id(line.product_id)?;
        validate_quantity(line.quantity)?;

        if !product.has_stock_for(line.quantity) {
            return Err(CoreError::InsufficientStock {
                product_id: product.id,
                name: product.name,
                available: product.stock,
                requested: line.quantity,
            }
            .into());
        }

        let item = OrderItem::try_from(line)?;
        self.store
            .products()
            .update_stock(product.id, product.stock, product.stock - line.quantity)?;

        Ok(item)
    }

    fn handle_failure(&self, customer_id: i64, applied: &[AppliedDecrement]) {
        if applied.is_empty() {
            return;
        }

        match self.on_failure {
            CheckoutFailurePolicy::LeavePartial => {
                warn!(
                    customer_id = %customer_id,
                    decremented_lines = applied.len(),
                    "Checkout failed after partial stock decrement; earlier lines keep their decrement"
                );
            }
            CheckoutFailurePolicy::Compensate => {
                for change in applied.iter().rev() {
                    if let Err(e) = self.restore(change) {
                        error!(
                            product_id = %change.product_id,
                            quantity = change.quantity,
                            error = %e,
                            "Failed to restore stock after checkout failure"
                        );
                    }
                }
                info!(customer_id = %customer_id, restored_lines = applied.len(), "Checkout failed; stock restored");
            }
        }
    }

    /// Adds the units back, re-reading the stock if another writer moved it.
    fn restore(&self, change: &AppliedDecrement) -> AppResult<()> {
        let products = self.store.products();

        loop {
            let current = products.get_by_id(change.product_id)?;
            let restored = current
                .stock
                .checked_add(change.quantity)
                .ok_or(CoreError::AmountOverflow)?;

            match products.update_stock(change.product_id, current.stock, restored) {
                Ok(_) => return Ok(()),
                Err(StoreError::StockConflict { .. }) => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Puts the claimed lines back in front of anything added meanwhile.
    fn return_lines(&self, claimed: &Cart) {
        let result = update_cart(self.store.carts(), claimed.customer_id, |current| {
            current
                .items
                .iter()
                .cloned()
                .try_fold(claimed.clone(), |cart, line| cart.add_item(line))
        });

        if let Err(e) = result {
            error!(
                customer_id = %claimed.customer_id,
                error = %e,
                "Failed to return cart lines after checkout failure"
            );
        }
    }
}

/// Builds an order id: `ORD-<UTC yyyymmddHHMMSS>-<8 hex>`.
///
/// The timestamp keeps ids sortable by time; the random suffix keeps two
/// checkouts in the same second apart.
pub fn generate_order_id(now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("ORD-{}-{}", now.format("%Y%m%d%H%M%S"), &suffix[..8])
}
