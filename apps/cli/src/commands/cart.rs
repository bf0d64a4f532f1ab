//! # Cart Menu
//!
//! Cart actions for one customer, plus checkout and the receipt.
//!
//! ## Receipt (text)
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  ==== Shopkeep ====                                        │
//! │  Order:    ORD-20240309140507-3f9c1a2b                     │
//! │  Customer: Ada (#7)                                        │
//! │  Date:     2024-03-09 14:05:07 UTC                         │
//! │    Widget                x3 @ $9.99        $29.97          │
//! │  Total:    $29.97                                          │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! In JSON mode the same data is one [`Receipt`] object per line, and a
//! failed checkout prints `{"code": ..., "message": ...}` instead.

use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};
use shopkeep_core::{Cart, Order};

use super::Console;
use crate::error::AppError;
use crate::state::{AppConfig, ReceiptFormat};

/// Serializable receipt for a completed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub store_name: String,
    pub order_id: String,
    pub customer_id: i64,
    pub customer_name: String,
    pub timestamp: String,
    pub items: Vec<ReceiptItem>,
    pub total_cents: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    pub product_id: i64,
    pub name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub line_total_cents: i64,
}

impl Receipt {
    pub fn new(config: &AppConfig, order: &Order) -> Self {
        Receipt {
            store_name: config.store_name.clone(),
            order_id: order.id().to_string(),
            customer_id: order.customer_id(),
            customer_name: order.customer_name().to_string(),
            timestamp: order.created_at().to_rfc3339(),
            items: order
                .items()
                .iter()
                .map(|i| ReceiptItem {
                    product_id: i.product_id,
                    name: i.name.clone(),
                    quantity: i.quantity,
                    unit_price_cents: i.unit_price.cents(),
                    line_total_cents: i.line_total.cents(),
                })
                .collect(),
            total_cents: order.total().cents(),
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(super) fn cart_menu(&mut self) -> io::Result<()> {
        let customer_id = self.prompt_i64("Customer ID: ")?;

        loop {
            writeln!(self.output)?;
            writeln!(
                self.output,
                "Cart for customer {}: 1) View  2) Add  3) Remove  4) Clear  5) Total  6) Checkout  0) Back",
                customer_id
            )?;

            match self.prompt_line("> ")?.as_str() {
                "1" => {
                    let cart = self.state.carts().view_cart(customer_id);
                    self.print_cart(&cart)?;
                }
                "2" => self.add_to_cart(customer_id)?,
                "3" => {
                    let product_id = self.prompt_i64("Product ID: ")?;
                    let cart = self
                        .state
                        .carts()
                        .remove_product_from_cart(customer_id, product_id);
                    self.print_amount("Removed. Cart total: ", cart.total().map_err(AppError::from))?;
                }
                "4" => {
                    self.state.carts().clear_cart(customer_id);
                    writeln!(self.output, "Cart cleared.")?;
                }
                "5" => {
                    let total = self.state.carts().cart_total(customer_id);
                    self.print_amount("Total: ", total)?;
                }
                "6" => self.checkout(customer_id)?,
                "0" => return Ok(()),
                other => writeln!(self.output, "Unknown option: {}", other)?,
            }
        }
    }

    fn add_to_cart(&mut self, customer_id: i64) -> io::Result<()> {
        let product_id = self.prompt_i64("Product ID: ")?;
        let quantity = self.prompt_i64("Quantity: ")?;

        match self
            .state
            .carts()
            .add_product_to_cart(customer_id, product_id, quantity)
        {
            Ok(cart) => self.print_amount("Added. Cart total: ", cart.total().map_err(AppError::from)),
            Err(e) => self.print_error(&e),
        }
    }

    fn print_cart(&mut self, cart: &Cart) -> io::Result<()> {
        if cart.is_empty() {
            return writeln!(self.output, "Cart is empty.");
        }

        let total = match cart.total() {
            Ok(total) => total,
            Err(e) => return self.print_error(&AppError::from(e)),
        };

        for item in &cart.items {
            let unit = self.money(item.unit_price);
            // total() succeeded, so every line fits
            let line = self.money(item.line_total().unwrap_or_default());
            writeln!(
                self.output,
                "  #{:<5} {:<20} x{:<4} @ {:>9} {:>10}",
                item.product_id, item.name, item.quantity, unit, line
            )?;
        }
        let total = self.money(total);
        writeln!(self.output, "Total: {}", total)
    }

    fn checkout(&mut self, customer_id: i64) -> io::Result<()> {
        let format = self.state.config().receipt_format;

        match (self.state.checkout().checkout(customer_id), format) {
            (Ok(order), ReceiptFormat::Text) => self.print_receipt(&order),
            (Ok(order), ReceiptFormat::Json) => {
                let receipt = Receipt::new(self.state.config(), &order);
                self.print_json(&receipt)
            }
            (Err(e), ReceiptFormat::Text) => self.print_error(&e),
            (Err(e), ReceiptFormat::Json) => self.print_json(&e.to_response()),
        }
    }

    fn print_receipt(&mut self, order: &Order) -> io::Result<()> {
        let store_name = self.state.config().store_name.clone();
        writeln!(self.output, "==== {} ====", store_name)?;
        writeln!(self.output, "Order:    {}", order.id())?;
        writeln!(
            self.output,
            "Customer: {} (#{})",
            order.customer_name(),
            order.customer_id()
        )?;
        writeln!(
            self.output,
            "Date:     {}",
            order.created_at().format("%Y-%m-%d %H:%M:%S UTC")
        )?;

        for item in order.items() {
            let unit = self.money(item.unit_price);
            let line = self.money(item.line_total);
            writeln!(
                self.output,
                "  {:<20} x{:<4} @ {:>9} {:>10}",
                item.name, item.quantity, unit, line
            )?;
        }

        let total = self.money(order.total());
        writeln!(self.output, "Total:    {}", total)
    }

    fn print_json<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        let json = serde_json::to_string(value).map_err(io::Error::from)?;
        writeln!(self.output, "{}", json)
    }
}
