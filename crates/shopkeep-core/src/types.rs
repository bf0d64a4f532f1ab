//! # Domain Types
//!
//! Core domain types used throughout Shopkeep.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Customer     │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64 > 0)   │   │  id (i64 > 0)   │   │  id (string)    │       │
//! │  │  name           │   │  name           │   │  customer snap  │       │
//! │  │  price (Money)  │   │  email          │   │  items          │       │
//! │  │  stock (>= 0)   │   │                 │   │  total          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Product and Customer are owned by their stores.                       │
//! │  Order is a transient receipt: built once at checkout, never stored.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cart::CartItem;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Entity
// =============================================================================

/// Names a stored entity collection (used in store errors and logs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entity {
    Product,
    Customer,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Product => f.write_str("Product"),
            Entity::Customer => f.write_str("Customer"),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique positive identifier.
    pub id: i64,

    /// Display name, copied into cart lines and receipts.
    pub name: String,

    /// Unit price.
    pub price: Money,

    /// Units on hand. Only checkout and restocking change it.
    pub stock: i64,
}

impl Product {
    /// Creates a new Product. Validation happens separately in
    /// [`validate_product`](crate::validation::validate_product).
    pub fn new(id: i64, name: impl Into<String>, price: Money, stock: i64) -> Self {
        Product {
            id,
            name: name.into(),
            price,
            stock,
        }
    }

    /// Whether current stock covers `quantity`.
    #[inline]
    pub fn has_stock_for(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A registered customer. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl Customer {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Customer {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// A line on an order receipt.
/// Uses snapshot pattern: name and price are the cart's frozen copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: i64,
    /// Product name at time of adding to cart (frozen).
    pub name: String,
    /// Unit price at time of adding to cart (frozen).
    pub unit_price: Money,
    pub quantity: i64,
    /// unit_price × quantity
    pub line_total: Money,
}

impl TryFrom<&CartItem> for OrderItem {
    type Error = CoreError;

    fn try_from(item: &CartItem) -> CoreResult<Self> {
        Ok(OrderItem {
            product_id: item.product_id,
            name: item.name.clone(),
            unit_price: item.unit_price,
            quantity: item.quantity,
            line_total: item.line_total()?,
        })
    }
}

// =============================================================================
// Order
// =============================================================================

/// The receipt produced by a successful checkout.
///
/// Fields are private: an `Order` can only be built through [`Order::new`],
/// which derives the total from the items, and is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: String,
    customer_id: i64,
    customer_name: String,
    items: Vec<OrderItem>,
    total: Money,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Builds an order for `customer` from the assembled lines.
    ///
    /// Fails with `AmountOverflow` if the line totals do not sum in range.
    pub fn new(
        id: impl Into<String>,
        customer: &Customer,
        items: Vec<OrderItem>,
        created_at: DateTime<Utc>,
    ) -> CoreResult<Self> {
        let total = items.iter().try_fold(Money::zero(), |total, item| {
            total
                .checked_add(item.line_total)
                .ok_or(CoreError::AmountOverflow)
        })?;

        Ok(Order {
            id: id.into(),
            customer_id: customer.id,
            customer_name: customer.name.clone(),
            items,
            total,
            created_at,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer_id(&self) -> i64 {
        self.customer_id
    }

    /// Customer name at checkout time.
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Sum of the line totals.
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Total number of units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0, |units: i64, i| units.saturating_add(i.quantity))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
