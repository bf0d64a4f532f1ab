//! # Validation Module
//!
//! Field validation for products and customers, plus the quantity rule
//! shared by the cart and checkout.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Text menu                                                    │
//! │  └── Parses numbers, re-prompts on garbage                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: CatalogService / CartService                                 │
//! │  └── THIS MODULE: business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Stores                                                       │
//! │  └── Duplicate / missing id checks only                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules run in a fixed order and the first failure wins.

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Customer, Product};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an identifier: must be > 0.
pub fn validate_id(field: &str, id: i64) -> ValidationResult<()> {
    if id <= 0 {
        return Err(ValidationError::InvalidId {
            field: field.to_string(),
            value: id,
        });
    }
    Ok(())
}

/// Validates that a text field is not blank.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

/// Validates a product before it is created.
///
/// ## Rules (in order)
/// 1. id > 0
/// 2. name not blank
/// 3. price > 0
/// 4. stock >= 0
///
/// ## Example
/// ```rust
/// use shopkeep_core::{Money, Product};
/// use shopkeep_core::validation::validate_product;
///
/// assert!(validate_product(&Product::new(1, "Widget", Money::from_cents(999), 5)).is_ok());
/// assert!(validate_product(&Product::new(1, "Widget", Money::zero(), 5)).is_err());
/// ```
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_id("product id", product.id)?;
    validate_required("name", &product.name)?;

    if !product.price.is_positive() {
        return Err(ValidationError::InvalidPrice {
            cents: product.price.cents(),
        });
    }

    if product.stock < 0 {
        return Err(ValidationError::InvalidStock {
            stock: product.stock,
        });
    }

    Ok(())
}

/// Validates a customer before it is created.
///
/// ## Rules (in order)
/// 1. id > 0
/// 2. name not blank
/// 3. email not blank
/// 4. email contains both `@` and `.`
pub fn validate_customer(customer: &Customer) -> ValidationResult<()> {
    validate_id("customer id", customer.id)?;
    validate_required("name", &customer.name)?;
    validate_email(&customer.email)
}

/// Minimal email check: non-empty, contains `@` and `.`.
///
/// Deliberately not RFC 5322; it only screens out obvious typos.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::required("email"));
    }

    if !email.contains('@') || !email.contains('.') {
        return Err(ValidationError::invalid_format(
            "email",
            "must contain '@' and '.'",
        ));
    }

    Ok(())
}

/// Validates a quantity value: must be > 0.
pub fn validate_quantity(quantity: i64) -> CoreResult<()> {
    if quantity <= 0 {
        return Err(CoreError::InvalidQuantity { quantity });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
