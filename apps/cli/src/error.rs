//! # Application Error Type
//!
//! Unified error type for the services and the menu.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Shopkeep                               │
//! │                                                                         │
//! │  Menu                        Services                                   │
//! │  ────                        ────────                                   │
//! │                                                                         │
//! │  "6) Checkout"                                                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  CheckoutService::checkout                                       │  │
//! │  │  Result<Order, AppError>                                         │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store Error? ─── StoreError::NotFound { .. } ─────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Rule Error? ─── CoreError::EmptyCart { .. } ──── AppError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  "Error: Cart for customer 7 is empty"                                  │
//! │  or {"code":"EMPTY_CART","message":"..."} in JSON mode                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `AppError` keeps the original variant: nothing is flattened into a
//! string until it reaches the screen.

use serde::Serialize;
use shopkeep_core::{CoreError, ValidationError};
use shopkeep_store::StoreError;
use thiserror::Error;

/// Error returned by every service operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Business rule or field validation failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Missing or duplicate record, or a lost stock write.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

/// Error codes, one per kind of failure.
///
/// ## Serialization
/// ```json
/// { "code": "INSUFFICIENT_STOCK", "message": "Insufficient stock for Widget (#1): available 5, requested 10" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Identifier is not a positive integer
    InvalidId,

    /// Identifier already taken
    DuplicateId,

    /// Product or customer not found
    NotFound,

    /// Name or email left blank
    EmptyField,

    /// Malformed email or price
    InvalidFormat,

    InvalidPrice,

    InvalidStock,

    /// Requested quantity exceeds stock
    InsufficientStock,

    /// Quantity is zero or negative
    InvalidQuantity,

    /// Checkout on an empty cart
    EmptyCart,

    /// Quantity or money amount out of range
    AmountOverflow,

    /// Stock changed between read and write
    StockConflict,
}

/// Serializable form of an error, for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

impl AppError {
    /// Machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Core(CoreError::InsufficientStock { .. }) => ErrorCode::InsufficientStock,
            AppError::Core(CoreError::InvalidQuantity { .. }) => ErrorCode::InvalidQuantity,
            AppError::Core(CoreError::EmptyCart { .. }) => ErrorCode::EmptyCart,
            AppError::Core(CoreError::AmountOverflow) => ErrorCode::AmountOverflow,
            AppError::Core(CoreError::Validation(e)) => match e {
                ValidationError::InvalidId { .. } => ErrorCode::InvalidId,
                ValidationError::Required { .. } => ErrorCode::EmptyField,
                ValidationError::InvalidPrice { .. } => ErrorCode::InvalidPrice,
                ValidationError::InvalidStock { .. } => ErrorCode::InvalidStock,
                ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            },
            AppError::Store(StoreError::NotFound { .. }) => ErrorCode::NotFound,
            AppError::Store(StoreError::Duplicate { .. }) => ErrorCode::DuplicateId,
            AppError::Store(StoreError::StockConflict { .. }) => ErrorCode::StockConflict,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// Result type for service operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use shopkeep_core::Entity;

    #[test]
    fn test_codes() {
        let cases: Vec<(AppError, ErrorCode)> = vec![
            (
                ValidationError::InvalidId {
                    field: "product id".into(),
                    value: 0,
                }
                .into(),
                ErrorCode::InvalidId,
            ),
            (ValidationError::required("name").into(), ErrorCode::EmptyField),
            (
                ValidationError::invalid_format("email", "x").into(),
                ErrorCode::InvalidFormat,
            ),
            (
                CoreError::EmptyCart { customer_id: 7 }.into(),
                ErrorCode::EmptyCart,
            ),
            (CoreError::AmountOverflow.into(), ErrorCode::AmountOverflow),
            (
                StoreError::not_found(Entity::Product, 1).into(),
                ErrorCode::NotFound,
            ),
            (
                StoreError::duplicate(Entity::Customer, 1).into(),
                ErrorCode::DuplicateId,
            ),
        ];

        for (err, code) in cases {
            assert_eq!(err.code(), code, "{}", err);
        }
    }

    #[test]
    fn test_message_is_not_wrapped() {
        let err: AppError = StoreError::not_found(Entity::Product, 42).into();
        assert_eq!(err.to_string(), "Product not found: 42");
    }

    #[test]
    fn test_response_serialization() {
        let err: AppError = CoreError::InvalidQuantity { quantity: 0 }.into();
        let json = serde_json::to_string(&err.to_response()).unwrap();
        assert_eq!(
            json,
            r#"{"code":"INVALID_QUANTITY","message":"Invalid quantity: 0"}"#
        );
    }
}
