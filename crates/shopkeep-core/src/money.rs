//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    9.99 * 3 = 29.970000000000002  ❌ WRONG!                             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    999 cents * 3 = 2997 cents = $29.97 exactly                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopkeep_core::money::Money;
//!
//! let price = Money::from_cents(999);          // $9.99
//! let line = price.checked_mul(3).unwrap();      // $29.97
//! assert_eq!(line.cents(), 2997);
//!
//! // Arithmetic is checked: a result outside i64 is None, never a wrap
//! assert_eq!(Money::from_cents(i64::MAX).checked_add(line), None);
//!
//! // User input goes through the decimal parser, never through f64
//! assert_eq!(Money::parse_decimal("9.99").unwrap(), price);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► CartItem.unit_price (snapshot) ──► CartItem.line_total
///                                                          │
///                        Cart.total ◄──────────────────────┘
///                            │
///                            ▼
///            OrderItem.line_total ──► Order.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shopkeep_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a decimal amount such as `"9.99"`, `"10"` or `"0.5"`.
    ///
    /// ## Rules
    /// - Digits with at most one decimal point
    /// - At most two fractional digits
    /// - No sign: prices in this system are never negative
    ///
    /// ## Example
    /// ```rust
    /// use shopkeep_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("9.99").unwrap().cents(), 999);
    /// assert_eq!(Money::parse_decimal("0.5").unwrap().cents(), 50);
    /// assert_eq!(Money::parse_decimal("12").unwrap().cents(), 1200);
    /// assert!(Money::parse_decimal("1.999").is_err());
    /// assert!(Money::parse_decimal("abc").is_err());
    /// ```
    pub fn parse_decimal(input: &str) -> Result<Money, ValidationError> {
        let input = input.trim();
        let invalid = |reason: &str| ValidationError::invalid_format("price", reason);

        if input.is_empty() {
            return Err(ValidationError::required("price"));
        }

        let (whole, frac) = input.split_once('.').unwrap_or((input, ""));

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid("no digits"));
        }

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) {
            return Err(invalid("must contain only digits and one decimal point"));
        }

        if frac.len() > 2 {
            return Err(invalid("at most two decimal places"));
        }

        let whole_units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("value is too large"))?
        };

        // "5" means 50 cents, "05" means 5 cents
        let frac_cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid("bad fraction"))? * 10,
            _ => frac.parse().map_err(|_| invalid("bad fraction"))?,
        };

        whole_units
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(frac_cents))
            .map(Money)
            .ok_or_else(|| invalid("value is too large"))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Adds two amounts. `None` if the result does not fit in i64 cents.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Multiplies money by a quantity. `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use shopkeep_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// assert_eq!(unit_price.checked_mul(3), Some(Money::from_cents(897)));
    /// assert_eq!(Money::from_cents(i64::MAX / 2).checked_mul(3), None);
    /// ```
    #[inline]
    pub fn checked_mul(self, qty: i64) -> Option<Money> {
        self.0.checked_mul(qty).map(Money)
    }

    /// Formats the amount with a caller-supplied currency symbol.
    ///
    /// `Display` uses `$`; the application passes its configured symbol here.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}{}{}.{:02}", sign, symbol, abs / 100, abs % 100)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.to_string(), "$10.99");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(2997)), "$29.97");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(1234).format_with_symbol("€"), "€12.34");
        assert_eq!(Money::from_cents(7).format_with_symbol("$"), "$0.07");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_add(b), Some(Money::from_cents(1500)));
        assert_eq!(a.checked_mul(3), Some(Money::from_cents(3000)));
        assert_eq!(a.checked_mul(0), Some(Money::zero()));
    }

    #[test]
    fn test_overflow_is_none() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max.checked_add(Money::from_cents(1)), None);
        assert_eq!(max.checked_mul(2), None);

        // a parseable price times a plausible stock level
        let price = Money::parse_decimal("100000000000000").unwrap();
        assert_eq!(price.checked_mul(1000), None);
    }

    #[test]
    fn test_format_extremes() {
        assert_eq!(
            Money::from_cents(i64::MIN).to_string(),
            "-$92233720368547758.08"
        );
        assert_eq!(
            Money::from_cents(i64::MAX).to_string(),
            "$92233720368547758.07"
        );
    }

    #[test]
    fn test_widget_scenario_is_exact() {
        // 9.99 * 3 drifts in f64, never in cents
        let price = Money::parse_decimal("9.99").unwrap();
        assert_eq!(price.checked_mul(3), Some(Money::from_cents(2997)));
    }

    #[test]
    fn test_parse_decimal_accepts() {
        assert_eq!(Money::parse_decimal("9.99").unwrap().cents(), 999);
        assert_eq!(Money::parse_decimal("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse_decimal("0.5").unwrap().cents(), 50);
        assert_eq!(Money::parse_decimal("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse_decimal(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse_decimal("3.").unwrap().cents(), 300);
        assert_eq!(Money::parse_decimal("  12.30 ").unwrap().cents(), 1230);
    }

    #[test]
    fn test_parse_decimal_rejects() {
        assert!(matches!(
            Money::parse_decimal(""),
            Err(ValidationError::Required { .. })
        ));
        for bad in [".", "abc", "1.2.3", "-5", "+5", "1.999", "1,50", "99999999999999999999"] {
            assert!(
                matches!(
                    Money::parse_decimal(bad),
                    Err(ValidationError::InvalidFormat { .. })
                ),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(!zero.is_positive());
        assert!(Money::from_cents(1).is_positive());
        assert_eq!(Money::default(), zero);
    }

    #[test]
    fn test_serializes_as_plain_cents() {
        let json = serde_json::to_string(&Money::from_cents(2997)).unwrap();
        assert_eq!(json, "2997");
    }
}
