//! # Money Module
//!
//! Provides the `Money` type for handling prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:   10 * (1 - 0.1) = 9.000000000000002  ❌                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Basis Points                             │
//! │    1000 cents - (1000 * 1000 bps / 10000) = 900 cents  ✅               │
//! │                                                                         │
//! │  Coupon results are exact, so "SAVE10 on $10.00 is $9.00" holds        │
//! │  with plain equality.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//! use storefront_core::types::DiscountRate;
//!
//! let price = Money::from_cents(1000);                 // $10.00
//! let sale = price.apply_discount(DiscountRate::from_bps(2000));
//! assert_eq!(sale.to_string(), "$8.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::DiscountRate;
use crate::BPS_PER_UNIT;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values are representable so that bad input
///   can be rejected by validation instead of by the type
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serde**: serializes as the bare number of cents
///
/// ## Where Money is Used
/// ```text
/// Coupon lookup ──► calculate_discount ──► discounted price
///
/// Order.total_amount ──► PaymentGateway::charge
///
/// ShippingQuote.cost ──► "Shipping Cost: $20.00 (2 Days)"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Returns the price left after taking `rate` off.
    ///
    /// ## Implementation
    /// The discount amount is `(amount * bps + 5000) / 10000`, rounded half
    /// up, and is then subtracted from the original amount.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::types::DiscountRate;
    ///
    /// let price = Money::from_cents(1000);
    /// assert_eq!(price.apply_discount(DiscountRate::from_bps(1000)).cents(), 900);
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        // i128 so that large prices times 10000 cannot overflow
        let half = (BPS_PER_UNIT / 2) as i128;
        let discount = (self.0 as i128 * rate.bps() as i128 + half) / BPS_PER_UNIT as i128;
        Money(self.0 - discount as i64)
    }

    /// Converts into another currency using a multiplicative exchange rate,
    /// rounding to the nearest cent.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(1000);
    /// assert_eq!(price.convert(1.5).cents(), 1500);
    /// ```
    pub fn convert(&self, rate: f64) -> Money {
        Money((self.0 as f64 * rate).round() as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$D.CC` (or `-$D.CC`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
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
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(2000).to_string(), "$20.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_apply_discount_is_exact() {
        let ten = Money::from_cents(1000);
        assert_eq!(ten.apply_discount(DiscountRate::from_bps(1000)).cents(), 900);
        assert_eq!(ten.apply_discount(DiscountRate::from_bps(2000)).cents(), 800);
        assert_eq!(ten.apply_discount(DiscountRate::zero()), ten);
    }

    #[test]
    fn test_apply_discount_rounds_half_up() {
        // 10% of 5 cents is 0.5 cents, rounded to 1
        let price = Money::from_cents(5);
        assert_eq!(price.apply_discount(DiscountRate::from_bps(1000)).cents(), 4);
    }

    #[test]
    fn test_convert() {
        assert_eq!(Money::from_cents(1000).convert(1.5).cents(), 1500);
        assert_eq!(Money::from_cents(999).convert(0.5).cents(), 500);
        assert_eq!(Money::from_cents(1000).convert(1.0).cents(), 1000);
    }

    #[test]
    fn test_is_positive() {
        assert!(!Money::zero().is_positive());
        assert!(Money::from_cents(1).is_positive());
        assert!(!Money::from_cents(-1).is_positive());
    }

    #[test]
    fn test_serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(1099)).unwrap();
        assert_eq!(json, "1099");
    }
}
