//! # Coupon Module
//!
//! The static coupon catalog and the price-after-coupon calculation.
//!
//! ## Lookup Flow
//! ```text
//! calculate_discount(price, code)
//!      │
//!      ├── price <= 0?      → Err: "Invalid price: must be positive"
//!      │
//!      ├── code in catalog? → price × (1 - discount)
//!      └── otherwise        → price unchanged
//! ```
//!
//! Codes match case-sensitively: `save10` is not `SAVE10`.

use serde::Serialize;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::DiscountRate;
use crate::validation::ValidationResult;

/// A discount code and the fraction it takes off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coupon {
    /// Code typed at checkout. Never empty.
    pub code: &'static str,

    /// Strictly between 0% and 100%.
    pub discount: DiscountRate,
}

const CATALOG: [Coupon; 2] = [
    Coupon {
        code: "SAVE10",
        discount: DiscountRate::from_bps(1000),
    },
    Coupon {
        code: "SAVE20",
        discount: DiscountRate::from_bps(2000),
    },
];

/// Returns the read-only coupon catalog.
///
/// ```rust
/// use storefront_core::coupon::coupons;
///
/// assert!(coupons().iter().any(|c| c.code == "SAVE10"));
/// ```
pub fn coupons() -> &'static [Coupon] {
    &CATALOG
}

/// Finds a coupon by exact code.
pub fn find_coupon(code: &str) -> Option<&'static Coupon> {
    CATALOG.iter().find(|coupon| coupon.code == code)
}

/// Returns the price left after applying `code`.
///
/// Unknown codes, the empty code included, leave the price untouched; they
/// are not an error.
///
/// ```rust
/// use storefront_core::coupon::calculate_discount;
/// use storefront_core::money::Money;
///
/// let ten = Money::from_cents(1000);
/// assert_eq!(calculate_discount(ten, "SAVE10").unwrap().cents(), 900);
/// assert_eq!(calculate_discount(ten, "NOPE").unwrap(), ten);
/// assert!(calculate_discount(Money::from_cents(-1000), "SAVE10").is_err());
/// ```
pub fn calculate_discount(price: Money, code: &str) -> ValidationResult<Money> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(match find_coupon(code) {
        Some(coupon) => price.apply_discount(coupon.discount),
        None => price,
    })
}
