//! # Domain Types
//!
//! Data shapes shared by the core rules and the services crate.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  DiscountRate   │   │     Order       │   │  OrderReceipt   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  total_amount   │   │  success        │       │
//! │  │  2000 = 20%     │   │                 │   │  error?         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CardDetails    │   │ ChargeOutcome   │   │ ShippingQuote   │       │
//! │  │  (opaque token) │   │  Success        │   │  cost           │       │
//! │  │                 │   │  Failed         │   │  estimated_days │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::BPS_PER_UNIT;

// =============================================================================
// Discount Rate
// =============================================================================

/// A fractional discount represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 1000 bps = 10% off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a rate from basis points without checking the range.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a rate that is a proper fraction, i.e. strictly between
    /// 0 and 10000 bps.
    pub fn try_from_bps(bps: u32) -> CoreResult<Self> {
        if bps == 0 || bps >= BPS_PER_UNIT {
            return Err(CoreError::DiscountOutOfRange { bps });
        }
        Ok(DiscountRate(bps))
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a fraction of one (2000 bps -> 0.2).
    #[inline]
    pub fn as_fraction(&self) -> f64 {
        self.0 as f64 / BPS_PER_UNIT as f64
    }

    /// No discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// True for 0 < bps < 10000.
    #[inline]
    pub const fn is_proper_fraction(&self) -> bool {
        self.0 > 0 && self.0 < BPS_PER_UNIT
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order about to be paid for. Built by the caller, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Amount to charge.
    pub total_amount: Money,
}

impl Order {
    pub fn new(total_amount: Money) -> Self {
        Order { total_amount }
    }
}

/// Card details handed through to the payment capability untouched.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardDetails(String);

impl CardDetails {
    pub fn new(token: impl Into<String>) -> Self {
        CardDetails(token.into())
    }

    /// Returns the raw card token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Only the last four characters are ever printed.
impl fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tail: String = {
            let chars: Vec<char> = self.0.chars().collect();
            chars[chars.len().saturating_sub(4)..].iter().collect()
        };
        write!(f, "CardDetails(****{})", tail)
    }
}

// =============================================================================
// Payment Outcome
// =============================================================================

/// Status reported by the payment processor for a charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    Success,
    Failed,
}

/// Result of a single charge attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeOutcome {
    pub status: ChargeStatus,
}

impl ChargeOutcome {
    pub const fn success() -> Self {
        ChargeOutcome {
            status: ChargeStatus::Success,
        }
    }

    pub const fn failed() -> Self {
        ChargeOutcome {
            status: ChargeStatus::Failed,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ChargeStatus::Success
    }
}

/// Why an order could not be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderFailure {
    /// The card was not charged.
    PaymentError,
}

impl fmt::Display for OrderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderFailure::PaymentError => write!(f, "payment_error"),
        }
    }
}

/// What `submit_order` hands back.
///
/// Serializes to `{"success":true}` or
/// `{"success":false,"error":"payment_error"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<OrderFailure>,
}

impl OrderReceipt {
    pub const fn submitted() -> Self {
        OrderReceipt {
            success: true,
            error: None,
        }
    }

    pub const fn failed(reason: OrderFailure) -> Self {
        OrderReceipt {
            success: false,
            error: Some(reason),
        }
    }
}

// =============================================================================
// Shipping
// =============================================================================

/// A carrier's quote for shipping to one destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub cost: Money,
    pub estimated_days: u32,
}

// =============================================================================
// Unit Tests
// =============================================================================
