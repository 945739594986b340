//! # Capabilities
//!
//! One trait per external collaborator. Production code plugs in real
//! clients; tests plug in fakes.
//!
//! ```text
//! ┌──────────────────┬────────────────────────────────┬──────────┐
//! │ Trait            │ Operation                      │ Style    │
//! ├──────────────────┼────────────────────────────────┼──────────┤
//! │ CurrencyRates    │ exchange_rate(currency) -> f64 │ sync     │
//! │ ShippingQuotes   │ quote(dest) -> Option<Quote>   │ sync     │
//! │ Analytics        │ track_page_view(path)          │ sync     │
//! │ PaymentGateway   │ charge(card, amount)           │ async    │
//! │ Mailer           │ send_email(address, message)   │ async    │
//! │ CodeGenerator    │ generate_code() -> u32         │ sync     │
//! │ Clock            │ now() -> NaiveDateTime         │ sync     │
//! └──────────────────┴────────────────────────────────┴──────────┘
//! ```
//!
//! Sync capabilities are object safe and held as `Arc<dyn _>`. The async
//! ones return `impl Future + Send`, so services take them as generics.

use std::future::Future;

use chrono::{Local, NaiveDateTime};
use storefront_core::{CardDetails, ChargeOutcome, Money, ShippingQuote};
use uuid::Uuid;

use crate::error::ServiceResult;

// =============================================================================
// Pricing Capabilities
// =============================================================================

/// Source of currency exchange rates relative to the store currency.
pub trait CurrencyRates: Send + Sync {
    /// Multiplier that turns a store-currency amount into `currency`.
    fn exchange_rate(&self, currency: &str) -> f64;
}

/// Carrier that quotes shipping cost and time.
pub trait ShippingQuotes: Send + Sync {
    /// `None` when the carrier does not ship to `destination`.
    fn quote(&self, destination: &str) -> Option<ShippingQuote>;
}

/// Page-view tracking.
pub trait Analytics: Send + Sync {
    fn track_page_view(&self, path: &str);
}

// =============================================================================
// Async Capabilities
// =============================================================================

/// Card payment processor.
pub trait PaymentGateway: Send + Sync {
    /// Charges `amount` to `card` once. No retries.
    ///
    /// `Ok` carries the processor's verdict (success or failed); `Err` means
    /// the processor could not be asked at all.
    fn charge(
        &self,
        card: &CardDetails,
        amount: Money,
    ) -> impl Future<Output = ServiceResult<ChargeOutcome>> + Send;
}

/// Outbound email.
pub trait Mailer: Send + Sync {
    fn send_email(
        &self,
        address: &str,
        message: &str,
    ) -> impl Future<Output = ServiceResult<()>> + Send;
}

// =============================================================================
// Security & Time
// =============================================================================

/// Generator of one-time login codes.
pub trait CodeGenerator: Send + Sync {
    fn generate_code(&self) -> u32;
}

/// Six-digit codes taken from the random bits of a v4 UUID.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidCodeGenerator;

impl CodeGenerator for UuidCodeGenerator {
    fn generate_code(&self) -> u32 {
        (Uuid::new_v4().as_u128() % 1_000_000) as u32
    }
}

/// Source of the current local wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the operating system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
