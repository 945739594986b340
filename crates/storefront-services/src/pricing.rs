//! # Pricing
//!
//! Currency conversion and shipping lookups on top of the rate and carrier
//! capabilities.

use std::fmt;
use std::sync::Arc;

use storefront_core::{Money, ShippingQuote};
use tracing::debug;

use crate::capabilities::{CurrencyRates, ShippingQuotes};
use crate::error::{ServiceError, ServiceResult};

/// Shipping line shown at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingInfo {
    Available(ShippingQuote),
    Unavailable,
}

impl fmt::Display for ShippingInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShippingInfo::Available(quote) => write!(
                f,
                "Shipping Cost: {} ({} Days)",
                quote.cost, quote.estimated_days
            ),
            ShippingInfo::Unavailable => write!(f, "Shipping Unavailable"),
        }
    }
}

pub struct PricingService {
    rates: Arc<dyn CurrencyRates>,
    shipping: Arc<dyn ShippingQuotes>,
}

impl PricingService {
    pub fn new(rates: Arc<dyn CurrencyRates>, shipping: Arc<dyn ShippingQuotes>) -> Self {
        PricingService { rates, shipping }
    }

    /// Converts `price` into `currency`, rounded to the nearest cent.
    ///
    /// Fails if the rate is not a positive finite number.
    pub fn price_in_currency(&self, price: Money, currency: &str) -> ServiceResult<Money> {
        let rate = self.rates.exchange_rate(currency);
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ServiceError::InvalidExchangeRate {
                currency: currency.to_string(),
                rate,
            });
        }

        let converted = price.convert(rate);
        debug!(%price, %converted, currency, rate, "Converted price");
        Ok(converted)
    }

    /// Looks up shipping to `destination`.
    pub fn shipping_info(&self, destination: &str) -> ShippingInfo {
        match self.shipping.quote(destination) {
            Some(quote) => ShippingInfo::Available(quote),
            None => {
                debug!(destination, "No shipping quote");
                ShippingInfo::Unavailable
            }
        }
    }
}
