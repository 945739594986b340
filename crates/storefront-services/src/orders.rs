//! # Order Submission
//!
//! ```text
//! submit_order(order, card)
//!      │
//!      ▼
//! PaymentGateway::charge(card, order.total_amount)   ← exactly once
//!      │
//!      ├── Ok(status: success) → { success: true }
//!      ├── Ok(status: failed)  → { success: false, error: "payment_error" }
//!      └── Err(_)              → { success: false, error: "payment_error" }
//! ```

use storefront_core::{CardDetails, Order, OrderFailure, OrderReceipt};
use tracing::{info, warn};

use crate::capabilities::PaymentGateway;

/// Takes payment for orders.
pub struct OrderService<P> {
    gateway: P,
}

impl<P: PaymentGateway> OrderService<P> {
    pub fn new(gateway: P) -> Self {
        OrderService { gateway }
    }

    /// Charges the order total to `card` and reports the result.
    ///
    /// Never returns an error: every way the charge can go wrong ends up as
    /// `payment_error` on the receipt.
    pub async fn submit_order(&self, order: &Order, card: &CardDetails) -> OrderReceipt {
        match self.gateway.charge(card, order.total_amount).await {
            Ok(outcome) if outcome.is_success() => {
                info!(amount = %order.total_amount, "Order submitted");
                OrderReceipt::submitted()
            }
            Ok(outcome) => {
                warn!(amount = %order.total_amount, status = ?outcome.status, "Charge declined");
                OrderReceipt::failed(OrderFailure::PaymentError)
            }
            Err(e) => {
                warn!(amount = %order.total_amount, error = %e, "Charge could not be attempted");
                OrderReceipt::failed(OrderFailure::PaymentError)
            }
        }
    }
}
