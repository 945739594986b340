//! Hand-written test doubles for every capability.
//!
//! Each fake records its calls behind a shared `Mutex`; clones share the
//! same log so a test can keep a handle after moving one into a service.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use storefront_core::{CardDetails, ChargeOutcome, Money, ShippingQuote};

use crate::capabilities::{
    Analytics, CodeGenerator, CurrencyRates, Mailer, PaymentGateway, ShippingQuotes,
};
use crate::error::{ServiceError, ServiceResult};

// =============================================================================
// Payment
// =============================================================================

#[derive(Clone)]
pub struct FakeGateway {
    response: Arc<Mutex<Result<ChargeOutcome, String>>>,
    calls: Arc<Mutex<Vec<(CardDetails, Money)>>>,
}

impl FakeGateway {
    pub fn returning(outcome: ChargeOutcome) -> Self {
        FakeGateway {
            response: Arc::new(Mutex::new(Ok(outcome))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn unreachable(reason: &str) -> Self {
        FakeGateway {
            response: Arc::new(Mutex::new(Err(reason.to_string()))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<(CardDetails, Money)> {
        self.calls.lock().unwrap().clone()
    }
}

impl PaymentGateway for FakeGateway {
    async fn charge(&self, card: &CardDetails, amount: Money) -> ServiceResult<ChargeOutcome> {
        self.calls.lock().unwrap().push((card.clone(), amount));
        let response = self.response.lock().unwrap().clone();
        response.map_err(ServiceError::Payment)
    }
}

// =============================================================================
// Mail
// =============================================================================

#[derive(Clone, Default)]
pub struct FakeMailer {
    sent: Arc<Mutex<Vec<(String, String)>>>,
    fail_with: Option<String>,
}

impl FakeMailer {
    pub fn new() -> Self {
        FakeMailer::default()
    }

    pub fn failing(reason: &str) -> Self {
        FakeMailer {
            sent: Arc::default(),
            fail_with: Some(reason.to_string()),
        }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

impl Mailer for FakeMailer {
    async fn send_email(&self, address: &str, message: &str) -> ServiceResult<()> {
        if let Some(reason) = &self.fail_with {
            return Err(ServiceError::Mail {
                address: address.to_string(),
                reason: reason.clone(),
            });
        }
        self.sent
            .lock()
            .unwrap()
            .push((address.to_string(), message.to_string()));
        Ok(())
    }
}

// =============================================================================
// Sync capabilities
// =============================================================================

/// Hands out a fixed sequence of codes and remembers what it returned.
#[derive(Default)]
pub struct FakeCodes {
    next: Mutex<Vec<u32>>,
    issued: Mutex<Vec<u32>>,
}

impl FakeCodes {
    pub fn sequence(codes: &[u32]) -> Self {
        let mut next = codes.to_vec();
        next.reverse();
        FakeCodes {
            next: Mutex::new(next),
            issued: Mutex::new(Vec::new()),
        }
    }

    pub fn issued(&self) -> Vec<u32> {
        self.issued.lock().unwrap().clone()
    }
}

impl CodeGenerator for FakeCodes {
    fn generate_code(&self) -> u32 {
        let code = self.next.lock().unwrap().pop().unwrap_or(0);
        self.issued.lock().unwrap().push(code);
        code
    }
}

#[derive(Default)]
pub struct FakeRates(pub HashMap<String, f64>);

impl FakeRates {
    pub fn with(currency: &str, rate: f64) -> Self {
        FakeRates(HashMap::from([(currency.to_string(), rate)]))
    }
}

impl CurrencyRates for FakeRates {
    fn exchange_rate(&self, currency: &str) -> f64 {
        self.0.get(currency).copied().unwrap_or(f64::NAN)
    }
}

pub struct FakeShipping(pub Option<ShippingQuote>);

impl ShippingQuotes for FakeShipping {
    fn quote(&self, _destination: &str) -> Option<ShippingQuote> {
        self.0
    }
}

#[derive(Default)]
pub struct FakeAnalytics {
    views: Mutex<Vec<String>>,
}

impl FakeAnalytics {
    pub fn views(&self) -> Vec<String> {
        self.views.lock().unwrap().clone()
    }
}

impl Analytics for FakeAnalytics {
    fn track_page_view(&self, path: &str) {
        self.views.lock().unwrap().push(path.to_string());
    }
}
