//! # Store Calendar
//!
//! Answers "is support online?" and "what is today's discount?" by reading
//! the injected [`Clock`] and handing the time to the pure rules in
//! `storefront_core::schedule`.

use std::sync::Arc;

use storefront_core::schedule::{HolidayPromotion, OpeningHours};
use storefront_core::DiscountRate;
use tracing::debug;

use crate::capabilities::{Clock, SystemClock};
use crate::config::StorefrontConfig;

/// Clock-driven view of opening hours and holiday promotions.
pub struct StoreCalendar {
    clock: Arc<dyn Clock>,
    hours: OpeningHours,
    holiday: HolidayPromotion,
}

impl StoreCalendar {
    /// Calendar on the system clock with the configured rules.
    pub fn system(config: &StorefrontConfig) -> Self {
        Self::with_clock(Arc::new(SystemClock), config)
    }

    pub fn with_clock(clock: Arc<dyn Clock>, config: &StorefrontConfig) -> Self {
        StoreCalendar {
            clock,
            hours: config.hours,
            holiday: config.holiday,
        }
    }

    /// True iff the current local hour is within the opening window.
    pub fn is_online(&self) -> bool {
        let now = self.clock.now();
        let online = self.hours.is_open_at(now);
        debug!(%now, online, "Checked opening hours");
        online
    }

    /// The holiday discount if today is the holiday, zero otherwise.
    pub fn get_discount(&self) -> DiscountRate {
        self.holiday.discount_on(self.clock.now().date())
    }
}
