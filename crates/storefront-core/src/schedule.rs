//! # Schedule Rules
//!
//! Time-based rules, written as pure functions of a local timestamp.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  00:00 ─────── 08:00 ══════════════════════ 20:00 ─────── 24:00        │
//! │     closed      │        open (support online)  │      closed          │
//! │                 └─ 08:00 is open                └─ 20:00 is closed     │
//! │                                                                         │
//! │  Dec 24         Dec 25 (00:00 - 23:59)          Dec 26                  │
//! │  no discount    20% holiday discount            no discount             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The services crate reads the clock and calls into these.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::types::DiscountRate;

// =============================================================================
// Opening Hours
// =============================================================================

/// Daily opening window `[open_hour, close_hour)` in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    #[serde(default = "default_open_hour")]
    pub open_hour: u32,

    #[serde(default = "default_close_hour")]
    pub close_hour: u32,
}

fn default_open_hour() -> u32 {
    8
}

fn default_close_hour() -> u32 {
    20
}

impl Default for OpeningHours {
    fn default() -> Self {
        OpeningHours {
            open_hour: default_open_hour(),
            close_hour: default_close_hour(),
        }
    }
}

impl OpeningHours {
    /// True iff the hour of `at` falls in `[open_hour, close_hour)`.
    pub fn is_open_at(&self, at: NaiveDateTime) -> bool {
        let hour = at.hour();
        hour >= self.open_hour && hour < self.close_hour
    }
}

/// [`OpeningHours::is_open_at`] with the default 08:00-20:00 window.
pub fn is_online_at(at: NaiveDateTime) -> bool {
    OpeningHours::default().is_open_at(at)
}

// =============================================================================
// Holiday Promotion
// =============================================================================

/// A discount granted on one calendar day every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayPromotion {
    #[serde(default = "default_holiday_month")]
    pub month: u32,

    #[serde(default = "default_holiday_day")]
    pub day: u32,

    #[serde(default = "default_holiday_discount", rename = "discount_bps")]
    pub discount: DiscountRate,
}

fn default_holiday_month() -> u32 {
    12
}

fn default_holiday_day() -> u32 {
    25
}

fn default_holiday_discount() -> DiscountRate {
    DiscountRate::from_bps(2000)
}

impl Default for HolidayPromotion {
    fn default() -> Self {
        HolidayPromotion {
            month: default_holiday_month(),
            day: default_holiday_day(),
            discount: default_holiday_discount(),
        }
    }
}

impl HolidayPromotion {
    pub fn applies_on(&self, date: NaiveDate) -> bool {
        date.month() == self.month && date.day() == self.day
    }

    /// The promotion's discount on its day, zero on every other day.
    pub fn discount_on(&self, date: NaiveDate) -> DiscountRate {
        if self.applies_on(date) {
            self.discount
        } else {
            DiscountRate::zero()
        }
    }
}

/// Christmas discount: 20% on December 25, nothing otherwise.
pub fn holiday_discount_on(date: NaiveDate) -> DiscountRate {
    HolidayPromotion::default().discount_on(date)
}
