//! # storefront-services: Flows over External Capabilities
//!
//! Every collaborator outside the process (payment processor, mail server,
//! currency feed, carrier, analytics, the clock) is reached through a trait
//! in [`capabilities`]. The services here only orchestrate.
//!
//! ## Modules
//!
//! - [`capabilities`] - Traits for external collaborators
//! - [`orders`] - `submit_order`
//! - [`accounts`] - `sign_up`, `login`
//! - [`calendar`] - `is_online`, `get_discount`
//! - [`pricing`] - currency conversion and shipping info
//! - [`pages`] - page rendering with analytics
//! - [`config`] - storefront.toml + environment overrides
//! - [`telemetry`] - tracing subscriber setup
//! - [`error`] - Service and configuration errors
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use storefront_services::calendar::StoreCalendar;
//! use storefront_services::capabilities::FixedClock;
//! use storefront_services::config::StorefrontConfig;
//!
//! let christmas = NaiveDate::from_ymd_opt(2024, 12, 25)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//! let calendar = StoreCalendar::with_clock(Arc::new(FixedClock(christmas)), &StorefrontConfig::default());
//!
//! assert!(calendar.is_online());
//! assert_eq!(calendar.get_discount().as_fraction(), 0.2);
//! ```

pub mod accounts;
pub mod calendar;
pub mod capabilities;
pub mod config;
pub mod error;
pub mod orders;
pub mod pages;
pub mod pricing;
pub mod telemetry;

#[cfg(test)]
mod fakes;

pub use accounts::AccountService;
pub use calendar::StoreCalendar;
pub use config::StorefrontConfig;
pub use error::{ConfigError, ServiceError, ServiceResult};
pub use orders::OrderService;
pub use pricing::{PricingService, ShippingInfo};
