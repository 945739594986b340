//! # storefront-core: Pure Business Rules for the Storefront Toolkit
//!
//! This crate holds every rule of the storefront that can be expressed as a
//! pure function: coupon math, input validation, opening hours, and the
//! small LIFO [`Stack`] container.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Toolkit Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 storefront-services                             │   │
//! │  │   submit_order, sign_up, login, is_online, get_discount         │   │
//! │  │   (talks to payment / mail / clock through traits)              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌────────────┐  ┌──────────┐     │   │
//! │  │   │  coupon  │  │  money   │  │ validation │  │  stack   │     │   │
//! │  │   │ SAVE10   │  │  Money   │  │ usernames  │  │ Stack<T> │     │   │
//! │  │   │ SAVE20   │  │ discount │  │ ages, email│  │  LIFO    │     │   │
//! │  │   └──────────┘  └──────────┘  └────────────┘  └──────────┘     │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`coupon`] - Static coupon catalog and `calculate_discount`
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Domain types (DiscountRate, Order, OrderReceipt, ...)
//! - [`validation`] - Username, age, price-range, driving-age and email rules
//! - [`schedule`] - Opening hours and the holiday promotion
//! - [`stack`] - LIFO container
//! - [`numbers`] - `max` and `fizz_buzz`
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::coupon::calculate_discount;
//! use storefront_core::money::Money;
//!
//! let price = Money::from_cents(1000); // $10.00
//! let discounted = calculate_discount(price, "SAVE20").unwrap();
//! assert_eq!(discounted.cents(), 800);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod coupon;
pub mod error;
pub mod money;
pub mod numbers;
pub mod schedule;
pub mod stack;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use coupon::{calculate_discount, coupons, Coupon};
pub use error::{CoreError, StackError, ValidationError, ValidationErrors};
pub use money::Money;
pub use stack::Stack;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Shortest username accepted by `validate_user_input`.
pub const MIN_SIGNUP_USERNAME_LENGTH: usize = 3;

/// Youngest age accepted by `validate_user_input`.
pub const MIN_SIGNUP_AGE: u32 = 18;

/// One whole in basis points (100%).
pub const BPS_PER_UNIT: u32 = 10_000;
