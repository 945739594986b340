//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError         - Out-of-range discount rates                   │
//! │  ├── ValidationError   - One rejected input                            │
//! │  ├── ValidationErrors  - Several rejected inputs, reported together    │
//! │  └── StackError        - Misuse of the Stack container                 │
//! │                                                                         │
//! │  storefront-services errors (separate crate)                           │
//! │  ├── ServiceError      - Capability failures                           │
//! │  └── ConfigError       - Bad storefront.toml / env overrides           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Message Convention
//! Every `ValidationError` message starts with `Invalid <field>`, so callers
//! that only look at the text still see which input was rejected.

use std::fmt;

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Discount rate is not a proper fraction.
    ///
    /// ## When This Occurs
    /// - A configured promotion uses 0 bps or 10000+ bps
    /// - A coupon catalog entry is mistyped
    #[error("Discount of {bps} bps is outside (0, 10000)")]
    DiscountOutOfRange { bps: u32 },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Returned in `Err` instead of sentinel strings. Display text always starts
/// with `Invalid`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("Invalid {field}: is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("Invalid {field}: must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Numeric value is below the allowed minimum.
    #[error("Invalid {field}: must be at least {min}")]
    BelowMinimum { field: String, min: i64 },

    /// Value must be positive.
    #[error("Invalid {field}: must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed email).
    #[error("Invalid {field}: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in the known set (e.g., unknown country code).
    #[error("Invalid {field}: '{value}' is not recognized")]
    Unrecognized { field: String, value: String },
}

impl ValidationError {
    /// Returns the name of the rejected field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::BelowMinimum { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::Unrecognized { field, .. } => field,
        }
    }
}

/// A set of validation failures checked independently and reported together.
///
/// Display joins the individual messages with `"; "`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        ValidationErrors(Vec::new())
    }

    /// Records one failure.
    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the recorded failures in check order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Returns true if any failure concerns `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field() == field)
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// =============================================================================
// Stack Error
// =============================================================================

/// Errors raised by [`crate::stack::Stack`] when used incorrectly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// `pop` or `peek` was called with nothing on the stack.
    #[error("Stack is empty")]
    Empty,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
