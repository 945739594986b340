//! # Validation Module
//!
//! Input validation rules for sign-up forms, price filters and the
//! driving-age lookup.
//!
//! ## Result Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Results                                 │
//! │                                                                         │
//! │  Yes/no questions        is_valid_username, is_price_in_range,         │
//! │                          is_valid_email  →  bool                       │
//! │                                                                         │
//! │  Single rejected input   can_drive  →  Result<bool, ValidationError>   │
//! │                                                                         │
//! │  Several inputs at once  validate_user_input                           │
//! │                          →  Result<(), ValidationErrors>               │
//! │                          every failing field is reported               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{is_valid_username, validate_user_input};
//!
//! assert!(validate_user_input("Mona", 20).is_ok());
//! assert!(is_valid_username(Some("mona_lisa")));
//! assert!(!is_valid_username(None));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ValidationError, ValidationErrors};
use crate::money::Money;
use crate::{MIN_SIGNUP_AGE, MIN_SIGNUP_USERNAME_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Message shown when `validate_user_input` accepts everything.
pub const VALIDATION_SUCCESS: &str = "Validation successful";

// =============================================================================
// Sign-up Form
// =============================================================================

/// Validates a sign-up form.
///
/// ## Rules
/// - Username must have at least 3 characters
/// - Age must be at least 18
///
/// Both rules are checked; when both fail, both messages are returned.
///
/// ```rust
/// use storefront_core::validation::validate_user_input;
///
/// let err = validate_user_input("", 0).unwrap_err().to_string();
/// assert!(err.contains("Invalid username"));
/// assert!(err.contains("Invalid age"));
/// ```
pub fn validate_user_input(username: &str, age: u32) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if username.chars().count() < MIN_SIGNUP_USERNAME_LENGTH {
        errors.push(ValidationError::TooShort {
            field: "username".to_string(),
            min: MIN_SIGNUP_USERNAME_LENGTH,
        });
    }

    if age < MIN_SIGNUP_AGE {
        errors.push(ValidationError::BelowMinimum {
            field: "age".to_string(),
            min: MIN_SIGNUP_AGE as i64,
        });
    }

    errors.into_result()
}

/// Renders the outcome of [`validate_user_input`] as the status line shown
/// next to the form.
pub fn user_input_status(username: &str, age: u32) -> String {
    match validate_user_input(username, age) {
        Ok(()) => VALIDATION_SUCCESS.to_string(),
        Err(errors) => errors.to_string(),
    }
}

// =============================================================================
// Usernames
// =============================================================================

/// Inclusive username length bounds for account handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernamePolicy {
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

fn default_min_length() -> usize {
    5
}

fn default_max_length() -> usize {
    15
}

impl Default for UsernamePolicy {
    fn default() -> Self {
        UsernamePolicy {
            min_length: default_min_length(),
            max_length: default_max_length(),
        }
    }
}

impl UsernamePolicy {
    /// True iff the username is present and its character count lies in
    /// `[min_length, max_length]`.
    pub fn accepts(&self, username: Option<&str>) -> bool {
        match username {
            Some(name) => {
                let len = name.chars().count();
                len >= self.min_length && len <= self.max_length
            }
            None => false,
        }
    }
}

/// Checks a username against the default policy (5 to 15 characters).
///
/// Absent input (`None`) is never valid.
pub fn is_valid_username(username: Option<&str>) -> bool {
    UsernamePolicy::default().accepts(username)
}

// =============================================================================
// Prices
// =============================================================================

/// True iff `min <= price <= max`.
pub fn is_price_in_range(price: Money, min: Money, max: Money) -> bool {
    price >= min && price <= max
}

// =============================================================================
// Driving Age
// =============================================================================

/// Minimum driving age per country code.
///
/// This is configuration data: the services crate loads it from
/// `[driving_ages]` in storefront.toml, falling back to the defaults here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrivingAgeTable(BTreeMap<String, u32>);

impl Default for DrivingAgeTable {
    fn default() -> Self {
        DrivingAgeTable::from_entries([("US", 16), ("UK", 17)])
    }
}

impl DrivingAgeTable {
    /// Builds a table from `(country code, minimum age)` pairs.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, u32)>) -> Self {
        DrivingAgeTable(
            entries
                .into_iter()
                .map(|(code, age)| (code.to_string(), age))
                .collect(),
        )
    }

    /// Returns the minimum age for a country, if known.
    pub fn minimum_age(&self, country_code: &str) -> Option<u32> {
        self.0.get(country_code).copied()
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, country_code: impl Into<String>, minimum_age: u32) {
        self.0.insert(country_code.into(), minimum_age);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decides whether someone of `age` may drive in `country_code`.
    pub fn can_drive(&self, age: u32, country_code: &str) -> ValidationResult<bool> {
        if country_code.is_empty() {
            return Err(ValidationError::Required {
                field: "country code".to_string(),
            });
        }

        let minimum = self
            .minimum_age(country_code)
            .ok_or_else(|| ValidationError::Unrecognized {
                field: "country code".to_string(),
                value: country_code.to_string(),
            })?;

        Ok(age >= minimum)
    }
}

/// [`DrivingAgeTable::can_drive`] against the default table (US=16, UK=17).
///
/// ```rust
/// use storefront_core::validation::can_drive;
///
/// assert_eq!(can_drive(17, "UK"), Ok(true));
/// assert_eq!(can_drive(15, "US"), Ok(false));
/// assert!(can_drive(18, "Invalid").is_err());
/// ```
pub fn can_drive(age: u32, country_code: &str) -> ValidationResult<bool> {
    DrivingAgeTable::default().can_drive(age, country_code)
}

// =============================================================================
// Email
// =============================================================================

/// Checks that an address looks like `local@domain.tld`.
///
/// ## Rules
/// - Exactly one `@`
/// - Non-empty local part
/// - Domain has a `.` with at least one character on each side
/// - No whitespace anywhere
///
/// This is the `[^\s@]+@[^\s@]+\.[^\s@]+` shape and nothing stricter, so
/// `a@b..c` passes while `name@.com` does not.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Same as [`is_valid_email`] but reports the failure.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "expected name@domain.tld".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
