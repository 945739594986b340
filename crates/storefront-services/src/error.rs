//! # Service Error Types
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Service Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │  Capabilities   │  │     Input               │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Invalid        │  │  Payment        │  │  Validation             │ │
//! │  │  Io / Parse     │  │  Mail           │  │  InvalidExchangeRate    │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A declined charge is NOT an error: it becomes an `OrderReceipt` with
//! `payment_error`. Only transport-level failures show up here.

use storefront_core::ValidationError;
use thiserror::Error;

/// Result type alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result type alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors produced by the services layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller input failed a core validation rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The payment processor could not be reached or answered garbage.
    #[error("Payment processor error: {0}")]
    Payment(String),

    /// The mail capability refused the message.
    #[error("Failed to send email to {address}: {reason}")]
    Mail { address: String, reason: String },

    /// The currency capability returned a rate that cannot be applied.
    #[error("Invalid exchange rate {rate} for {currency}")]
    InvalidExchangeRate { currency: String, rate: f64 },

    /// Configuration problem.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while loading or validating `storefront.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration parsed but breaks a rule.
    #[error("Invalid storefront configuration: {0}")]
    Invalid(String),

    /// Could not read or write the config file.
    #[error("Config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// TOML syntax or shape error.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Could not render the config back to TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_passes_through_unchanged() {
        let err: ServiceError = ValidationError::Required {
            field: "email".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Invalid email: is required");
    }

    #[test]
    fn test_mail_error_message() {
        let err = ServiceError::Mail {
            address: "name@gmail.com".to_string(),
            reason: "mailbox full".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to send email to name@gmail.com: mailbox full"
        );
    }

    #[test]
    fn test_config_error_wraps() {
        let err: ServiceError = ConfigError::Invalid("open_hour must be < close_hour".into()).into();
        assert!(matches!(err, ServiceError::Config(ConfigError::Invalid(_))));
    }
}
