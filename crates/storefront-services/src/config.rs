//! # Storefront Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_OPEN_HOUR=9                                             │
//! │     STOREFRONT_CLOSE_HOUR=21                                           │
//! │     STOREFRONT_HOLIDAY_DISCOUNT_BPS=1500                               │
//! │     STOREFRONT_WELCOME_MESSAGE="Welcome!"                              │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     08:00-20:00, 20% on Dec 25, usernames 5-15, US=16 / UK=17          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [hours]
//! open_hour = 8
//! close_hour = 20
//!
//! [promotions]
//! month = 12
//! day = 25
//! discount_bps = 2000
//!
//! [usernames]
//! min_length = 5
//! max_length = 15
//!
//! [accounts]
//! welcome_message = "Welcome aboard!"
//!
//! [driving_ages]
//! US = 16
//! UK = 17
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use storefront_core::schedule::{HolidayPromotion, OpeningHours};
use storefront_core::validation::{DrivingAgeTable, UsernamePolicy};
use storefront_core::DiscountRate;
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};

// =============================================================================
// Account Settings
// =============================================================================

/// Settings for the sign-up and login flows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSettings {
    /// Body of the email sent after a successful sign-up.
    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,
}

fn default_welcome_message() -> String {
    "Welcome aboard!".to_string()
}

impl Default for AccountSettings {
    fn default() -> Self {
        AccountSettings {
            welcome_message: default_welcome_message(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete storefront configuration.
///
/// Unknown sections are rejected so a misspelled table name cannot fall back
/// to defaults unnoticed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub hours: OpeningHours,

    /// The `[promotions]` table.
    #[serde(default, rename = "promotions")]
    pub holiday: HolidayPromotion,

    #[serde(default)]
    pub usernames: UsernamePolicy,

    #[serde(default)]
    pub accounts: AccountSettings,

    #[serde(default)]
    pub driving_ages: DrivingAgeTable,
}

impl StorefrontConfig {
    /// Loads configuration from file and environment.
    ///
    /// `config_path` overrides the platform default location. A missing file
    /// is not an error; defaults are used instead.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration or falls back to defaults.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document. Does not validate.
    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Writes the configuration as TOML, creating parent directories.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ConfigError::Invalid("no config directory available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Saved storefront config");
        Ok(())
    }

    /// Checks that every section makes sense.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.hours.close_hour > 24 {
            return Err(ConfigError::Invalid(format!(
                "close_hour must be at most 24, got {}",
                self.hours.close_hour
            )));
        }

        if self.hours.open_hour >= self.hours.close_hour {
            return Err(ConfigError::Invalid(format!(
                "open_hour ({}) must be before close_hour ({})",
                self.hours.open_hour, self.hours.close_hour
            )));
        }

        DiscountRate::try_from_bps(self.holiday.discount.bps())
            .map_err(|e| ConfigError::Invalid(format!("holiday discount: {}", e)))?;

        // 2024 is a leap year, so Feb 29 is accepted
        if NaiveDate::from_ymd_opt(2024, self.holiday.month, self.holiday.day).is_none() {
            return Err(ConfigError::Invalid(format!(
                "holiday {}/{} is not a calendar date",
                self.holiday.month, self.holiday.day
            )));
        }

        if self.usernames.min_length > self.usernames.max_length {
            return Err(ConfigError::Invalid(format!(
                "usernames.min_length ({}) exceeds max_length ({})",
                self.usernames.min_length, self.usernames.max_length
            )));
        }

        Ok(())
    }

    /// Applies `STOREFRONT_*` environment variables.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup. Unparseable values are logged
    /// and ignored.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("STOREFRONT_OPEN_HOUR") {
            match value.parse::<u32>() {
                Ok(hour) => {
                    debug!(open_hour = hour, "Overriding open hour from environment");
                    self.hours.open_hour = hour;
                }
                Err(_) => warn!(value = %value, "Ignoring non-numeric STOREFRONT_OPEN_HOUR"),
            }
        }

        if let Some(value) = lookup("STOREFRONT_CLOSE_HOUR") {
            match value.parse::<u32>() {
                Ok(hour) => {
                    debug!(close_hour = hour, "Overriding close hour from environment");
                    self.hours.close_hour = hour;
                }
                Err(_) => warn!(value = %value, "Ignoring non-numeric STOREFRONT_CLOSE_HOUR"),
            }
        }

        if let Some(value) = lookup("STOREFRONT_HOLIDAY_DISCOUNT_BPS") {
            match value.parse::<u32>() {
                Ok(bps) => self.holiday.discount = DiscountRate::from_bps(bps),
                Err(_) => warn!(value = %value, "Ignoring non-numeric STOREFRONT_HOLIDAY_DISCOUNT_BPS"),
            }
        }

        if let Some(message) = lookup("STOREFRONT_WELCOME_MESSAGE") {
            self.accounts.welcome_message = message;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.hours.open_hour, 8);
        assert_eq!(config.hours.close_hour, 20);
        assert_eq!(config.holiday.discount.bps(), 2000);
        assert_eq!(config.usernames.min_length, 5);
        assert_eq!(config.usernames.max_length, 15);
        assert_eq!(config.driving_ages.minimum_age("US"), Some(16));
        assert_eq!(config.driving_ages.minimum_age("UK"), Some(17));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = StorefrontConfig::from_toml(
            r#"
            [hours]
            open_hour = 9

            [driving_ages]
            DE = 18
            "#,
        )
        .unwrap();

        assert_eq!(config.hours.open_hour, 9);
        assert_eq!(config.hours.close_hour, 20);
        assert_eq!(config.driving_ages.minimum_age("DE"), Some(18));
        assert_eq!(config.driving_ages.minimum_age("US"), None);
        assert_eq!(config.accounts.welcome_message, "Welcome aboard!");
    }

    #[test]
    fn test_configured_rules_drive_core_checks() {
        let config = StorefrontConfig::from_toml(
            r#"
            [usernames]
            min_length = 3
            max_length = 8

            [driving_ages]
            US = 16
            CA = 16
            "#,
        )
        .unwrap();

        assert!(config.usernames.accepts(Some("mona")));
        assert!(!config.usernames.accepts(Some("mona_lisa_smith")));
        assert_eq!(config.driving_ages.can_drive(16, "CA"), Ok(true));
        assert!(config.driving_ages.can_drive(16, "UK").is_err());
    }

    #[test]
    fn test_promotions_section() {
        let config = StorefrontConfig::from_toml(
            r#"
            [promotions]
            month = 12
            day = 24
            discount_bps = 1500
            "#,
        )
        .unwrap();

        assert_eq!(config.holiday.month, 12);
        assert_eq!(config.holiday.day, 24);
        assert_eq!(config.holiday.discount.bps(), 1500);
    }

    #[test]
    fn test_unknown_section_is_parse_error() {
        let err = StorefrontConfig::from_toml("[holidays]
day = 24
").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_saved_file_uses_promotions_table() {
        let text = toml::to_string_pretty(&StorefrontConfig::default()).unwrap();
        assert!(text.contains("[promotions]"));
        assert!(text.contains("discount_bps = 2000"));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = StorefrontConfig::from_toml("[hours\nopen_hour = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_rejects_inverted_hours() {
        let mut config = StorefrontConfig::default();
        config.hours.open_hour = 20;
        config.hours.close_hour = 8;
        assert!(config.validate().is_err());

        config.hours = OpeningHours {
            open_hour: 0,
            close_hour: 25,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_holiday() {
        let mut config = StorefrontConfig::default();
        config.holiday.discount = DiscountRate::from_bps(10_000);
        assert!(config.validate().is_err());

        let mut config = StorefrontConfig::default();
        config.holiday.month = 2;
        config.holiday.day = 30;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_inverted_username_bounds() {
        let mut config = StorefrontConfig::default();
        config.usernames = UsernamePolicy {
            min_length: 10,
            max_length: 3,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let mut config = StorefrontConfig::default();
        config.apply_overrides(lookup(&[
            ("STOREFRONT_OPEN_HOUR", "9"),
            ("STOREFRONT_CLOSE_HOUR", "21"),
            ("STOREFRONT_HOLIDAY_DISCOUNT_BPS", "1500"),
            ("STOREFRONT_WELCOME_MESSAGE", "Welcome, friend"),
        ]));

        assert_eq!(config.hours.open_hour, 9);
        assert_eq!(config.hours.close_hour, 21);
        assert_eq!(config.holiday.discount.bps(), 1500);
        assert_eq!(config.accounts.welcome_message, "Welcome, friend");
    }

    #[test]
    fn test_unparseable_override_is_ignored() {
        let mut config = StorefrontConfig::default();
        config.apply_overrides(lookup(&[("STOREFRONT_OPEN_HOUR", "nine")]));
        assert_eq!(config.hours.open_hour, 8);
    }

    #[test]
    fn test_save_then_load_from_file() {
        let path = std::env::temp_dir()
            .join(format!("storefront-config-{}", std::process::id()))
            .join("storefront.toml");

        let mut config = StorefrontConfig::default();
        config.hours.close_hour = 22;
        config.driving_ages.insert("FR", 18);
        config.save(Some(path.clone())).unwrap();

        let loaded = StorefrontConfig::load(Some(path.clone())).unwrap();
        assert_eq!(loaded.hours.close_hour, 22);
        assert_eq!(loaded.driving_ages.minimum_age("FR"), Some(18));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_or_default_on_invalid_file() {
        let dir = std::env::temp_dir().join(format!("storefront-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("storefront.toml");
        std::fs::write(&path, "[hours]\nopen_hour = 22\nclose_hour = 6\n").unwrap();

        let config = StorefrontConfig::load_or_default(Some(path));
        assert_eq!(config.hours, OpeningHours::default());

        let _ = std::fs::remove_dir_all(dir);
    }
}
