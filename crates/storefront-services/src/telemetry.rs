//! Tracing setup.
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show debug messages
//! - `RUST_LOG=storefront_services=trace` - Trace this crate only
//! - Default: INFO, DEBUG for the storefront crates

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparseable.
///
/// Target directives match by prefix, so `storefront` covers both
/// `storefront_core` and `storefront_services`.
pub const DEFAULT_FILTER: &str = "info,storefront=debug";

/// Installs the global fmt subscriber.
///
/// Returns false if a subscriber was already installed, so it is safe to
/// call from every entry point and test.
pub fn init_tracing() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
