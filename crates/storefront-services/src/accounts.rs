//! # Accounts
//!
//! Sign-up and passwordless login.
//!
//! ## Flows
//! ```text
//! sign_up(email)                      login(email)
//!      │                                   │
//!      ├── bad format? → false             ▼
//!      │   (nothing sent)             CodeGenerator::generate_code
//!      ▼                                   │
//! Mailer: welcome message                  ▼
//!      │                              Mailer: "<code>"
//!      ▼
//!    true
//! ```

use std::sync::Arc;

use storefront_core::validation::validate_email;
use tracing::{debug, info};

use crate::capabilities::{CodeGenerator, Mailer};
use crate::config::AccountSettings;
use crate::error::ServiceResult;

/// Account sign-up and login over a mailer and a code generator.
pub struct AccountService<M> {
    mailer: M,
    codes: Arc<dyn CodeGenerator>,
    settings: AccountSettings,
}

impl<M: Mailer> AccountService<M> {
    pub fn new(mailer: M, codes: Arc<dyn CodeGenerator>) -> Self {
        Self::with_settings(mailer, codes, AccountSettings::default())
    }

    pub fn with_settings(mailer: M, codes: Arc<dyn CodeGenerator>, settings: AccountSettings) -> Self {
        AccountService {
            mailer,
            codes,
            settings,
        }
    }

    /// Registers `email` and sends the welcome message.
    ///
    /// Returns `Ok(false)` without contacting the mailer when the address is
    /// malformed.
    pub async fn sign_up(&self, email: &str) -> ServiceResult<bool> {
        if let Err(e) = validate_email(email) {
            debug!(email = %email, reason = %e, "Rejected sign-up");
            return Ok(false);
        }

        self.mailer
            .send_email(email, &self.settings.welcome_message)
            .await?;

        info!(email = %email, "Welcome email sent");
        Ok(true)
    }

    /// Emails a fresh one-time login code to `email`.
    pub async fn login(&self, email: &str) -> ServiceResult<()> {
        let code = self.codes.generate_code();
        self.mailer.send_email(email, &code.to_string()).await?;

        info!(email = %email, "One-time login code sent");
        Ok(())
    }
}
