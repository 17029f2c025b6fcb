//! Inputs and settings for [`AuthService`](super::AuthService).

use std::time::Duration;

use serde::Deserialize;

use workout_core::config::AppConfig;
use workout_mail::MailTemplates;

/// Registration details.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// New password submitted with a reset token.
#[derive(Debug, Clone, Deserialize)]
pub struct ResetPasswordInput {
    pub password: String,
    pub confirm_password: String,
}

/// Password change by an authenticated caller.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordInput {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Behavioural knobs for the auth service.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    /// Message renderer for verification and reset mail.
    pub templates: MailTemplates,
    /// Upper bound on a single mail send.
    pub mail_timeout: Duration,
    /// Report every login failure as "Invalid credentials".
    pub strict_enumeration_resistance: bool,
}

impl AuthSettings {
    /// Derives settings from the loaded configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            templates: MailTemplates::new(&config.mail.app_url, &config.mail.sender_name),
            mail_timeout: Duration::from_secs(config.mail.timeout_seconds),
            strict_enumeration_resistance: config.auth.strict_enumeration_resistance,
        }
    }
}
