//! Outbound mail configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Which mail sender the server wires in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Write messages to the log instead of delivering them.
    Log,
    /// Deliver through an HTTP mail relay.
    Relay,
}

/// Outbound mail configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// Sender implementation.
    #[serde(default = "default_provider")]
    pub provider: MailProvider,
    /// Relay endpoint accepting JSON send requests.
    #[serde(default)]
    pub relay_url: Option<String>,
    /// API key presented to the relay.
    #[serde(default)]
    pub relay_api_key: Option<String>,
    /// From address.
    #[serde(default)]
    pub sender_email: Option<String>,
    /// From display name.
    #[serde(default = "default_sender_name")]
    pub sender_name: String,
    /// Public base URL used to build verification and reset links.
    #[serde(default = "default_app_url")]
    pub app_url: String,
    /// Upper bound on a single send, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            relay_url: None,
            relay_api_key: None,
            sender_email: None,
            sender_name: default_sender_name(),
            app_url: default_app_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl MailConfig {
    /// Validates the section for the selected provider.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_seconds == 0 {
            return Err(AppError::configuration(
                "mail.timeout_seconds must be greater than zero",
            ));
        }
        if self.provider == MailProvider::Relay {
            let missing = [
                ("mail.relay_url", &self.relay_url),
                ("mail.relay_api_key", &self.relay_api_key),
                ("mail.sender_email", &self.sender_email),
            ]
            .into_iter()
            .find(|(_, v)| v.as_deref().is_none_or(|s| s.trim().is_empty()));

            if let Some((key, _)) = missing {
                return Err(AppError::configuration(format!(
                    "{key} is required when mail.provider = \"relay\""
                )));
            }
        }
        Ok(())
    }
}

fn default_provider() -> MailProvider {
    MailProvider::Log
}

fn default_sender_name() -> String {
    "Kinetic Core Team".to_string()
}

fn default_app_url() -> String {
    "http://localhost:8080/api/v1".to_string()
}

fn default_timeout() -> u64 {
    10
}
