//! HTTP mail relay client (Brevo-compatible JSON API).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use workout_core::config::MailConfig;
use workout_core::error::{AppError, ErrorKind};
use workout_core::result::AppResult;
use workout_core::traits::{MailSender, OutgoingMail};

const USER_AGENT: &str = concat!("workout-tracker/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RelayAddress<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RelaySendBody<'a> {
    sender: RelayAddress<'a>,
    to: Vec<RelayAddress<'a>>,
    subject: &'a str,
    text_content: &'a str,
}

/// Delivers mail through an HTTP relay.
#[derive(Clone)]
pub struct RelayMailSender {
    client: Client,
    endpoint: String,
    api_key: String,
    sender_email: String,
    sender_name: String,
}

impl std::fmt::Debug for RelayMailSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayMailSender")
            .field("endpoint", &self.endpoint)
            .field("sender_email", &self.sender_email)
            .finish()
    }
}

impl RelayMailSender {
    /// Creates a relay sender from the mail configuration section.
    pub fn from_config(config: &MailConfig) -> Result<Self, AppError> {
        let required = |value: &Option<String>, key: &str| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .ok_or_else(|| {
                    AppError::configuration(format!("{key} is required for the relay provider"))
                })
        };

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                let message = "Failed to build mail relay client";
                AppError::with_source(ErrorKind::Configuration, message, e)
            })?;

        Ok(Self {
            client,
            endpoint: required(&config.relay_url, "mail.relay_url")?,
            api_key: required(&config.relay_api_key, "mail.relay_api_key")?,
            sender_email: required(&config.sender_email, "mail.sender_email")?,
            sender_name: config.sender_name.clone(),
        })
    }
}

#[async_trait]
impl MailSender for RelayMailSender {
    async fn send(&self, mail: &OutgoingMail) -> AppResult<()> {
        let body = RelaySendBody {
            sender: RelayAddress {
                email: &self.sender_email,
                name: Some(self.sender_name.as_str()).filter(|n| !n.is_empty()),
            },
            to: vec![RelayAddress {
                email: &mail.recipient_email,
                name: Some(mail.recipient_name.as_str()).filter(|n| !n.is_empty()),
            }],
            subject: &mail.subject,
            text_content: &mail.body,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Mail relay request failed", e)
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(recipient = %mail.recipient_email, "Mail accepted by relay");
            return Ok(());
        }

        let detail = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), detail = %detail, "Mail relay rejected message");
        Err(AppError::external_service(format!(
            "Mail relay rejected message (status={status})"
        )))
    }
}
