//! Outbound mail seam consumed by the auth service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// A fully rendered message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMail {
    /// Recipient address.
    pub recipient_email: String,
    /// Recipient display name.
    pub recipient_name: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

/// Trait for mail delivery backends.
///
/// Implementations report transport or configuration problems as
/// `ExternalService` / `Configuration` errors; they never retry internally.
#[async_trait]
pub trait MailSender: Send + Sync + std::fmt::Debug + 'static {
    /// Deliver a single message.
    async fn send(&self, mail: &OutgoingMail) -> AppResult<()>;
}
