//! Development sender that only logs.

use async_trait::async_trait;

use workout_core::result::AppResult;
use workout_core::traits::{MailSender, OutgoingMail};

/// Writes each message to the log instead of delivering it.
#[derive(Debug, Clone, Default)]
pub struct LogMailSender;

impl LogMailSender {
    /// Creates a new log sender.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MailSender for LogMailSender {
    async fn send(&self, mail: &OutgoingMail) -> AppResult<()> {
        // The body carries a live token; keep it at debug.
        tracing::info!(
            recipient = %mail.recipient_email,
            subject = %mail.subject,
            "Mail delivery skipped (log provider)"
        );
        tracing::debug!(body = %mail.body, "Mail body");
        Ok(())
    }
}
