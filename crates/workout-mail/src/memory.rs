//! In-memory outbox.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use workout_core::error::AppError;
use workout_core::result::AppResult;
use workout_core::traits::{MailSender, OutgoingMail};

/// Records every message it is asked to send. Can be told to fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryMailSender {
    outbox: Arc<Mutex<Vec<OutgoingMail>>>,
    failing: Arc<AtomicBool>,
}

impl MemoryMailSender {
    /// Creates an empty outbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent sends fail (`true`) or succeed (`false`).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Messages delivered so far, oldest first.
    pub async fn sent(&self) -> Vec<OutgoingMail> {
        self.outbox.lock().await.clone()
    }

    /// Most recent message to `email`, if any.
    pub async fn last_to(&self, email: &str) -> Option<OutgoingMail> {
        self.outbox
            .lock()
            .await
            .iter()
            .rev()
            .find(|m| m.recipient_email == email)
            .cloned()
    }
}

#[async_trait]
impl MailSender for MemoryMailSender {
    async fn send(&self, mail: &OutgoingMail) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::external_service("Mail transport unavailable"));
        }
        self.outbox.lock().await.push(mail.clone());
        Ok(())
    }
}
