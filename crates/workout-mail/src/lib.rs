//! # workout-mail
//!
//! Implementations of [`workout_core::traits::MailSender`] and the text of
//! the messages the auth flows send.

pub mod logger;
pub mod memory;
pub mod relay;
pub mod templates;

use std::sync::Arc;

use workout_core::config::{MailConfig, MailProvider};
use workout_core::error::AppError;
use workout_core::traits::MailSender;

pub use logger::LogMailSender;
pub use memory::MemoryMailSender;
pub use relay::RelayMailSender;
pub use templates::MailTemplates;

/// Builds the sender selected by `mail.provider`.
pub fn build_sender(config: &MailConfig) -> Result<Arc<dyn MailSender>, AppError> {
    match config.provider {
        MailProvider::Log => Ok(Arc::new(LogMailSender::new())),
        MailProvider::Relay => Ok(Arc::new(RelayMailSender::from_config(config)?)),
    }
}
