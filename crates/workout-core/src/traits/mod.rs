//! Traits defined in `workout-core` and implemented by other crates.

pub mod clock;
pub mod mailer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use mailer::{MailSender, OutgoingMail};
