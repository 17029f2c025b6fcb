//! Verification and password reset messages.

use workout_core::traits::OutgoingMail;

/// Subject of the email verification message.
pub const VERIFY_SUBJECT: &str = "Please verify your email";
/// Subject of the password reset message.
pub const RESET_SUBJECT: &str = "Reset your password";

/// Renders auth messages with links rooted at the public app URL.
#[derive(Debug, Clone)]
pub struct MailTemplates {
    app_url: String,
    signature: String,
}

impl MailTemplates {
    /// `app_url` is the API base the links point at, e.g. `https://host/api/v1`.
    pub fn new(app_url: impl Into<String>, signature: impl Into<String>) -> Self {
        let app_url: String = app_url.into();
        Self {
            app_url: app_url.trim_end_matches('/').to_string(),
            signature: signature.into(),
        }
    }

    /// Email verification message carrying `token`.
    pub fn verification(&self, email: &str, first_name: &str, token: &str) -> OutgoingMail {
        self.render(
            email,
            first_name,
            VERIFY_SUBJECT,
            "Please verify your email by clicking on the following link:",
            &format!("{}/verify-email?token={token}", self.app_url),
        )
    }

    /// Password reset message carrying `token`.
    pub fn password_reset(&self, email: &str, first_name: &str, token: &str) -> OutgoingMail {
        self.render(
            email,
            first_name,
            RESET_SUBJECT,
            "Please reset your password by clicking on the following link:",
            &format!("{}/reset-password?token={token}", self.app_url),
        )
    }

    fn render(
        &self,
        email: &str,
        first_name: &str,
        subject: &str,
        lead: &str,
        link: &str,
    ) -> OutgoingMail {
        OutgoingMail {
            recipient_email: email.to_string(),
            recipient_name: first_name.to_string(),
            subject: subject.to_string(),
            body: format!(
                "Hi {first_name},\n\n{lead}\n\n- {link}\n\nThank you!\n\nWarm regards,\n\n{}",
                self.signature
            ),
        }
    }
}
