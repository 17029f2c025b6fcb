//! Auth service: the per-account credential state machine.
//!
//! Every mutating operation follows the same sequence: validate input,
//! load the record to report a precise error, then hand the store a
//! conditional write that rechecks the precondition. A write that finds its
//! precondition gone lost a race and is reported like the stale request it
//! was. Persisting and mailing are not atomic. A failed send leaves the
//! freshly minted token stored and reports an `ExternalService` error; the
//! resend operations recover from that by minting a replacement.

use std::sync::Arc;

use tracing::{info, warn};

use workout_auth::{PasswordHasher, SessionSigner, TokenMinter};
use workout_core::error::{AppError, ErrorKind};
use workout_core::result::AppResult;
use workout_core::traits::{Clock, MailSender, OutgoingMail};
use workout_database::UserStore;
use workout_entity::user::{NewUser, User};

use super::types::{AuthSettings, ChangePasswordInput, RegisterInput, ResetPasswordInput};
use crate::context::RequestContext;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Orchestrates registration, verification, login and password flows.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Credential store.
    store: Arc<dyn UserStore>,
    /// Outbound mail.
    mailer: Arc<dyn MailSender>,
    /// Session credential signer.
    signer: Arc<SessionSigner>,
    /// Verification and reset token minter.
    minter: Arc<TokenMinter>,
    /// Time source for token expiry.
    clock: Arc<dyn Clock>,
    /// Password hasher.
    hasher: PasswordHasher,
    /// Templates, timeouts and login policy.
    settings: AuthSettings,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        store: Arc<dyn UserStore>,
        mailer: Arc<dyn MailSender>,
        signer: Arc<SessionSigner>,
        minter: Arc<TokenMinter>,
        clock: Arc<dyn Clock>,
        settings: AuthSettings,
    ) -> Self {
        Self {
            store,
            mailer,
            signer,
            minter,
            clock,
            hasher: PasswordHasher::new(),
            settings,
        }
    }

    /// Registers an unverified account and mails its verification link.
    ///
    /// Does not log the caller in.
    pub async fn register(&self, input: RegisterInput) -> AppResult<User> {
        if [&input.first_name, &input.last_name, &input.email]
            .iter()
            .any(|field| field.trim().is_empty())
            || input.password.is_empty()
        {
            return Err(AppError::validation("All fields are required"));
        }

        // Fast path only; the store's unique constraint is the real guard.
        if self.store.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::conflict("Email already exists"));
        }

        let password_hash = self.hasher.hash_password(&input.password)?;
        let token = self.minter.mint();

        let user = self
            .store
            .create(&NewUser {
                first_name: input.first_name,
                last_name: input.last_name,
                email: input.email,
                password_hash,
                verify_token: token.value.clone(),
                verify_expires_at: token.expires_at,
            })
            .await?;

        info!(user_id = user.id, email = %user.email, "User registered");

        let mail = self
            .settings
            .templates
            .verification(&user.email, &user.first_name, &token.value);
        self.dispatch(mail, "Failed to send verification email")
            .await?;

        Ok(user)
    }

    /// Mints a fresh verification token and mails it again.
    ///
    /// The previous verification token stops working.
    pub async fn send_verification_email(&self, email: &str) -> AppResult<()> {
        if email.trim().is_empty() {
            return Err(AppError::validation("Email is required"));
        }

        let user = self.find_by_email(email).await?;
        if user.is_verified {
            return Err(AppError::conflict("Email already verified"));
        }

        let token = self.minter.mint();
        let user = self
            .store
            .set_verification_token(user.id, &token)
            .await?
            .ok_or_else(|| AppError::conflict("Email already verified"))?;

        info!(user_id = user.id, "Verification token reissued");

        let mail = self
            .settings
            .templates
            .verification(&user.email, &user.first_name, &token.value);
        self.dispatch(mail, "Failed to send verification email")
            .await
    }

    /// Consumes a verification token and marks the account verified.
    pub async fn verify_email(&self, token: &str) -> AppResult<User> {
        if token.is_empty() {
            return Err(AppError::validation("Token is required"));
        }

        let user = self
            .store
            .find_by_verify_token(token)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid token"))?;

        let now = self.clock.timestamp();
        if !user.verification_token_live(now) {
            warn!(user_id = user.id, "Expired verification token presented");
            return Err(AppError::authentication("Token has expired"));
        }

        let user = self
            .store
            .consume_verification_token(token, now)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid token"))?;

        info!(user_id = user.id, "Email verified");
        Ok(user)
    }

    /// Checks credentials and issues a session token.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<String> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::validation("All fields are required"));
        }

        let strict = self.settings.strict_enumeration_resistance;

        let Some(user) = self.store.find_by_email(email).await? else {
            if strict {
                self.hasher.verify_against_dummy(password);
            }
            warn!(email = %email, "Login rejected: unknown email");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = user.id, "Login rejected: wrong password");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        if !user.is_verified {
            warn!(user_id = user.id, "Login rejected: email not verified");
            let message = if strict {
                INVALID_CREDENTIALS
            } else {
                "Email not verified"
            };
            return Err(AppError::authentication(message));
        }

        let token = self.signer.issue(user.id, &user.email)?;
        info!(user_id = user.id, "User logged in");
        Ok(token)
    }

    /// Mints a reset token for a verified account and mails it.
    pub async fn send_forgot_password_email(&self, email: &str) -> AppResult<()> {
        if email.trim().is_empty() {
            return Err(AppError::validation("Email is required"));
        }

        let user = self.find_by_email(email).await?;
        if !user.is_verified {
            return Err(AppError::validation("Email not verified"));
        }

        let token = self.minter.mint();
        let user = self
            .store
            .set_reset_token(user.id, &token)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(user_id = user.id, "Password reset requested");

        let mail = self
            .settings
            .templates
            .password_reset(&user.email, &user.first_name, &token.value);
        self.dispatch(mail, "Failed to send forgot password email")
            .await
    }

    /// Consumes a reset token and installs the new password.
    pub async fn reset_password(
        &self,
        token: &str,
        input: ResetPasswordInput,
    ) -> AppResult<()> {
        if token.is_empty() {
            return Err(AppError::validation("Token is required"));
        }
        if input.password.is_empty() || input.confirm_password.is_empty() {
            return Err(AppError::validation("All fields are required"));
        }
        if input.password != input.confirm_password {
            return Err(AppError::validation("Passwords do not match"));
        }

        let user = self
            .store
            .find_by_reset_token(token)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid token"))?;

        if !user.reset_token_live(self.clock.timestamp()) {
            warn!(user_id = user.id, "Expired reset token presented");
            return Err(AppError::authentication("Token has expired"));
        }

        let password_hash = self.hasher.hash_password(&input.password)?;

        // Hashing takes a while; recheck liveness at the moment of the write.
        let user = self
            .store
            .consume_reset_token(token, &password_hash, self.clock.timestamp())
            .await?
            .ok_or_else(|| AppError::authentication("Invalid token"))?;

        info!(user_id = user.id, "Password reset");
        Ok(())
    }

    /// Replaces the caller's password after checking the old one.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        input: ChangePasswordInput,
    ) -> AppResult<()> {
        if input.old_password.is_empty()
            || input.new_password.is_empty()
            || input.confirm_password.is_empty()
        {
            return Err(AppError::validation("All fields are required"));
        }
        if input.new_password != input.confirm_password {
            return Err(AppError::validation(
                "New password and confirm password do not match",
            ));
        }

        let user = self
            .store
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if !self
            .hasher
            .verify_password(&input.old_password, &user.password_hash)?
        {
            warn!(
                user_id = user.id,
                "Password change rejected: wrong old password"
            );
            return Err(AppError::authentication("Invalid old password"));
        }

        let new_hash = self.hasher.hash_password(&input.new_password)?;
        self.store
            .update_password(user.id, &user.password_hash, &new_hash)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid old password"))?;

        info!(user_id = user.id, "Password changed");
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<User> {
        self.store
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Sends one message within the configured time bound.
    async fn dispatch(&self, mail: OutgoingMail, failure: &str) -> AppResult<()> {
        let outcome =
            tokio::time::timeout(self.settings.mail_timeout, self.mailer.send(&mail)).await;

        match outcome {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                warn!(recipient = %mail.recipient_email, error = %e, "Mail send failed");
                Err(AppError::with_source(ErrorKind::ExternalService, failure, e))
            }
            Err(_) => {
                warn!(
                    recipient = %mail.recipient_email,
                    timeout_ms = self.settings.mail_timeout.as_millis() as u64,
                    "Mail send timed out"
                );
                Err(AppError::external_service(failure))
            }
        }
    }
}
