//! User identity record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::token::{IssuedToken, is_live};

/// A registered account.
///
/// Verification and reset tokens live inline on the record. Each pair
/// (token, expiry) is written and cleared together; a token whose expiry is
/// absent or non-positive is never accepted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address, globally unique.
    pub email: String,
    /// Argon2id PHC string.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Whether the email address has been confirmed.
    pub is_verified: bool,
    /// Outstanding email verification token.
    #[serde(skip_serializing)]
    pub verify_token: Option<String>,
    /// Verification token expiry, seconds since epoch.
    #[serde(skip_serializing)]
    pub verify_expires_at: Option<i64>,
    /// Outstanding password reset token.
    #[serde(skip_serializing)]
    pub reset_token: Option<String>,
    /// Reset token expiry, seconds since epoch.
    #[serde(skip_serializing)]
    pub reset_expires_at: Option<i64>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Replace any outstanding verification token.
    pub fn set_verification_token(&mut self, token: &IssuedToken) {
        self.verify_token = Some(token.value.clone());
        self.verify_expires_at = Some(token.expires_at);
    }

    /// Mark the email as confirmed and consume the verification token.
    pub fn mark_verified(&mut self) {
        self.is_verified = true;
        self.verify_token = None;
        self.verify_expires_at = None;
    }

    /// Replace any outstanding reset token.
    pub fn set_reset_token(&mut self, token: &IssuedToken) {
        self.reset_token = Some(token.value.clone());
        self.reset_expires_at = Some(token.expires_at);
    }

    /// Install a new password hash and consume the reset token.
    pub fn complete_reset(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.reset_token = None;
        self.reset_expires_at = None;
    }

    /// Whether the verification token is still usable at `now` (epoch seconds).
    pub fn verification_token_live(&self, now: i64) -> bool {
        self.verify_token.is_some() && is_live(self.verify_expires_at, now)
    }

    /// Whether the reset token is still usable at `now` (epoch seconds).
    pub fn reset_token_live(&self, now: i64) -> bool {
        self.reset_token.is_some() && is_live(self.reset_expires_at, now)
    }

    /// The caller-facing view of this record.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            is_verified: self.is_verified,
        }
    }
}

/// Data required to create a new user. Always created unverified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Initial verification token.
    pub verify_token: String,
    /// Initial verification token expiry.
    pub verify_expires_at: i64,
}

/// Public profile fields of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Whether the email address has been confirmed.
    pub is_verified: bool,
}
