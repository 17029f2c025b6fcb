//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Authentication and credential configuration.
///
/// Neither the signing key nor the token TTL has a default: a missing value
/// must stop the process at startup rather than weaken every credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Symmetric key for session token signing (HMAC-SHA256).
    #[serde(default)]
    pub jwt_secret: String,
    /// Lifetime of verification and reset tokens, in hours.
    #[serde(default)]
    pub token_ttl_hours: Option<u64>,
    /// Collapse every login failure into one indistinguishable outcome.
    #[serde(default)]
    pub strict_enumeration_resistance: bool,
}

impl AuthConfig {
    /// Validates the section, failing loudly on anything that would
    /// produce unsigned-equivalent sessions or always-expired tokens.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration(
                "auth.jwt_secret (JWT_SECRET) is required",
            ));
        }
        match self.token_ttl_hours {
            None => Err(AppError::configuration(
                "auth.token_ttl_hours (JWT_EXPIRATION_TIME) is required",
            )),
            Some(0) => Err(AppError::configuration(
                "auth.token_ttl_hours (JWT_EXPIRATION_TIME) must be greater than zero",
            )),
            Some(_) => Ok(()),
        }
    }

    /// Returns the validated verification/reset token lifetime.
    pub fn token_ttl(&self) -> Result<chrono::Duration, AppError> {
        match self.token_ttl_hours {
            Some(hours) if hours > 0 => i64::try_from(hours)
                .ok()
                .and_then(chrono::Duration::try_hours)
                .ok_or_else(|| AppError::configuration("auth.token_ttl_hours is out of range")),
            _ => Err(AppError::configuration(
                "auth.token_ttl_hours (JWT_EXPIRATION_TIME) must be greater than zero",
            )),
        }
    }
}
