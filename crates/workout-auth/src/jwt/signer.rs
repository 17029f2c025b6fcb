//! HS256 session token issuance and validation.

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use workout_core::config::AuthConfig;
use workout_core::error::AppError;
use workout_core::traits::Clock;

use super::claims::{Claims, ISSUER};

/// Fixed lifetime of a session token.
pub const SESSION_TTL_SECONDS: i64 = 3600;

/// Issues and validates signed, stateless session credentials.
///
/// The key is loaded once at startup and never rotated while running.
#[derive(Clone)]
pub struct SessionSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for SessionSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionSigner")
            .field("validation", &self.validation)
            .field("clock", &self.clock)
            .finish()
    }
}

impl SessionSigner {
    /// Creates a signer from a symmetric secret.
    pub fn new(secret: &[u8], clock: Arc<dyn Clock>) -> Result<Self, AppError> {
        if secret.is_empty() {
            return Err(AppError::configuration("Session signing key must not be empty"));
        }

        // Only HS256 is accepted; a token advertising any other algorithm is
        // rejected before its signature is looked at.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss"]);
        // Expiry is checked against the injected clock instead.
        validation.validate_exp = false;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            clock,
        })
    }

    /// Creates a signer from the auth configuration section.
    pub fn from_config(config: &AuthConfig, clock: Arc<dyn Clock>) -> Result<Self, AppError> {
        Self::new(config.jwt_secret.as_bytes(), clock)
    }

    /// Issues a session token for the given user.
    pub fn issue(&self, user_id: i64, email: &str) -> Result<String, AppError> {
        let iat = self.clock.timestamp();
        let claims = Claims {
            iss: ISSUER.to_string(),
            sub: user_id,
            email: email.to_string(),
            iat,
            exp: iat + SESSION_TTL_SECONDS,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign session token: {e}")))
    }

    /// Validates a session token and returns its claims.
    ///
    /// Every failure is the same authentication error; the cause is only
    /// logged.
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "Session token rejected");
                AppError::authentication("Invalid or expired session token")
            })?
            .claims;

        if claims.is_expired_at(self.clock.timestamp()) {
            tracing::debug!(user_id = claims.sub, "Session token expired");
            return Err(AppError::authentication("Invalid or expired session token"));
        }

        Ok(claims)
    }
}
