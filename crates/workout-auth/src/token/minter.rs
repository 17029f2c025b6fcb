//! Random single-use tokens with an absolute expiry.

use std::sync::Arc;

use chrono::Duration;
use rand::RngCore;
use rand::rngs::OsRng;

use workout_core::config::AuthConfig;
use workout_core::error::AppError;
use workout_core::traits::Clock;
use workout_entity::user::IssuedToken;

/// Bytes of entropy per token. Hex encoding doubles the length.
pub const TOKEN_BYTES: usize = 16;

/// Mints verification and reset tokens.
#[derive(Debug, Clone)]
pub struct TokenMinter {
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenMinter {
    /// Creates a minter issuing tokens valid for `ttl`.
    ///
    /// A non-positive TTL would make every token expired on arrival, so it is
    /// refused here rather than discovered by users.
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Result<Self, AppError> {
        if ttl <= Duration::zero() {
            return Err(AppError::configuration(
                "Token TTL must be greater than zero",
            ));
        }
        Ok(Self { ttl, clock })
    }

    /// Creates a minter from the auth configuration section.
    pub fn from_config(config: &AuthConfig, clock: Arc<dyn Clock>) -> Result<Self, AppError> {
        Self::new(config.token_ttl()?, clock)
    }

    /// Token lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Produces a fresh token from the OS CSPRNG.
    pub fn mint(&self) -> IssuedToken {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);

        IssuedToken {
            value: hex::encode(bytes),
            expires_at: (self.clock.now() + self.ttl).timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use workout_core::error::ErrorKind;
    use workout_core::traits::ManualClock;

    fn clock() -> Arc<dyn Clock> {
        Arc::new(ManualClock::at(
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        ))
    }

    #[test]
    fn test_zero_ttl_is_rejected() {
        let err = TokenMinter::new(Duration::zero(), clock()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert!(TokenMinter::new(Duration::seconds(-5), clock()).is_err());
    }

    #[test]
    fn test_token_shape_and_expiry() {
        let minter = TokenMinter::new(Duration::hours(2), clock()).unwrap();
        let token = minter.mint();
        assert_eq!(token.value.len(), TOKEN_BYTES * 2);
        assert!(token.value.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(token.expires_at, 1_700_000_000 + 7_200);
    }

    #[test]
    fn test_every_call_is_fresh() {
        let minter = TokenMinter::new(Duration::hours(1), clock()).unwrap();
        assert_ne!(minter.mint().value, minter.mint().value);
    }

    #[test]
    fn test_from_config_without_ttl_fails() {
        let config = AuthConfig {
            jwt_secret: "secret".into(),
            token_ttl_hours: None,
            strict_enumeration_resistance: false,
        };
        assert!(TokenMinter::from_config(&config, clock()).is_err());
    }
}
