//! Per-request session check.

use std::sync::Arc;

use workout_core::error::AppError;

use crate::jwt::SessionSigner;

/// Required prefix of the `Authorization` header value. Case-sensitive.
pub const BEARER_PREFIX: &str = "Bearer ";

/// The authenticated caller behind a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    /// User ID from the session subject.
    pub user_id: i64,
    /// Email at the time the session was issued.
    pub email: String,
}

/// Turns an `Authorization` header value into a caller identity.
///
/// Missing header, bad prefix, empty token, bad signature and expiry all
/// fail with the same authentication error.
#[derive(Debug, Clone)]
pub struct AuthorizationGate {
    signer: Arc<SessionSigner>,
}

impl AuthorizationGate {
    /// Creates a gate validating against the given signer.
    pub fn new(signer: Arc<SessionSigner>) -> Self {
        Self { signer }
    }

    /// Authorizes a request from its raw `Authorization` header, if any.
    pub fn authorize(&self, header: Option<&str>) -> Result<CallerIdentity, AppError> {
        let token = header
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .filter(|token| !token.is_empty())
            .ok_or_else(unauthenticated)?;

        let claims = self.signer.validate(token).map_err(|_| unauthenticated())?;

        Ok(CallerIdentity {
            user_id: claims.user_id(),
            email: claims.email,
        })
    }
}

fn unauthenticated() -> AppError {
    AppError::authentication("Unauthorized")
}
