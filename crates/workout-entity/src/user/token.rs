//! Single-use verification and reset tokens.

use serde::{Deserialize, Serialize};

/// A freshly minted token and its absolute expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    /// Opaque random value sent to the user.
    pub value: String,
    /// Expiry, seconds since epoch.
    pub expires_at: i64,
}

/// A token is live while `now` is strictly before a positive expiry.
pub fn is_live(expires_at: Option<i64>, now: i64) -> bool {
    matches!(expires_at, Some(exp) if exp > 0 && now < exp)
}
