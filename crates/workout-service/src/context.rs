//! Request context carrying the authenticated caller.

use serde::{Deserialize, Serialize};

use workout_auth::CallerIdentity;

/// Context for the current authenticated request.
///
/// Built once the authorization gate has accepted the session credential
/// and passed into service methods so that every operation knows *who* is
/// acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: i64,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}

impl From<CallerIdentity> for RequestContext {
    fn from(caller: CallerIdentity) -> Self {
        Self::new(caller.user_id)
    }
}
