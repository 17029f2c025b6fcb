//! User self-service operations.

use std::sync::Arc;

use workout_core::error::AppError;
use workout_database::UserStore;
use workout_entity::user::UserProfile;

use crate::context::RequestContext;

/// Handles user self-service operations.
#[derive(Debug, Clone)]
pub struct UserService {
    /// Credential store.
    store: Arc<dyn UserStore>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Gets the current user's public profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<UserProfile, AppError> {
        self.store
            .find_by_id(ctx.user_id)
            .await?
            .map(|user| user.profile())
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
