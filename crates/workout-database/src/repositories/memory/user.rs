//! In-memory credential store.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use workout_core::error::AppError;
use workout_core::result::AppResult;
use workout_entity::user::{IssuedToken, NewUser, User};

use crate::store::UserStore;

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<i64, User>,
    next_id: i64,
}

/// A [`UserStore`] held in process memory.
///
/// Enforces the same email uniqueness the database constraint does, so the
/// auth service behaves identically against either backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    /// Whether the store holds no users.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn find_where(&self, pred: impl Fn(&User) -> bool) -> Option<User> {
        self.inner
            .read()
            .await
            .users
            .values()
            .find(|u| pred(u))
            .cloned()
    }

    /// Apply `change` to the first user matching `pred`, under one write lock.
    async fn update_where(
        &self,
        pred: impl Fn(&User) -> bool,
        change: impl FnOnce(&mut User),
    ) -> Option<User> {
        let mut inner = self.inner.write().await;
        let user = inner.users.values_mut().find(|u| pred(&**u))?;
        change(user);
        user.updated_at = Utc::now();
        Some(user.clone())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.find_where(|u| u.email == email).await)
    }

    async fn find_by_verify_token(&self, token: &str) -> AppResult<Option<User>> {
        Ok(self
            .find_where(|u| u.verify_token.as_deref() == Some(token))
            .await)
    }

    async fn find_by_reset_token(&self, token: &str) -> AppResult<Option<User>> {
        Ok(self
            .find_where(|u| u.reset_token.as_deref() == Some(token))
            .await)
    }

    async fn create(&self, data: &NewUser) -> AppResult<User> {
        let mut inner = self.inner.write().await;
        if inner.users.values().any(|u| u.email == data.email) {
            return Err(AppError::conflict("Email already exists"));
        }

        inner.next_id += 1;
        let now = Utc::now();
        let user = User {
            id: inner.next_id,
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            is_verified: false,
            verify_token: Some(data.verify_token.clone()),
            verify_expires_at: Some(data.verify_expires_at),
            reset_token: None,
            reset_expires_at: None,
            created_at: now,
            updated_at: now,
        };
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn set_verification_token(
        &self,
        id: i64,
        token: &IssuedToken,
    ) -> AppResult<Option<User>> {
        Ok(self
            .update_where(
                |u| u.id == id && !u.is_verified,
                |u| u.set_verification_token(token),
            )
            .await)
    }

    async fn consume_verification_token(&self, token: &str, now: i64) -> AppResult<Option<User>> {
        Ok(self
            .update_where(
                |u| u.verify_token.as_deref() == Some(token) && u.verification_token_live(now),
                User::mark_verified,
            )
            .await)
    }

    async fn set_reset_token(&self, id: i64, token: &IssuedToken) -> AppResult<Option<User>> {
        Ok(self
            .update_where(|u| u.id == id && u.is_verified, |u| u.set_reset_token(token))
            .await)
    }

    async fn consume_reset_token(
        &self,
        token: &str,
        password_hash: &str,
        now: i64,
    ) -> AppResult<Option<User>> {
        Ok(self
            .update_where(
                |u| u.reset_token.as_deref() == Some(token) && u.reset_token_live(now),
                |u| u.complete_reset(password_hash.to_string()),
            )
            .await)
    }

    async fn update_password(
        &self,
        id: i64,
        expected_hash: &str,
        new_hash: &str,
    ) -> AppResult<Option<User>> {
        Ok(self
            .update_where(
                |u| u.id == id && u.password_hash == expected_hash,
                |u| u.password_hash = new_hash.to_string(),
            )
            .await)
    }
}
