//! PostgreSQL user repository.

use async_trait::async_trait;
use sqlx::PgPool;

use workout_core::error::{AppError, ErrorKind};
use workout_core::result::AppResult;
use workout_entity::user::{IssuedToken, NewUser, User};

use crate::store::UserStore;

/// Name of the unique constraint guarding `users.email`.
const EMAIL_UNIQUE_CONSTRAINT: &str = "users_email_key";

/// Repository for user identity records.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, sql: &str, bind: &str, what: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(sql)
            .bind(bind)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                let message = format!("Failed to find user by {what}");
                AppError::with_source(ErrorKind::Database, message, e)
            })
    }
}

/// Map a write failure, surfacing the email constraint as a conflict.
fn map_write_error(e: sqlx::Error, action: &str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err)
            if db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT) =>
        {
            AppError::conflict("Email already exists")
        }
        _ => AppError::with_source(ErrorKind::Database, format!("Failed to {action}"), e),
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.find_one("SELECT * FROM users WHERE email = $1", email, "email")
            .await
    }

    async fn find_by_verify_token(&self, token: &str) -> AppResult<Option<User>> {
        self.find_one(
            "SELECT * FROM users WHERE verify_token = $1",
            token,
            "verification token",
        )
        .await
    }

    async fn find_by_reset_token(&self, token: &str) -> AppResult<Option<User>> {
        self.find_one(
            "SELECT * FROM users WHERE reset_token = $1",
            token,
            "reset token",
        )
        .await
    }

    async fn create(&self, data: &NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (first_name, last_name, email, password_hash, is_verified, \
                                verify_token, verify_expires_at) \
             VALUES ($1, $2, $3, $4, FALSE, $5, $6) \
             RETURNING *",
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.verify_token)
        .bind(data.verify_expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "create user"))
    }

    async fn set_verification_token(
        &self,
        id: i64,
        token: &IssuedToken,
    ) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET verify_token = $2, verify_expires_at = $3, updated_at = NOW() \
             WHERE id = $1 AND NOT is_verified RETURNING *",
        )
        .bind(id)
        .bind(&token.value)
        .bind(token.expires_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "store verification token"))
    }

    async fn consume_verification_token(&self, token: &str, now: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET is_verified = TRUE, verify_token = NULL, verify_expires_at = NULL, \
                              updated_at = NOW() \
             WHERE verify_token = $1 AND verify_expires_at > 0 AND verify_expires_at > $2 \
             RETURNING *",
        )
        .bind(token)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "consume verification token"))
    }

    async fn set_reset_token(&self, id: i64, token: &IssuedToken) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET reset_token = $2, reset_expires_at = $3, updated_at = NOW() \
             WHERE id = $1 AND is_verified RETURNING *",
        )
        .bind(id)
        .bind(&token.value)
        .bind(token.expires_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "store reset token"))
    }

    async fn consume_reset_token(
        &self,
        token: &str,
        password_hash: &str,
        now: i64,
    ) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET password_hash = $2, reset_token = NULL, reset_expires_at = NULL, \
                              updated_at = NOW() \
             WHERE reset_token = $1 AND reset_expires_at > 0 AND reset_expires_at > $3 \
             RETURNING *",
        )
        .bind(token)
        .bind(password_hash)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "consume reset token"))
    }

    async fn update_password(
        &self,
        id: i64,
        expected_hash: &str,
        new_hash: &str,
    ) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET password_hash = $3, updated_at = NOW() \
             WHERE id = $1 AND password_hash = $2 RETURNING *",
        )
        .bind(id)
        .bind(expected_hash)
        .bind(new_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "update password"))
    }
}
