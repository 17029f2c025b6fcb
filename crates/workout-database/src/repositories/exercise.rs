//! PostgreSQL exercise catalog repository.

use async_trait::async_trait;
use sqlx::PgPool;

use workout_core::error::{AppError, ErrorKind};
use workout_core::result::AppResult;
use workout_entity::exercise::{Exercise, ExerciseCategory};

use crate::store::ExerciseStore;

/// Repository for the seeded exercise catalog.
#[derive(Debug, Clone)]
pub struct ExerciseRepository {
    pool: PgPool,
}

impl ExerciseRepository {
    /// Create a new exercise repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExerciseStore for ExerciseRepository {
    async fn list_exercises(&self) -> AppResult<Vec<Exercise>> {
        sqlx::query_as::<_, Exercise>("SELECT * FROM exercises ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list exercises", e))
    }

    async fn list_categories(&self) -> AppResult<Vec<ExerciseCategory>> {
        sqlx::query_as::<_, ExerciseCategory>("SELECT * FROM exercise_categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list exercise categories", e)
            })
    }

    async fn find_exercise(&self, id: i64) -> AppResult<Option<Exercise>> {
        sqlx::query_as::<_, Exercise>("SELECT * FROM exercises WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find exercise", e))
    }
}
