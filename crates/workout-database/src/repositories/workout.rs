//! PostgreSQL workout plan and schedule repository.

use async_trait::async_trait;
use sqlx::PgPool;

use workout_core::error::{AppError, ErrorKind};
use workout_core::result::AppResult;
use workout_entity::workout::{
    NewWorkoutPlan, NewWorkoutSchedule, WorkoutPlan, WorkoutPlanUpdate, WorkoutSchedule,
};

use crate::store::WorkoutStore;

/// Foreign key from `workout_plans.exercise_id` to the catalog.
const PLAN_EXERCISE_FKEY: &str = "workout_plans_exercise_id_fkey";

/// Repository for workout plans and schedules.
#[derive(Debug, Clone)]
pub struct WorkoutRepository {
    pool: PgPool,
}

impl WorkoutRepository {
    /// Create a new workout repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_error(action: &str) -> impl FnOnce(sqlx::Error) -> AppError + '_ {
    move |e| match e {
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(PLAN_EXERCISE_FKEY) => {
            AppError::not_found("Exercise not found")
        }
        _ => AppError::with_source(ErrorKind::Database, format!("Failed to {action}"), e),
    }
}

#[async_trait]
impl WorkoutStore for WorkoutRepository {
    async fn list_plans(&self, user_id: i64) -> AppResult<Vec<WorkoutPlan>> {
        sqlx::query_as::<_, WorkoutPlan>(
            "SELECT * FROM workout_plans WHERE user_id = $1 ORDER BY sort_order, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list workout plans"))
    }

    async fn find_plan(&self, user_id: i64, id: i64) -> AppResult<Option<WorkoutPlan>> {
        sqlx::query_as::<_, WorkoutPlan>(
            "SELECT * FROM workout_plans WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("find workout plan"))
    }

    async fn create_plan(&self, plan: &NewWorkoutPlan) -> AppResult<WorkoutPlan> {
        sqlx::query_as::<_, WorkoutPlan>(
            "INSERT INTO workout_plans (user_id, exercise_id, name, description, sets, \
                                        repetitions, weight, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(plan.user_id)
        .bind(plan.exercise_id)
        .bind(&plan.name)
        .bind(&plan.description)
        .bind(plan.sets)
        .bind(plan.repetitions)
        .bind(plan.weight)
        .bind(plan.order)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("create workout plan"))
    }

    async fn update_plan(
        &self,
        user_id: i64,
        id: i64,
        update: &WorkoutPlanUpdate,
    ) -> AppResult<Option<WorkoutPlan>> {
        // Absent fields bind NULL and keep the stored value.
        sqlx::query_as::<_, WorkoutPlan>(
            "UPDATE workout_plans SET \
                 name = COALESCE($3, name), \
                 description = COALESCE($4, description), \
                 exercise_id = COALESCE($5, exercise_id), \
                 sets = COALESCE($6, sets), \
                 repetitions = COALESCE($7, repetitions), \
                 weight = COALESCE($8, weight), \
                 sort_order = COALESCE($9, sort_order), \
                 updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .bind(&update.name)
        .bind(&update.description)
        .bind(update.exercise_id)
        .bind(update.sets)
        .bind(update.repetitions)
        .bind(update.weight)
        .bind(update.order)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("update workout plan"))
    }

    async fn delete_plan(&self, user_id: i64, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM workout_plans WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(db_error("delete workout plan"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_schedules(&self, user_id: i64) -> AppResult<Vec<WorkoutSchedule>> {
        sqlx::query_as::<_, WorkoutSchedule>(
            "SELECT * FROM workout_schedules WHERE user_id = $1 ORDER BY scheduled_date, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list workout schedules"))
    }

    async fn find_schedule(&self, user_id: i64, id: i64) -> AppResult<Option<WorkoutSchedule>> {
        sqlx::query_as::<_, WorkoutSchedule>(
            "SELECT * FROM workout_schedules WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("find workout schedule"))
    }

    async fn create_schedule(&self, schedule: &NewWorkoutSchedule) -> AppResult<WorkoutSchedule> {
        sqlx::query_as::<_, WorkoutSchedule>(
            "INSERT INTO workout_schedules (user_id, workout_plan_id, scheduled_date, status, \
                                            completed_date) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(schedule.user_id)
        .bind(schedule.workout_plan_id)
        .bind(schedule.scheduled_date)
        .bind(schedule.status)
        .bind(schedule.completed_date)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("create workout schedule"))
    }
}
