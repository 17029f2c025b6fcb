//! Store adapters the services read and write through.

use async_trait::async_trait;

use workout_core::result::AppResult;
use workout_entity::exercise::{Exercise, ExerciseCategory};
use workout_entity::user::{IssuedToken, NewUser, User};
use workout_entity::workout::{
    NewWorkoutPlan, NewWorkoutSchedule, WorkoutPlan, WorkoutPlanUpdate, WorkoutSchedule,
};

/// The operations the auth core performs against the user record collection.
///
/// Lookups return `Ok(None)` when nothing matches. `create` must enforce
/// email uniqueness itself and report a violation as `Conflict`; callers'
/// pre-checks are only a fast path.
///
/// Writes are column-targeted and conditional. Each one checks its
/// precondition and applies its change in a single step, returning `Ok(None)`
/// when the precondition no longer holds. Two requests racing on the same
/// token therefore see exactly one winner, and a write to one token pair
/// never overwrites the other columns of the record.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Find a user by exact email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find the user holding the given verification token.
    async fn find_by_verify_token(&self, token: &str) -> AppResult<Option<User>>;

    /// Find the user holding the given reset token.
    async fn find_by_reset_token(&self, token: &str) -> AppResult<Option<User>>;

    /// Insert a new, unverified user.
    async fn create(&self, user: &NewUser) -> AppResult<User>;

    /// Replace the verification token of a user that is still unverified.
    async fn set_verification_token(&self, id: i64, token: &IssuedToken)
    -> AppResult<Option<User>>;

    /// Mark verified the user whose verification token matches and is live at
    /// `now`, clearing the token pair.
    async fn consume_verification_token(&self, token: &str, now: i64) -> AppResult<Option<User>>;

    /// Replace the reset token of a verified user.
    async fn set_reset_token(&self, id: i64, token: &IssuedToken) -> AppResult<Option<User>>;

    /// Install `password_hash` on the user whose reset token matches and is
    /// live at `now`, clearing the token pair.
    async fn consume_reset_token(
        &self,
        token: &str,
        password_hash: &str,
        now: i64,
    ) -> AppResult<Option<User>>;

    /// Swap the password hash, provided it still equals `expected_hash`.
    async fn update_password(
        &self,
        id: i64,
        expected_hash: &str,
        new_hash: &str,
    ) -> AppResult<Option<User>>;
}

/// Read access to the exercise catalog.
#[async_trait]
pub trait ExerciseStore: Send + Sync + std::fmt::Debug + 'static {
    /// Every exercise, by id.
    async fn list_exercises(&self) -> AppResult<Vec<Exercise>>;

    /// Every category, by id.
    async fn list_categories(&self) -> AppResult<Vec<ExerciseCategory>>;

    /// Find an exercise by primary key.
    async fn find_exercise(&self, id: i64) -> AppResult<Option<Exercise>>;
}

/// Workout plans and schedules, always scoped to their owner.
///
/// Every lookup and write takes the owner's id; a row owned by someone else
/// behaves exactly like a missing one.
#[async_trait]
pub trait WorkoutStore: Send + Sync + std::fmt::Debug + 'static {
    /// The owner's plans, by routine order then id.
    async fn list_plans(&self, user_id: i64) -> AppResult<Vec<WorkoutPlan>>;

    /// One of the owner's plans.
    async fn find_plan(&self, user_id: i64, id: i64) -> AppResult<Option<WorkoutPlan>>;

    /// Insert a plan. A store that tracks the catalog rejects an unknown
    /// exercise as `NotFound`.
    async fn create_plan(&self, plan: &NewWorkoutPlan) -> AppResult<WorkoutPlan>;

    /// Apply the present fields of `update` to one of the owner's plans.
    async fn update_plan(
        &self,
        user_id: i64,
        id: i64,
        update: &WorkoutPlanUpdate,
    ) -> AppResult<Option<WorkoutPlan>>;

    /// Delete one of the owner's plans with its schedules. False when no
    /// such plan exists.
    async fn delete_plan(&self, user_id: i64, id: i64) -> AppResult<bool>;

    /// The owner's schedule entries, by date then id.
    async fn list_schedules(&self, user_id: i64) -> AppResult<Vec<WorkoutSchedule>>;

    /// One of the owner's schedule entries.
    async fn find_schedule(&self, user_id: i64, id: i64) -> AppResult<Option<WorkoutSchedule>>;

    /// Insert a schedule entry.
    async fn create_schedule(&self, schedule: &NewWorkoutSchedule) -> AppResult<WorkoutSchedule>;
}
