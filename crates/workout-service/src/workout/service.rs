//! Workout plan and schedule service.
//!
//! Every operation is scoped to the caller in [`RequestContext`]. Another
//! user's plan or schedule is reported exactly like a missing one.

use std::sync::Arc;

use tracing::info;

use workout_core::error::AppError;
use workout_core::result::AppResult;
use workout_database::{ExerciseStore, WorkoutStore};
use workout_entity::workout::{
    ScheduleStatus, WorkoutPlan, WorkoutPlanDetails, WorkoutPlanUpdate, WorkoutSchedule,
};

use super::types::{PlanInput, ScheduleInput};
use crate::context::RequestContext;

const PLAN_NOT_OWNED: &str = "Workout plan not found or not authorized";

/// Manages the caller's workout plans and schedules.
#[derive(Debug, Clone)]
pub struct WorkoutService {
    /// Plans and schedules.
    workouts: Arc<dyn WorkoutStore>,
    /// Catalog the plans reference.
    exercises: Arc<dyn ExerciseStore>,
}

impl WorkoutService {
    /// Creates a new workout service.
    pub fn new(workouts: Arc<dyn WorkoutStore>, exercises: Arc<dyn ExerciseStore>) -> Self {
        Self {
            workouts,
            exercises,
        }
    }

    /// The caller's plans. Having none is `NotFound`.
    pub async fn list_plans(&self, ctx: &RequestContext) -> AppResult<Vec<WorkoutPlan>> {
        let plans = self.workouts.list_plans(ctx.user_id).await?;
        if plans.is_empty() {
            return Err(AppError::not_found("No workouts found"));
        }
        Ok(plans)
    }

    /// One of the caller's plans with its exercise inlined.
    pub async fn get_plan(&self, ctx: &RequestContext, id: i64) -> AppResult<WorkoutPlanDetails> {
        let plan = self
            .workouts
            .find_plan(ctx.user_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Workout plan not found"))?;

        let exercise = self
            .exercises
            .find_exercise(plan.exercise_id)
            .await?
            .ok_or_else(|| AppError::not_found("Exercise not found"))?;

        Ok(plan.with_exercise(exercise))
    }

    /// Creates a plan owned by the caller.
    pub async fn create_plan(
        &self,
        ctx: &RequestContext,
        input: PlanInput,
    ) -> AppResult<WorkoutPlan> {
        if input.name.trim().is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        self.require_exercise(input.exercise_id).await?;

        let plan = self.workouts.create_plan(&input.owned_by(ctx.user_id)).await?;
        info!(user_id = ctx.user_id, plan_id = plan.id, "Workout plan created");
        Ok(plan)
    }

    /// Applies the fields present in `update` to one of the caller's plans.
    pub async fn update_plan(
        &self,
        ctx: &RequestContext,
        id: i64,
        update: WorkoutPlanUpdate,
    ) -> AppResult<WorkoutPlan> {
        if update.is_empty() {
            return Err(AppError::validation("No valid fields to update"));
        }
        if update.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(AppError::validation("Name is required"));
        }
        if let Some(exercise_id) = update.exercise_id {
            self.require_exercise(exercise_id).await?;
        }

        let plan = self
            .workouts
            .update_plan(ctx.user_id, id, &update)
            .await?
            .ok_or_else(|| AppError::not_found(PLAN_NOT_OWNED))?;

        info!(user_id = ctx.user_id, plan_id = plan.id, "Workout plan updated");
        Ok(plan)
    }

    /// Deletes one of the caller's plans and its schedule entries.
    pub async fn delete_plan(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        if !self.workouts.delete_plan(ctx.user_id, id).await? {
            return Err(AppError::not_found(PLAN_NOT_OWNED));
        }
        info!(user_id = ctx.user_id, plan_id = id, "Workout plan deleted");
        Ok(())
    }

    /// The caller's schedule entries. Having none is `NotFound`.
    pub async fn list_schedules(&self, ctx: &RequestContext) -> AppResult<Vec<WorkoutSchedule>> {
        let schedules = self.workouts.list_schedules(ctx.user_id).await?;
        if schedules.is_empty() {
            return Err(AppError::not_found("No workout schedules found"));
        }
        Ok(schedules)
    }

    /// One of the caller's schedule entries.
    pub async fn get_schedule(&self, ctx: &RequestContext, id: i64) -> AppResult<WorkoutSchedule> {
        self.workouts
            .find_schedule(ctx.user_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Workout schedule not found"))
    }

    /// Books one of the caller's plans for a date.
    pub async fn create_schedule(
        &self,
        ctx: &RequestContext,
        input: ScheduleInput,
    ) -> AppResult<WorkoutSchedule> {
        let status = input.status.unwrap_or_default();
        match (status, input.completed_date) {
            (ScheduleStatus::Completed, None) => {
                return Err(AppError::validation(
                    "Completed date is required for a completed workout",
                ));
            }
            (_, Some(done)) if done < input.scheduled_date => {
                return Err(AppError::validation(
                    "Completed date cannot precede scheduled date",
                ));
            }
            _ => {}
        }

        if self
            .workouts
            .find_plan(ctx.user_id, input.workout_plan_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found("Workout plan not found"));
        }

        let schedule = self
            .workouts
            .create_schedule(&input.owned_by(ctx.user_id))
            .await?;
        info!(
            user_id = ctx.user_id,
            schedule_id = schedule.id,
            status = %schedule.status,
            "Workout scheduled"
        );
        Ok(schedule)
    }

    async fn require_exercise(&self, id: i64) -> AppResult<()> {
        match self.exercises.find_exercise(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found("Exercise not found")),
        }
    }
}
