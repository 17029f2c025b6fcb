//! Inputs to the workout service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use workout_entity::workout::{NewWorkoutPlan, NewWorkoutSchedule, ScheduleStatus};

/// A plan to create for the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanInput {
    pub exercise_id: i64,
    pub name: String,
    pub description: String,
    pub sets: i64,
    pub repetitions: i64,
    pub weight: f64,
    pub order: i64,
}

impl PlanInput {
    /// The row to insert for `user_id`.
    pub fn owned_by(self, user_id: i64) -> NewWorkoutPlan {
        NewWorkoutPlan {
            user_id,
            exercise_id: self.exercise_id,
            name: self.name,
            description: self.description,
            sets: self.sets,
            repetitions: self.repetitions,
            weight: self.weight,
            order: self.order,
        }
    }
}

/// A schedule entry to create for the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub workout_plan_id: i64,
    pub scheduled_date: DateTime<Utc>,
    /// Defaults to scheduled.
    pub status: Option<ScheduleStatus>,
    pub completed_date: Option<DateTime<Utc>>,
}

impl ScheduleInput {
    /// The row to insert for `user_id`.
    pub fn owned_by(self, user_id: i64) -> NewWorkoutSchedule {
        NewWorkoutSchedule {
            user_id,
            workout_plan_id: self.workout_plan_id,
            scheduled_date: self.scheduled_date,
            status: self.status.unwrap_or_default(),
            completed_date: self.completed_date,
        }
    }
}
