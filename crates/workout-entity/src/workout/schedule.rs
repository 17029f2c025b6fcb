//! Dated occurrences of a workout plan.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Progress of a scheduled workout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "schedule_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    /// Not yet done.
    #[default]
    Scheduled,
    /// Done.
    Completed,
    /// The date passed without it being done.
    Missed,
}

impl ScheduleStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Missed => "missed",
        }
    }
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A workout plan booked for a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WorkoutSchedule {
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Plan to perform, owned by the same user.
    pub workout_plan_id: i64,
    pub scheduled_date: DateTime<Utc>,
    pub status: ScheduleStatus,
    /// Set once the workout is done.
    pub completed_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a schedule entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorkoutSchedule {
    pub user_id: i64,
    pub workout_plan_id: i64,
    pub scheduled_date: DateTime<Utc>,
    pub status: ScheduleStatus,
    pub completed_date: Option<DateTime<Utc>>,
}
