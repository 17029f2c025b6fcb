//! Workout plan and schedule entities.

pub mod plan;
pub mod schedule;

pub use plan::{NewWorkoutPlan, WorkoutPlan, WorkoutPlanDetails, WorkoutPlanUpdate};
pub use schedule::{NewWorkoutSchedule, ScheduleStatus, WorkoutSchedule};
