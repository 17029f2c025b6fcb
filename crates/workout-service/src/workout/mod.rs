//! Workout plans and schedules owned by the caller.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::WorkoutService;
pub use types::{PlanInput, ScheduleInput};
