//! # workout-service
//!
//! Transport-agnostic business logic. Each service orchestrates its stores,
//! the auth primitives and the mail sender, and returns typed results or an
//! [`AppError`](workout_core::AppError).
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod exercise;
pub mod user;
pub mod workout;

pub use auth::{AuthService, AuthSettings, ChangePasswordInput, RegisterInput, ResetPasswordInput};
pub use context::RequestContext;
pub use exercise::ExerciseService;
pub use user::UserService;
pub use workout::{PlanInput, ScheduleInput, WorkoutService};
