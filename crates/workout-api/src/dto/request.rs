//! Request DTOs with validation.
//!
//! Missing fields in the auth bodies deserialize as empty strings so the
//! service layer reports them with its own "All fields are required"
//! message. Workout bodies require their numeric fields outright.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError};

use workout_entity::workout::{ScheduleStatus, WorkoutPlanUpdate};
use workout_service::{
    ChangePasswordInput, PlanInput, RegisterInput, ResetPasswordInput, ScheduleInput,
};

/// Registration request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    /// Given name.
    #[validate(length(max = 100, message = "First name is too long"))]
    pub first_name: String,
    /// Family name.
    #[validate(length(max = 100, message = "Last name is too long"))]
    pub last_name: String,
    /// Email address.
    #[validate(
        length(max = 254, message = "Email is too long"),
        custom(function = "email_if_present")
    )]
    pub email: String,
    /// Password.
    #[validate(length(max = 1024, message = "Password is too long"))]
    pub password: String,
}

impl From<RegisterRequest> for RegisterInput {
    fn from(req: RegisterRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
}

/// Password reset request body; the token travels in the query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ResetPasswordRequest {
    /// New password.
    #[validate(length(max = 1024, message = "Password is too long"))]
    pub password: String,
    /// Repeat of the new password.
    pub confirm_password: String,
}

impl From<ResetPasswordRequest> for ResetPasswordInput {
    fn from(req: ResetPasswordRequest) -> Self {
        Self {
            password: req.password,
            confirm_password: req.confirm_password,
        }
    }
}

/// Password change request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ChangePasswordRequest {
    /// Current password.
    pub old_password: String,
    /// New password.
    #[validate(length(max = 1024, message = "Password is too long"))]
    pub new_password: String,
    /// Repeat of the new password.
    pub confirm_password: String,
}

impl From<ChangePasswordRequest> for ChangePasswordInput {
    fn from(req: ChangePasswordRequest) -> Self {
        Self {
            old_password: req.old_password,
            new_password: req.new_password,
            confirm_password: req.confirm_password,
        }
    }
}

/// Workout plan creation body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateWorkoutRequest {
    /// Catalog exercise to perform.
    pub exercise_id: i64,
    #[validate(length(max = 100, message = "Name is too long"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 1000, message = "Description is too long"))]
    pub description: String,
    #[validate(range(min = 1, max = 100, message = "Sets must be between 1 and 100"))]
    pub sets: i64,
    #[validate(range(min = 1, max = 1000, message = "Repetitions must be between 1 and 1000"))]
    pub repetitions: i64,
    #[validate(range(min = 0.0, max = 10000.0, message = "Weight must be between 0 and 10000"))]
    pub weight: f64,
    /// Position within the routine.
    #[serde(default)]
    #[validate(range(min = 0, message = "Order cannot be negative"))]
    pub order: i64,
}

impl From<CreateWorkoutRequest> for PlanInput {
    fn from(req: CreateWorkoutRequest) -> Self {
        Self {
            exercise_id: req.exercise_id,
            name: req.name,
            description: req.description,
            sets: req.sets,
            repetitions: req.repetitions,
            weight: req.weight,
            order: req.order,
        }
    }
}

/// Partial workout plan update.
///
/// Only the listed fields are read; anything else in the body, owner and
/// id included, is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateWorkoutRequest {
    #[validate(length(max = 100, message = "Name is too long"))]
    pub name: Option<String>,
    #[validate(length(max = 1000, message = "Description is too long"))]
    pub description: Option<String>,
    pub exercise_id: Option<i64>,
    #[validate(range(min = 1, max = 100, message = "Sets must be between 1 and 100"))]
    pub sets: Option<i64>,
    #[validate(range(min = 1, max = 1000, message = "Repetitions must be between 1 and 1000"))]
    pub repetitions: Option<i64>,
    #[validate(range(min = 0.0, max = 10000.0, message = "Weight must be between 0 and 10000"))]
    pub weight: Option<f64>,
    #[validate(range(min = 0, message = "Order cannot be negative"))]
    pub order: Option<i64>,
}

impl From<UpdateWorkoutRequest> for WorkoutPlanUpdate {
    fn from(req: UpdateWorkoutRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            exercise_id: req.exercise_id,
            sets: req.sets,
            repetitions: req.repetitions,
            weight: req.weight,
            order: req.order,
        }
    }
}

/// Schedule creation body. Dates are RFC 3339.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateScheduleRequest {
    pub workout_plan_id: i64,
    pub scheduled_date: DateTime<Utc>,
    pub status: Option<ScheduleStatus>,
    pub completed_date: Option<DateTime<Utc>>,
}

impl From<CreateScheduleRequest> for ScheduleInput {
    fn from(req: CreateScheduleRequest) -> Self {
        Self {
            workout_plan_id: req.workout_plan_id,
            scheduled_date: req.scheduled_date,
            status: req.status,
            completed_date: req.completed_date,
        }
    }
}

/// `?email=` query parameter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

/// `?token=` query parameter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenQuery {
    pub token: Option<String>,
}

/// Empty is left to the service, which reports it as a missing field.
fn email_if_present(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || email.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message("Invalid email address".into()))
    }
}
