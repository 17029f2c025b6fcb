//! Workout plans: one exercise with its sets, repetitions and load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::exercise::Exercise;

/// A user's planned exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WorkoutPlan {
    /// Unique plan identifier.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Exercise performed.
    pub exercise_id: i64,
    pub name: String,
    pub description: String,
    pub sets: i64,
    pub repetitions: i64,
    /// Load per repetition.
    pub weight: f64,
    /// Position within the user's routine.
    #[sqlx(rename = "sort_order")]
    pub order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkoutPlan {
    /// Apply every field present in `update`.
    pub fn apply(&mut self, update: &WorkoutPlanUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        if let Some(exercise_id) = update.exercise_id {
            self.exercise_id = exercise_id;
        }
        if let Some(sets) = update.sets {
            self.sets = sets;
        }
        if let Some(repetitions) = update.repetitions {
            self.repetitions = repetitions;
        }
        if let Some(weight) = update.weight {
            self.weight = weight;
        }
        if let Some(order) = update.order {
            self.order = order;
        }
    }

    /// The plan with its exercise expanded.
    pub fn with_exercise(&self, exercise: Exercise) -> WorkoutPlanDetails {
        WorkoutPlanDetails {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            exercise,
            sets: self.sets,
            repetitions: self.repetitions,
            weight: self.weight,
            order: self.order,
        }
    }
}

/// Data required to create a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorkoutPlan {
    pub user_id: i64,
    pub exercise_id: i64,
    pub name: String,
    pub description: String,
    pub sets: i64,
    pub repetitions: i64,
    pub weight: f64,
    pub order: i64,
}

/// The fields a plan update may touch.
///
/// Owner and identifier are not listed and so can never be rewritten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlanUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub exercise_id: Option<i64>,
    pub sets: Option<i64>,
    pub repetitions: Option<i64>,
    pub weight: Option<f64>,
    pub order: Option<i64>,
}

impl WorkoutPlanUpdate {
    /// Whether no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.exercise_id.is_none()
            && self.sets.is_none()
            && self.repetitions.is_none()
            && self.weight.is_none()
            && self.order.is_none()
    }
}

/// A plan as returned to its owner, with the exercise inlined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlanDetails {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub exercise: Exercise,
    pub sets: i64,
    pub repetitions: i64,
    pub weight: f64,
    pub order: i64,
}
