//! Catalog of exercises a workout plan can reference.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A grouping such as strength or cardio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ExerciseCategory {
    /// Unique category identifier.
    pub id: i64,
    /// Display name, unique.
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Exercise {
    /// Unique exercise identifier.
    pub id: i64,
    /// Display name, unique.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Owning [`ExerciseCategory`].
    #[serde(rename = "category")]
    pub category_id: i64,
    /// Primary muscle group worked.
    pub muscle_group: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
