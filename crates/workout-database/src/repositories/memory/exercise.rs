//! In-memory exercise catalog.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use workout_core::result::AppResult;
use workout_entity::exercise::{Exercise, ExerciseCategory};

use crate::store::ExerciseStore;

/// Category names, ids assigned from 1 in this order.
pub(crate) const CATEGORIES: [&str; 3] = ["Strength", "Cardio", "Flexibility"];

/// (name, description, category id, muscle group), ids assigned from 1.
pub(crate) const EXERCISES: [(&str, &str, i64, &str); 7] = [
    (
        "Push-up",
        "A classic bodyweight exercise for the chest, shoulders, and triceps.",
        1,
        "Chest",
    ),
    (
        "Squat",
        "A fundamental lower body exercise that targets the quads, hamstrings, and glutes.",
        1,
        "Legs",
    ),
    (
        "Plank",
        "An isometric core strength exercise that involves maintaining a position similar to \
         a push-up for the maximum possible time.",
        1,
        "Core",
    ),
    (
        "Running",
        "A popular form of cardiovascular exercise.",
        2,
        "Full Body",
    ),
    (
        "Hamstring Stretch",
        "A stretch to improve flexibility in the back of the thigh.",
        3,
        "Legs",
    ),
    (
        "Bicep Curl",
        "A weight training exercise that targets the biceps.",
        1,
        "Arms",
    ),
    (
        "Pull-up",
        "An upper-body strength exercise where the body is pulled up.",
        1,
        "Back",
    ),
];

/// An [`ExerciseStore`] over a fixed catalog.
#[derive(Debug, Clone, Default)]
pub struct MemoryExerciseStore {
    categories: Arc<Vec<ExerciseCategory>>,
    exercises: Arc<Vec<Exercise>>,
}

impl MemoryExerciseStore {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog the schema migration seeds.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let categories = (1..)
            .zip(CATEGORIES)
            .map(|(id, name)| ExerciseCategory {
                id,
                name: name.to_string(),
                created_at: now,
                updated_at: now,
            })
            .collect();
        let exercises = (1..)
            .zip(EXERCISES)
            .map(|(id, (name, description, category_id, muscle_group))| Exercise {
                id,
                name: name.to_string(),
                description: description.to_string(),
                category_id,
                muscle_group: muscle_group.to_string(),
                created_at: now,
                updated_at: now,
            })
            .collect();

        Self {
            categories: Arc::new(categories),
            exercises: Arc::new(exercises),
        }
    }
}

#[async_trait]
impl ExerciseStore for MemoryExerciseStore {
    async fn list_exercises(&self) -> AppResult<Vec<Exercise>> {
        Ok(self.exercises.to_vec())
    }

    async fn list_categories(&self) -> AppResult<Vec<ExerciseCategory>> {
        Ok(self.categories.to_vec())
    }

    async fn find_exercise(&self, id: i64) -> AppResult<Option<Exercise>> {
        Ok(self.exercises.iter().find(|e| e.id == id).cloned())
    }
}
