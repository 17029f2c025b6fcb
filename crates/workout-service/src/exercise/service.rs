//! Exercise catalog service.

use std::sync::Arc;

use workout_core::result::AppResult;
use workout_database::ExerciseStore;
use workout_entity::exercise::{Exercise, ExerciseCategory};

/// Lists the public exercise catalog.
#[derive(Debug, Clone)]
pub struct ExerciseService {
    store: Arc<dyn ExerciseStore>,
}

impl ExerciseService {
    /// Creates a new exercise service.
    pub fn new(store: Arc<dyn ExerciseStore>) -> Self {
        Self { store }
    }

    /// Every exercise in the catalog.
    pub async fn list_exercises(&self) -> AppResult<Vec<Exercise>> {
        self.store.list_exercises().await
    }

    /// Every exercise category.
    pub async fn list_categories(&self) -> AppResult<Vec<ExerciseCategory>> {
        self.store.list_categories().await
    }
}
