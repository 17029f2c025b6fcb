//! Public exercise catalog handlers.

use axum::Json;
use axum::extract::State;

use workout_entity::exercise::{Exercise, ExerciseCategory};

use crate::dto::response::DataResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/v1/exercises
pub async fn list_exercises(
    State(state): State<AppState>,
) -> ApiResult<Json<DataResponse<Vec<Exercise>>>> {
    let exercises = state.exercise_service.list_exercises().await?;
    Ok(Json(DataResponse::new(
        "All exercises retrieved successfully",
        exercises,
    )))
}

/// GET /api/v1/exercise-categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<Json<DataResponse<Vec<ExerciseCategory>>>> {
    let categories = state.exercise_service.list_categories().await?;
    Ok(Json(DataResponse::new(
        "All exercise categories retrieved successfully",
        categories,
    )))
}
