//! Workout plan and schedule handlers. Every route requires a session.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use workout_entity::workout::{WorkoutPlan, WorkoutPlanDetails, WorkoutSchedule};

use crate::dto::request::{CreateScheduleRequest, CreateWorkoutRequest, UpdateWorkoutRequest};
use crate::dto::response::DataResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /api/v1/workouts
pub async fn list_workouts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<DataResponse<Vec<WorkoutPlan>>>> {
    let plans = state.workout_service.list_plans(&auth).await?;
    Ok(Json(DataResponse::new(
        "All workouts retrieved successfully",
        plans,
    )))
}

/// GET /api/v1/workouts/{id}
pub async fn get_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DataResponse<WorkoutPlanDetails>>> {
    let details = state.workout_service.get_plan(&auth, parse_id(&id)?).await?;
    Ok(Json(DataResponse::new(
        "Workout retrieved successfully",
        details,
    )))
}

/// POST /api/v1/workouts
pub async fn create_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateWorkoutRequest>,
) -> ApiResult<(StatusCode, Json<DataResponse<WorkoutPlan>>)> {
    let plan = state.workout_service.create_plan(&auth, req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("Workout created successfully", plan)),
    ))
}

/// PATCH /api/v1/workouts/{id}
pub async fn update_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateWorkoutRequest>,
) -> ApiResult<(StatusCode, Json<DataResponse<WorkoutPlan>>)> {
    let plan = state
        .workout_service
        .update_plan(&auth, parse_id(&id)?, req.into())
        .await?;
    Ok((
        StatusCode::ACCEPTED,
        Json(DataResponse::new("Workout plan updated successfully", plan)),
    ))
}

/// DELETE /api/v1/workouts/{id}
pub async fn delete_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .workout_service
        .delete_plan(&auth, parse_id(&id)?)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/workouts/schedules
pub async fn list_schedules(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<DataResponse<Vec<WorkoutSchedule>>>> {
    let schedules = state.workout_service.list_schedules(&auth).await?;
    Ok(Json(DataResponse::new(
        "All workout schedules retrieved successfully",
        schedules,
    )))
}

/// GET /api/v1/workouts/schedules/{id}
pub async fn get_schedule(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DataResponse<WorkoutSchedule>>> {
    let schedule = state
        .workout_service
        .get_schedule(&auth, parse_id(&id)?)
        .await?;
    Ok(Json(DataResponse::new(
        "Workout schedule retrieved successfully",
        schedule,
    )))
}

/// POST /api/v1/workouts/schedules
pub async fn create_schedule(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateScheduleRequest>,
) -> ApiResult<(StatusCode, Json<DataResponse<WorkoutSchedule>>)> {
    let schedule = state
        .workout_service
        .create_schedule(&auth, req.into())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new("Workout schedule created successfully", schedule)),
    ))
}
