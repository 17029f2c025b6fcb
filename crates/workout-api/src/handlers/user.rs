//! User self-service handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use workout_entity::user::UserProfile;

use crate::dto::request::ChangePasswordRequest;
use crate::dto::response::{DataResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/v1/users
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<DataResponse<UserProfile>>> {
    let profile = state.user_service.get_profile(&auth).await?;

    Ok(Json(DataResponse::new(
        "User profile retrieved successfully",
        profile,
    )))
}

/// PATCH /api/v1/users/change-password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    state
        .auth_service
        .change_password(auth.context(), req.into())
        .await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(MessageResponse::new("Password updated successfully")),
    ))
}
