//! Auth handlers: registration, verification, login and password reset.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use workout_core::error::AppError;

use crate::dto::request::{
    EmailQuery, LoginRequest, RegisterRequest, ResetPasswordRequest, TokenQuery,
};
use crate::dto::response::{LoginResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

const MAIL_SENT: &str = "Mail sent, check your junk or promotion folder!";

fn required(value: Option<String>, message: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::validation(message))
}

/// POST /api/v1/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    state.auth_service.register(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(
            "Verification mail sent, check your junk or promotion folder!",
        )),
    ))
}

/// POST /api/v1/send?email=
pub async fn send_verification_email(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> ApiResult<Json<MessageResponse>> {
    let email = required(query.email, "Email is required")?;
    state.auth_service.send_verification_email(&email).await?;

    Ok(Json(MessageResponse::new(MAIL_SENT)))
}

/// GET /api/v1/verify-email?token=
pub async fn verify_email(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
) -> ApiResult<Json<MessageResponse>> {
    let token = required(query.token, "Token is required")?;
    state.auth_service.verify_email(&token).await?;

    Ok(Json(MessageResponse::new("Email verified successfully")))
}

/// POST /api/v1/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let token = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}

/// POST /api/v1/forgot-password?email=
pub async fn forgot_password(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> ApiResult<Json<MessageResponse>> {
    let email = required(query.email, "Email is required")?;
    state.auth_service.send_forgot_password_email(&email).await?;

    Ok(Json(MessageResponse::new(MAIL_SENT)))
}

/// POST /api/v1/reset-password?token=
pub async fn reset_password(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
    ValidatedJson(req): ValidatedJson<ResetPasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let token = required(query.token, "Token is required")?;
    state.auth_service.reset_password(&token, req.into()).await?;

    Ok(Json(MessageResponse::new("Password reset successfully")))
}
