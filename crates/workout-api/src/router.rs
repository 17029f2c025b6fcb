//! Route definitions for the workout tracker HTTP API.
//!
//! All routes are mounted under `/api/v1`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::body::Body;
use axum::http::Request;
use axum::{
    Router, middleware as axum_middleware,
    routing::{get, patch, post},
};
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::handlers;
use crate::middleware;
use crate::middleware::rate_limit::RateLimiter;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let rate_limit = &state.config.server.rate_limit;

    let mut api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(exercise_routes())
        .merge(workout_routes());

    if rate_limit.enabled {
        api_routes = api_routes.layer(axum_middleware::from_fn_with_state(
            RateLimiter::from_config(rate_limit),
            middleware::rate_limit::rate_limit,
        ));
    }

    let api_routes = api_routes.merge(health_routes());
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Span wrapping one request.
///
/// Records the path only. Query strings carry verification and reset tokens.
fn request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
    )
}

/// Registration, verification, login and password reset
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/send", post(handlers::auth::send_verification_email))
        .route("/verify-email", get(handlers::auth::verify_email))
        .route("/login", post(handlers::auth::login))
        .route("/forgot-password", post(handlers::auth::forgot_password))
        .route("/reset-password", post(handlers::auth::reset_password))
}

/// Authenticated self-service
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::get_profile))
        .route(
            "/users/change-password",
            patch(handlers::user::change_password),
        )
}

/// Public exercise catalog
fn exercise_routes() -> Router<AppState> {
    Router::new()
        .route("/exercises", get(handlers::exercise::list_exercises))
        .route(
            "/exercise-categories",
            get(handlers::exercise::list_categories),
        )
}

/// The caller's workout plans and schedules
fn workout_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/workouts",
            get(handlers::workout::list_workouts).post(handlers::workout::create_workout),
        )
        .route(
            "/workouts/{id}",
            get(handlers::workout::get_workout)
                .patch(handlers::workout::update_workout)
                .delete(handlers::workout::delete_workout),
        )
        .route(
            "/workouts/schedules",
            get(handlers::workout::list_schedules).post(handlers::workout::create_schedule),
        )
        .route(
            "/workouts/schedules/{id}",
            get(handlers::workout::get_schedule),
        )
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
