//! # workout-api
//!
//! HTTP API layer for the workout tracker built on Axum.
//!
//! A thin adapter over `workout-service`: extractors turn requests into
//! service inputs, [`ApiError`](error::ApiError) turns failures into status
//! codes, and middleware adds rate limiting, CORS and request logging.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use router::build_router;
pub use state::{AppState, Stores};
