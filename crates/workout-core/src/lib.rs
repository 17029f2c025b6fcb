//! # workout-core
//!
//! Core crate for the workout tracker. Contains the unified error system,
//! configuration schemas and loader, and the traits the auth core consumes
//! from the outside world (clock, outbound mail).
//!
//! This crate has **no** internal dependencies on other workspace crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
