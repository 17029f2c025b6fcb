//! # workout-entity
//!
//! Domain entity models for the workout tracker. Every struct in this crate
//! represents a database table row or a domain value object. Database
//! entities additionally derive `sqlx::FromRow`.

pub mod exercise;
pub mod user;
pub mod workout;
