//! Route handlers organized by domain.

pub mod auth;
pub mod exercise;
pub mod health;
pub mod user;
pub mod workout;
