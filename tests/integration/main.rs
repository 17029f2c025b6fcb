//! HTTP-level integration tests.
//!
//! The router runs against the in-memory stores and outbox, so no
//! PostgreSQL instance or mail relay is needed.

mod auth_test;
mod helpers;
mod user_test;
mod workout_test;
