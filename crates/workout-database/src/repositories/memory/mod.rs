//! Stores held in process memory.
//!
//! Each enforces the same constraints as its PostgreSQL counterpart, so the
//! services behave identically against either backend.

pub mod exercise;
pub mod user;
pub mod workout;

pub use exercise::MemoryExerciseStore;
pub use user::MemoryUserStore;
pub use workout::MemoryWorkoutStore;
