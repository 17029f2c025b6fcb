//! Store implementations.

pub mod exercise;
pub mod memory;
pub mod user;
pub mod workout;

pub use exercise::ExerciseRepository;
pub use memory::{MemoryExerciseStore, MemoryUserStore, MemoryWorkoutStore};
pub use user::UserRepository;
pub use workout::WorkoutRepository;
