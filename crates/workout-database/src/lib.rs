//! # workout-database
//!
//! PostgreSQL connection management, migrations, and the stores the
//! services read and write user, catalog and workout records through.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use repositories::{
    ExerciseRepository, MemoryExerciseStore, MemoryUserStore, MemoryWorkoutStore,
    UserRepository, WorkoutRepository,
};
pub use store::{ExerciseStore, UserStore, WorkoutStore};
