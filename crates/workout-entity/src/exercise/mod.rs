//! Exercise catalog entities.

pub mod model;

pub use model::{Exercise, ExerciseCategory};
