//! Exercise catalog reads.

pub mod service;

pub use service::ExerciseService;
