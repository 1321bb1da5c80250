//! Repository modules for the exercise and label collections.
//!
//! Each module adds methods to `ExerciseDb` via `impl ExerciseDb` blocks.

pub mod exercise;
pub mod label;

pub use exercise::BulkInsertOutcome;
pub use label::LabelDeletion;
