//! # btm-refresh
//!
//! Pulls the full ExerciseDB catalog, maps it to local exercises, and inserts
//! only the ones storage does not already hold. Append-only: existing records
//! are never updated or deleted.

mod engine;
mod error;
mod result;

pub use engine::{RefreshEngine, Selection, select_new};
pub use error::RefreshError;
pub use result::RefreshResult;
