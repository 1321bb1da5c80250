//! # btm-core
//!
//! Core types shared by every crate in the BTM workout catalog:
//! - Exercise and label entities (the local schema)
//! - Identity triple and the duplicate-detection policy built on it
//! - Query filters and distinct-able fields
//! - The `ExerciseStore` storage seam and its error type

pub mod entities;
pub mod filter;
pub mod identity;
pub mod store;

pub use entities::{Exercise, Label, LabelKind};
pub use filter::{ExerciseField, ExerciseFilter};
pub use identity::{ExerciseIdentity, IdentityKey, IdentityPolicy};
pub use store::{DeleteResult, ExerciseStore, InsertManyResult, StoreError};
