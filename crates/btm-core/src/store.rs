//! Storage seam for exercise records.
//!
//! [`ExerciseStore`] is the document-store style interface the refresh engine
//! and the HTTP layer program against. `btm-db` provides the libSQL
//! implementation; tests substitute in-memory fakes.

use std::future::Future;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::Exercise;
use crate::filter::{ExerciseField, ExerciseFilter};
use crate::identity::ExerciseIdentity;

/// Errors surfaced across the storage seam.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached or failed as a whole.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// An unordered bulk insert persisted some records and rejected others.
    #[error("partial write: {inserted} inserted, {} rejected", .rejected.len())]
    PartialWrite {
        inserted: u64,
        rejected: Vec<ExerciseIdentity>,
    },
}

/// Outcome of a fully successful `insert_many`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertManyResult {
    pub inserted_count: u64,
}

/// Outcome of a delete-by-filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    pub deleted_count: u64,
}

/// Document-store operations over the exercise collection.
///
/// Implementations must enforce uniqueness of the identity triple
/// themselves; callers treat the store as the final arbiter of conflicts.
pub trait ExerciseStore: Send + Sync {
    /// All exercises matching `filter`.
    fn find(
        &self,
        filter: &ExerciseFilter,
    ) -> impl Future<Output = Result<Vec<Exercise>, StoreError>> + Send;

    /// Sorted distinct non-null values of `field`.
    fn distinct(
        &self,
        field: ExerciseField,
    ) -> impl Future<Output = Result<Vec<String>, StoreError>> + Send;

    /// Unordered bulk insert.
    ///
    /// Every record is attempted even when earlier ones are rejected. Returns
    /// [`StoreError::PartialWrite`] when at least one record was rejected, with
    /// the count of records that did persist.
    fn insert_many(
        &self,
        exercises: &[Exercise],
    ) -> impl Future<Output = Result<InsertManyResult, StoreError>> + Send;

    /// Delete every exercise matching `filter`.
    fn delete(
        &self,
        filter: &ExerciseFilter,
    ) -> impl Future<Output = Result<DeleteResult, StoreError>> + Send;

    /// Identity triples of every stored exercise.
    fn existing_identities(
        &self,
    ) -> impl Future<Output = Result<Vec<ExerciseIdentity>, StoreError>> + Send {
        async move {
            let all = self.find(&ExerciseFilter::all()).await?;
            Ok(all.iter().map(Exercise::identity).collect())
        }
    }
}

impl<S: ExerciseStore> ExerciseStore for Arc<S> {
    fn find(
        &self,
        filter: &ExerciseFilter,
    ) -> impl Future<Output = Result<Vec<Exercise>, StoreError>> + Send {
        (**self).find(filter)
    }

    fn distinct(
        &self,
        field: ExerciseField,
    ) -> impl Future<Output = Result<Vec<String>, StoreError>> + Send {
        (**self).distinct(field)
    }

    fn insert_many(
        &self,
        exercises: &[Exercise],
    ) -> impl Future<Output = Result<InsertManyResult, StoreError>> + Send {
        (**self).insert_many(exercises)
    }

    fn delete(
        &self,
        filter: &ExerciseFilter,
    ) -> impl Future<Output = Result<DeleteResult, StoreError>> + Send {
        (**self).delete(filter)
    }

    fn existing_identities(
        &self,
    ) -> impl Future<Output = Result<Vec<ExerciseIdentity>, StoreError>> + Send {
        (**self).existing_identities()
    }
}
