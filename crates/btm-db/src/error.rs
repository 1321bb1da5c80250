//! Database error types for btm-db.

use btm_core::StoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned data we could not decode.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A record was rejected before reaching SQL (blank identity field, blank label).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A unique key already exists.
    #[error("{entity} already exists: {key}")]
    Duplicate { entity: &'static str, key: String },

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

impl From<DatabaseError> for StoreError {
    fn from(err: DatabaseError) -> Self {
        Self::Unavailable(err.to_string())
    }
}
