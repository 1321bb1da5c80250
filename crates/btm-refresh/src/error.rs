//! Refresh error types.

use btm_catalog::FetchError;
use thiserror::Error;

/// Why a refresh produced no result.
///
/// Rejections by the store are not errors; they are reported in
/// [`crate::RefreshResult::rejected`].
#[derive(Debug, Error)]
pub enum RefreshError {
    /// The catalog could not be fetched. Nothing was read from or written to storage.
    #[error("catalog fetch failed: {0}")]
    FetchFailed(#[from] FetchError),

    /// Storage failed as a whole during the identity read or the insert.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}
