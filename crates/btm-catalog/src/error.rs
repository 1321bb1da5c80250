//! Catalog fetch error types.

use thiserror::Error;

/// Ways a catalog fetch can fail. Any of these aborts the whole fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, or timeout failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The catalog answered with a non-success status (429 included).
    #[error("catalog returned HTTP {status}: {message}")]
    HttpStatus {
        /// HTTP status code returned by the catalog.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// The body was not valid JSON.
    #[error("malformed response body: {0}")]
    MalformedBody(String),

    /// The body was JSON but not an array of objects, or paging ran away.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
}

impl FetchError {
    /// HTTP status for [`FetchError::HttpStatus`], `None` otherwise.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
