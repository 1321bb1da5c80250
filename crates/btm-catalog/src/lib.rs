//! # btm-catalog
//!
//! Client for the ExerciseDB catalog on RapidAPI, and the mapper from its
//! record shape to [`btm_core::Exercise`].
//!
//! [`CatalogSource`] is the seam the refresh engine depends on;
//! [`CatalogClient`] is the production implementation.

mod client;
mod error;
mod http;
pub mod mapping;

use std::future::Future;
use std::sync::Arc;

pub use client::{CatalogClient, PageMode};
pub use error::FetchError;
pub use mapping::{map_record, map_records};

/// One raw catalog record. Never persisted; always passed through [`mapping`].
pub type SourceRecord = serde_json::Map<String, serde_json::Value>;

/// Something that can produce the full set of catalog records.
pub trait CatalogSource: Send + Sync {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<SourceRecord>, FetchError>> + Send;
}

impl CatalogSource for CatalogClient {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<SourceRecord>, FetchError>> + Send {
        Self::fetch_all(self)
    }
}

impl<C: CatalogSource> CatalogSource for Arc<C> {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<SourceRecord>, FetchError>> + Send {
        (**self).fetch_all()
    }
}
