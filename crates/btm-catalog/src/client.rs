//! HTTP client for the ExerciseDB catalog on RapidAPI.

use std::time::Duration;

use btm_config::{CatalogConfig, ConfigError};
use reqwest::header::{HeaderMap, HeaderValue};

use crate::SourceRecord;
use crate::error::FetchError;
use crate::http::{check_response, parse_page};

const USER_AGENT: &str = concat!("btm-workout/", env!("CARGO_PKG_VERSION"));

/// How the catalog is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// `limit`/`offset` paging. Pages are requested until one comes back empty.
    Paged { page_size: u32 },
    /// One request, no paging parameters.
    Unbounded,
}

impl PageMode {
    /// `page_size == 0` selects [`PageMode::Unbounded`].
    #[must_use]
    pub const fn from_page_size(page_size: u32) -> Self {
        if page_size == 0 {
            Self::Unbounded
        } else {
            Self::Paged { page_size }
        }
    }
}

/// Client for the remote exercise catalog.
///
/// Holds no state between calls besides the pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    exercises_url: String,
    mode: PageMode,
    max_pages: u32,
}

impl CatalogClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when the API key is missing or a
    /// placeholder, and [`ConfigError::InvalidValue`] when a header value or
    /// the HTTP client itself cannot be built. No request is made.
    pub fn new(config: &CatalogConfig) -> Result<Self, ConfigError> {
        let api_key = config.require_api_key()?;

        let mut headers = HeaderMap::new();
        let mut key_value = HeaderValue::from_str(api_key).map_err(|e| ConfigError::InvalidValue {
            field: "catalog.api_key".into(),
            reason: e.to_string(),
        })?;
        key_value.set_sensitive(true);
        headers.insert("X-RapidAPI-Key", key_value);
        headers.insert(
            "X-RapidAPI-Host",
            HeaderValue::from_str(&config.host).map_err(|e| ConfigError::InvalidValue {
                field: "catalog.host".into(),
                reason: e.to_string(),
            })?,
        );

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                field: "catalog".into(),
                reason: format!("http client: {e}"),
            })?;

        Ok(Self {
            http,
            exercises_url: format!("{}/exercises", config.base_url.trim_end_matches('/')),
            mode: if config.is_unbounded() {
                PageMode::Unbounded
            } else {
                PageMode::Paged {
                    page_size: config.page_size,
                }
            },
            max_pages: config.max_pages.max(1),
        })
    }

    /// Override the paging mode chosen from configuration.
    #[must_use]
    pub const fn with_page_mode(mut self, mode: PageMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn page_mode(&self) -> PageMode {
        self.mode
    }

    /// Fetch the entire catalog as raw source records.
    ///
    /// # Errors
    ///
    /// Returns the first [`FetchError`] hit. Records from earlier pages are
    /// discarded; a fetch either fully succeeds or fails.
    pub async fn fetch_all(&self) -> Result<Vec<SourceRecord>, FetchError> {
        match self.mode {
            PageMode::Unbounded => {
                let records = self.fetch_page(&self.exercises_url).await?;
                tracing::debug!(count = records.len(), "fetched unpaged catalog");
                Ok(records)
            }
            PageMode::Paged { page_size } => self.fetch_paged(page_size).await,
        }
    }

    async fn fetch_paged(&self, page_size: u32) -> Result<Vec<SourceRecord>, FetchError> {
        let mut records = Vec::new();
        let mut offset: u64 = 0;

        for page in 0..self.max_pages {
            let url = format!("{}?limit={page_size}&offset={offset}", self.exercises_url);
            let batch = self.fetch_page(&url).await?;
            tracing::debug!(page, offset, count = batch.len(), "fetched catalog page");

            if batch.is_empty() {
                return Ok(records);
            }
            offset += batch.len() as u64;
            records.extend(batch);
        }

        Err(FetchError::UnexpectedShape(format!(
            "catalog still returning records after {} pages",
            self.max_pages
        )))
    }

    async fn fetch_page(&self, url: &str) -> Result<Vec<SourceRecord>, FetchError> {
        let resp = check_response(self.http.get(url).send().await?).await?;
        let body = resp.text().await?;
        parse_page(&body)
    }
}
