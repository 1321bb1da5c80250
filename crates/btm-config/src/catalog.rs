//! External exercise catalog (ExerciseDB on RapidAPI) configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    String::from("https://exercisedb.p.rapidapi.com")
}

fn default_host() -> String {
    String::from("exercisedb.p.rapidapi.com")
}

/// Default items requested per page.
const fn default_page_size() -> u32 {
    200
}

/// Upper bound on pages fetched in one refresh.
const fn default_max_pages() -> u32 {
    1000
}

/// Default network timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

/// Values people leave in `.env` templates instead of a real key.
const PLACEHOLDER_KEYS: &[&str] = &[
    "your_api_key",
    "your_api_key_here",
    "your_rapidapi_key",
    "rapidapi_key",
    "changeme",
    "change_me",
    "todo",
    "none",
    "null",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// RapidAPI key sent as `X-RapidAPI-Key`.
    #[serde(default)]
    pub api_key: String,

    /// Base URL; `/exercises` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value of the `X-RapidAPI-Host` header.
    #[serde(default = "default_host")]
    pub host: String,

    /// Items per page. `0` requests the whole catalog in a single call.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            host: default_host(),
            page_size: default_page_size(),
            max_pages: default_max_pages(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CatalogConfig {
    /// Check that a real (non-placeholder) API key is present.
    pub fn is_configured(&self) -> bool {
        !is_placeholder_key(&self.api_key)
    }

    /// Return the API key, or `NotConfigured` when it is missing or a placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] for the `catalog` section.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        if self.is_configured() {
            Ok(self.api_key.trim())
        } else {
            Err(ConfigError::NotConfigured {
                section: "catalog".into(),
            })
        }
    }

    /// Whether paging is disabled and the catalog is fetched in one request.
    pub const fn is_unbounded(&self) -> bool {
        self.page_size == 0
    }

    /// Sanity-check numeric settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero timeout, a zero page
    /// cap, or a base URL that is not http(s).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "catalog.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.max_pages == 0 {
            return Err(ConfigError::InvalidValue {
                field: "catalog.max_pages".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "catalog.base_url".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.base_url),
            });
        }
        Ok(())
    }
}

fn is_placeholder_key(key: &str) -> bool {
    let key = key.trim();
    if key.is_empty() {
        return true;
    }
    let lowered = key.to_ascii_lowercase();
    PLACEHOLDER_KEYS.contains(&lowered.as_str())
        || (key.starts_with('<') && key.ends_with('>'))
        || key.chars().all(|c| c == 'x' || c == 'X' || c == '*')
}
