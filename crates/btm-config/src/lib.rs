//! # btm-config
//!
//! Layered configuration loading for the BTM workout catalog using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`BTM_*` prefix, `__` as separator)
//! 2. `RAPIDAPI_KEY` (legacy name for `catalog.api_key`)
//! 3. Project-level `btm.toml`
//! 4. User-level `~/.config/btm/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `BTM_CATALOG__API_KEY` -> `catalog.api_key`,
//! `BTM_DATABASE__PATH` -> `database.path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use btm_config::BtmConfig;
//!
//! let config = BtmConfig::load_with_dotenv().expect("config");
//! if config.catalog.is_configured() {
//!     println!("catalog: {}", config.catalog.base_url);
//! }
//! ```

mod catalog;
mod database;
mod error;
mod refresh;
mod server;

pub use catalog::CatalogConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use refresh::RefreshConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the legacy environment variable holding the RapidAPI key.
pub const LEGACY_API_KEY_VAR: &str = "RAPIDAPI_KEY";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BtmConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
}

impl BtmConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed, or
    /// [`ConfigError::InvalidValue`] if the catalog section fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.catalog.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from("btm.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: legacy RAPIDAPI_KEY
        figment = figment.merge(
            Env::raw()
                .only(&[LEGACY_API_KEY_VAR])
                .map(|_| "catalog.api_key".into()),
        );

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("BTM_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("btm").join("config.toml"))
    }
}
