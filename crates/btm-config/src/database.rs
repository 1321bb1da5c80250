//! libSQL database configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    String::from("btm_workout.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote libSQL URL (e.g., `libsql://btm-workout.turso.io`). Takes
    /// precedence over `path` when set together with `auth_token`.
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Check if a remote database is configured.
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }
}
