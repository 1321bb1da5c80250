//! HTTP server configuration.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_bind() -> String {
    String::from("127.0.0.1:5000")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl ServerConfig {
    /// Parse `bind` into a socket address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `bind` is not `host:port`.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind
            .parse()
            .map_err(|e| ConfigError::InvalidValue {
                field: "server.bind".into(),
                reason: format!("{e}"),
            })
    }
}
