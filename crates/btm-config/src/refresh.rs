//! Refresh routine configuration.

use btm_core::IdentityPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RefreshConfig {
    /// Which fields decide that a fetched exercise already exists.
    #[serde(default)]
    pub identity_policy: IdentityPolicy,
}
