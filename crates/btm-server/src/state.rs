use std::sync::Arc;

use btm_config::{BtmConfig, CatalogConfig};
use btm_core::IdentityPolicy;
use btm_db::ExerciseDb;
use btm_db::error::DatabaseError;

/// Shared handles for every request.
pub struct AppState {
    pub db: Arc<ExerciseDb>,
    /// The catalog client is built per refresh so a missing key only fails
    /// the refresh route, not startup.
    pub catalog: CatalogConfig,
    pub identity_policy: IdentityPolicy,
}

impl AppState {
    pub fn new(db: Arc<ExerciseDb>, catalog: CatalogConfig) -> Self {
        Self {
            db,
            catalog,
            identity_policy: IdentityPolicy::default(),
        }
    }

    #[must_use]
    pub const fn with_identity_policy(mut self, policy: IdentityPolicy) -> Self {
        self.identity_policy = policy;
        self
    }

    /// Open the configured database and wire state from `config`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn from_config(config: &BtmConfig) -> Result<Self, DatabaseError> {
        let db = ExerciseDb::open(&config.database).await?;
        Ok(Self::new(Arc::new(db), config.catalog.clone())
            .with_identity_policy(config.refresh.identity_policy))
    }
}
