use anyhow::Context;
use btm_config::BtmConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, layered configuration, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<BtmConfig> {
    let mut config = BtmConfig::load_with_dotenv().context("failed to load configuration")?;

    if let Some(path) = &flags.database {
        config.database.path.clone_from(path);
        config.database.url.clear();
    }

    tracing::debug!(
        database = %config.database.path,
        remote = config.database.is_remote(),
        catalog_configured = config.catalog.is_configured(),
        "configuration loaded"
    );
    Ok(config)
}
