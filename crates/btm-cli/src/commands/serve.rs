use anyhow::Context;
use btm_config::{BtmConfig, ServerConfig};
use btm_server::AppState;

use crate::cli::root_commands::ServeArgs;

/// Handle `btm serve`.
pub async fn handle(args: &ServeArgs, config: BtmConfig) -> anyhow::Result<()> {
    let server = match &args.bind {
        Some(bind) => ServerConfig { bind: bind.clone() },
        None => config.server.clone(),
    };
    let addr = server.socket_addr()?;

    if !config.catalog.is_configured() {
        tracing::warn!("catalog API key not configured; /api/v1/refresh_db will fail");
    }

    let state = AppState::from_config(&config)
        .await
        .context("failed to open database")?;
    btm_server::serve(addr, state).await
}
