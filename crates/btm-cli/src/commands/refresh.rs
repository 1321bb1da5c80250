use std::sync::Arc;

use anyhow::Context;
use btm_catalog::{CatalogClient, PageMode};
use btm_config::BtmConfig;
use btm_refresh::RefreshEngine;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RefreshArgs;
use crate::commands::open_db;
use crate::output::output;
use crate::progress::Progress;

/// Handle `btm refresh`.
pub async fn handle(
    args: &RefreshArgs,
    config: BtmConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut client =
        CatalogClient::new(&config.catalog).context("catalog client is not configured")?;
    if let Some(page_size) = args.page_size {
        client = client.with_page_mode(PageMode::from_page_size(page_size));
    }

    let db = Arc::new(open_db(&config).await?);
    let policy = args.policy.unwrap_or(config.refresh.identity_policy);
    let engine = RefreshEngine::new(db, client).with_policy(policy);

    let progress = Progress::spinner(flags.shows_progress(), "Refreshing exercise catalog...");
    match engine.refresh().await {
        Ok(result) => {
            progress.finish_ok(&format!(
                "{} new exercises added ({} fetched)",
                result.inserted_count, result.fetched_count
            ));
            output(&result, flags.format)
        }
        Err(error) => {
            progress.finish_err("refresh failed");
            Err(error).context("catalog refresh failed")
        }
    }
}
