use serde_json::json;

use btm_config::BtmConfig;

use crate::cli::GlobalFlags;
use crate::commands::open_db;
use crate::output::output;

/// Handle `btm seed`.
pub async fn handle(config: &BtmConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let db = open_db(config).await?;
    let report = db.seed().await?;
    output(
        &json!({
            "body_parts": report.body_parts,
            "equipment": report.equipment,
            "exercises": report.exercises,
        }),
        flags.format,
    )
}
