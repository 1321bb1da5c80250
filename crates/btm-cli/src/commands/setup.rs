use btm_config::BtmConfig;
use btm_core::LabelKind;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::commands::open_db;
use crate::output::output;

/// Handle `btm setup`. Opening the database applies migrations.
pub async fn handle(config: &BtmConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let db = open_db(config).await?;
    let exercises = db.count_exercises().await?;
    let body_parts = db.list_labels(LabelKind::BodyPart).await?.len();
    let equipment = db.list_labels(LabelKind::Equipment).await?.len();

    output(
        &json!({
            "database": config.database.path,
            "exercises": exercises,
            "body_parts": body_parts,
            "equipment": equipment,
        }),
        flags.format,
    )
}
