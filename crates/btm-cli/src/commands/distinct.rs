use btm_config::BtmConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DistinctArgs;
use crate::commands::open_db;
use crate::output::output;

/// Handle `btm distinct <field>`.
pub async fn handle(
    args: &DistinctArgs,
    config: &BtmConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let db = open_db(config).await?;
    output(&db.distinct_values(args.field).await?, flags.format)
}
