use btm_config::BtmConfig;
use btm_core::ExerciseFilter;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExercisesArgs;
use crate::commands::open_db;
use crate::output::output;

/// Handle `btm exercises`.
pub async fn handle(
    args: ExercisesArgs,
    config: &BtmConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = ExerciseFilter {
        name: args.name,
        body_part: args.body_part,
        equipment: args.equipment,
        target: args.target,
        difficulty: args.difficulty,
    };
    let db = open_db(config).await?;
    let exercises = db.find_exercises(&filter).await?;
    output(&exercises, flags.format)
}
