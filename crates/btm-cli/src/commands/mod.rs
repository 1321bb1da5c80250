pub mod dispatch;
pub mod distinct;
pub mod exercises;
pub mod refresh;
pub mod schema;
pub mod seed;
pub mod serve;
pub mod setup;

use anyhow::Context;
use btm_config::BtmConfig;
use btm_db::ExerciseDb;

/// Open the configured database, creating the schema on first use.
pub async fn open_db(config: &BtmConfig) -> anyhow::Result<ExerciseDb> {
    ExerciseDb::open(&config.database)
        .await
        .with_context(|| format!("failed to open database '{}'", config.database.path))
}
