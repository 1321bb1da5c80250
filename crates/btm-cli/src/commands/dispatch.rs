use btm_config::BtmConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: BtmConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => commands::serve::handle(&args, config).await,
        Commands::Refresh(args) => commands::refresh::handle(&args, config, flags).await,
        Commands::Seed => commands::seed::handle(&config, flags).await,
        Commands::Setup => commands::setup::handle(&config, flags).await,
        Commands::Exercises(args) => commands::exercises::handle(args, &config, flags).await,
        Commands::Distinct(args) => commands::distinct::handle(&args, &config, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
