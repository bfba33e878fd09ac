use clap::Parser;

use engagespot::cli::{Cli, execute_command, init_logger_from_settings, load_config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_config(&cli)?;
    init_logger_from_settings(&cli, &settings)?;

    tracing::debug!(config = ?cli.config, "Configuration loaded");

    execute_command(cli, settings).await?;
    Ok(())
}
