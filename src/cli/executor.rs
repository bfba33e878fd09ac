//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::handlers::{ConnectCommandHandler, SendCommandHandler, SendOptions, SignCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::Settings;
use crate::error::EngagespotResult;
use crate::services::Client;

/// Execute a CLI command with the given settings
///
/// # Errors
/// Returns configuration errors for missing credentials, validation errors
/// for bad arguments, and transport errors from the API call.
pub async fn execute_command(cli: Cli, settings: Settings) -> EngagespotResult<()> {
    let mut engagespot = settings.engagespot;
    if cli.hmac {
        engagespot.enable_hmac = true;
    }

    match cli.command {
        Commands::Sign { user_id } => SignCommandHandler::new(engagespot).execute(&user_id),
        Commands::Connect { user_id } => {
            let client = Client::from_settings(&engagespot, &settings.http)?;
            ConnectCommandHandler::new(client).execute(&user_id).await
        }
        Commands::Send {
            title,
            recipients,
            message,
            url,
            icon,
            category,
            channels,
        } => {
            let client = Client::from_settings(&engagespot, &settings.http)?;
            let options = SendOptions {
                title,
                recipients,
                message,
                url,
                icon,
                category,
                channels,
            };
            SendCommandHandler::new(client).execute(options).await
        }
    }
}
