//! Command handlers for CLI subcommands

pub mod connect;
pub mod send;
pub mod sign;

pub use connect::ConnectCommandHandler;
pub use send::{SendCommandHandler, SendOptions};
pub use sign::SignCommandHandler;

use crate::error::{EngagespotResult, TransportError};

/// Prints status and body exactly as Engagespot returned them
async fn print_response(response: reqwest::Response) -> EngagespotResult<()> {
    let status = response.status();
    let body = response.text().await.map_err(TransportError::from)?;

    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "Engagespot returned a non-success status");
    }

    println!("{}", status);
    if !body.is_empty() {
        println!("{}", body);
    }
    Ok(())
}
