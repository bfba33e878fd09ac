//! Send command handler

use crate::error::EngagespotResult;
use crate::external::{ReqwestTransport, Transport};
use crate::services::{Client, NotificationDraft};

use super::print_response;

/// Everything the `send` subcommand collects
#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    pub title: String,
    pub recipients: Vec<String>,
    pub message: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub channels: Vec<String>,
}

/// Handler for the send command
pub struct SendCommandHandler {
    client: Client<ReqwestTransport>,
}

impl SendCommandHandler {
    pub fn new(client: Client<ReqwestTransport>) -> Self {
        Self { client }
    }

    /// Builds the draft and sends it, printing the response
    pub async fn execute(&self, options: SendOptions) -> EngagespotResult<()> {
        let draft = build_draft(&self.client, options)?;
        tracing::info!(
            title = draft.title(),
            recipients = draft.recipients().len(),
            "Sending notification"
        );

        let response = draft.send().await?;
        print_response(response).await
    }
}

/// Applies command options to a fresh draft
pub fn build_draft<T: Transport>(
    client: &Client<T>,
    options: SendOptions,
) -> EngagespotResult<NotificationDraft<'_, T>> {
    let mut draft = client.new_notification(options.title)?;

    if let Some(message) = options.message {
        draft.set_message(message)?;
    }
    if let Some(url) = options.url {
        draft.set_url(url)?;
    }
    if let Some(icon) = options.icon {
        draft.set_icon(icon)?;
    }
    if let Some(category) = options.category {
        draft.set_category(category)?;
    }
    for channel in options.channels {
        draft.add_channel_override(channel)?;
    }
    for recipient in options.recipients {
        draft.add_recipient(recipient)?;
    }

    Ok(draft)
}
