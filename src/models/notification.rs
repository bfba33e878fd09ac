//! Wire types for `POST notifications`.
//!
//! Optional fields are skipped when unset so the body never carries `null`
//! or empty placeholders.

use serde::{Deserialize, Serialize};

/// Title/message block of a notification; only `title` is required
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationContent {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Per-notification delivery overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelOverride {
    /// Channels this notification is restricted to, in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channels: Vec<String>,
}

impl ChannelOverride {
    /// Appends a channel. Earlier entries are kept and duplicates are allowed.
    pub fn add_channel(&mut self, channel: String) {
        self.channels.push(channel);
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

/// Complete request body for `POST notifications`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub notification: NotificationContent,
    pub recipients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        rename = "override",
        default,
        skip_serializing_if = "ChannelOverride::is_empty"
    )]
    pub overrides: ChannelOverride,
}

impl NotificationPayload {
    /// Creates a payload with only a title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            notification: NotificationContent {
                title: title.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
