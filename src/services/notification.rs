//! In-memory notification drafts.
//!
//! A draft is created by [`Client::new_notification`], filled in through
//! chaining setters and sent once with [`NotificationDraft::send`]. Every
//! setter rejects an empty string and leaves the draft untouched when it does.

use crate::error::{EngagespotError, EngagespotResult};
use crate::external::Transport;
use crate::models::NotificationPayload;
use crate::services::client::Client;

/// A notification being built, borrowed from the client that will send it
pub struct NotificationDraft<'a, T: Transport> {
    client: &'a Client<T>,
    payload: NotificationPayload,
}

/// Rejects empty input with a validation error naming the field
fn non_empty(field: &str, value: String) -> EngagespotResult<String> {
    if value.is_empty() {
        return Err(EngagespotError::validation(
            field,
            format!("empty {} string", field.replace('_', " ")),
        ));
    }
    Ok(value)
}

impl<'a, T: Transport> NotificationDraft<'a, T> {
    pub(crate) fn new(client: &'a Client<T>, title: String) -> Self {
        Self {
            client,
            payload: NotificationPayload::titled(title),
        }
    }

    /// Sets the notification body
    pub fn set_message(&mut self, message: impl Into<String>) -> EngagespotResult<&mut Self> {
        self.payload.notification.message = Some(non_empty("message", message.into())?);
        Ok(self)
    }

    /// Sets the URL opened when the notification is clicked
    pub fn set_url(&mut self, url: impl Into<String>) -> EngagespotResult<&mut Self> {
        self.payload.notification.url = Some(non_empty("url", url.into())?);
        Ok(self)
    }

    /// Sets the icon URL
    pub fn set_icon(&mut self, icon_url: impl Into<String>) -> EngagespotResult<&mut Self> {
        self.payload.notification.icon = Some(non_empty("icon_url", icon_url.into())?);
        Ok(self)
    }

    /// Sets the category; Engagespot creates unknown categories on the fly
    pub fn set_category(&mut self, category: impl Into<String>) -> EngagespotResult<&mut Self> {
        self.payload.category = Some(non_empty("category", category.into())?);
        Ok(self)
    }

    /// Restricts delivery to a channel, overriding the dashboard defaults
    ///
    /// Channels accumulate in call order. Nothing is reset or deduplicated.
    pub fn add_channel_override(
        &mut self,
        channel: impl Into<String>,
    ) -> EngagespotResult<&mut Self> {
        let channel = non_empty("channel", channel.into())?;
        self.payload.overrides.add_channel(channel);
        Ok(self)
    }

    /// Adds a recipient; at least one is required before sending
    pub fn add_recipient(&mut self, recipient: impl Into<String>) -> EngagespotResult<&mut Self> {
        let recipient = non_empty("recipient", recipient.into())?;
        self.payload.recipients.push(recipient);
        Ok(self)
    }

    pub fn title(&self) -> &str {
        &self.payload.notification.title
    }

    pub fn message(&self) -> Option<&str> {
        self.payload.notification.message.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.payload.notification.url.as_deref()
    }

    pub fn icon(&self) -> Option<&str> {
        self.payload.notification.icon.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.payload.category.as_deref()
    }

    pub fn channels(&self) -> &[String] {
        &self.payload.overrides.channels
    }

    pub fn recipients(&self) -> &[String] {
        &self.payload.recipients
    }

    /// The body that will be posted
    pub fn payload(&self) -> &NotificationPayload {
        &self.payload
    }

    /// Renders the wire body as JSON
    pub fn to_json(&self) -> EngagespotResult<serde_json::Value> {
        Ok(serde_json::to_value(&self.payload)?)
    }

    fn has_enough_recipients(&self) -> bool {
        !self.payload.recipients.is_empty()
    }

    /// Sends the notification through the owning client
    ///
    /// The whole recipient list goes out in a single request.
    ///
    /// # Errors
    /// Returns a validation error without touching the network if no recipient
    /// was added; otherwise only transport failures.
    pub async fn send(&self) -> EngagespotResult<T::Response> {
        if !self.has_enough_recipients() {
            return Err(EngagespotError::validation(
                "recipients",
                "not enough recipients",
            ));
        }

        self.client.dispatch(self).await
    }
}

impl<T: Transport> std::fmt::Debug for NotificationDraft<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationDraft")
            .field("payload", &self.payload)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::recording::RecordingTransport;
    use crate::services::client::headers;
    use serde_json::json;

    fn client() -> Client<RecordingTransport> {
        Client::with_transport("A", "B", RecordingTransport::new())
    }

    #[test]
    fn test_new_draft_is_empty() {
        let client = client();
        let draft = client.new_notification("Hello").unwrap();
        assert_eq!(draft.title(), "Hello");
        assert_eq!(draft.message(), None);
        assert_eq!(draft.url(), None);
        assert_eq!(draft.icon(), None);
        assert_eq!(draft.category(), None);
        assert!(draft.channels().is_empty());
        assert!(draft.recipients().is_empty());
    }

    #[test]
    fn test_chained_setters_accumulate() {
        let client = client();
        let mut draft = client.new_notification("Hello").unwrap();
        draft
            .set_message("first")
            .unwrap()
            .set_message("second")
            .unwrap()
            .set_category("billing")
            .unwrap()
            .add_recipient("a@example.com")
            .unwrap()
            .add_recipient("b@example.com")
            .unwrap();

        assert_eq!(draft.message(), Some("second"));
        assert_eq!(draft.category(), Some("billing"));
        assert_eq!(draft.recipients(), ["a@example.com", "b@example.com"]);
    }

    #[test]
    fn test_empty_setter_leaves_field_unchanged() {
        let client = client();
        let mut draft = client.new_notification("Hello").unwrap();
        draft.set_message("kept").unwrap();

        let err = draft.set_message("").unwrap_err();
        assert!(matches!(
            err,
            EngagespotError::Validation { ref field, ref reason }
                if field == "message" && reason == "empty message string"
        ));
        assert_eq!(draft.message(), Some("kept"));

        assert!(draft.set_url("").is_err());
        assert!(draft.set_icon("").is_err());
        assert!(draft.set_category("").is_err());
        assert!(draft.add_channel_override("").is_err());
        assert!(draft.add_recipient("").is_err());
        assert_eq!(draft.url(), None);
        assert_eq!(draft.icon(), None);
        assert_eq!(draft.category(), None);
        assert!(draft.channels().is_empty());
        assert!(draft.recipients().is_empty());

        // still usable afterwards
        draft.set_url("https://example.com").unwrap();
        assert_eq!(draft.url(), Some("https://example.com"));
    }

    #[test]
    fn test_channel_overrides_append_without_dedup() {
        let client = client();
        let mut draft = client.new_notification("Hello").unwrap();
        draft
            .add_channel_override("email")
            .unwrap()
            .add_channel_override("sms")
            .unwrap()
            .add_channel_override("email")
            .unwrap();

        assert_eq!(draft.channels(), ["email", "sms", "email"]);
    }

    #[tokio::test]
    async fn test_send_without_recipients_makes_no_call() {
        let client = client();
        let draft = client.new_notification("Hello").unwrap();

        let err = draft.send().await.unwrap_err();
        assert!(matches!(
            err,
            EngagespotError::Validation { ref reason, .. } if reason == "not enough recipients"
        ));
        assert_eq!(client.transport().calls(), 0);
    }

    #[tokio::test]
    async fn test_send_posts_accumulated_payload() {
        let client = client();
        let mut draft = client.new_notification("Order shipped").unwrap();
        draft
            .set_message("On its way")
            .unwrap()
            .set_icon("https://example.com/icon.png")
            .unwrap()
            .add_channel_override("inApp")
            .unwrap()
            .add_recipient("user@example.com")
            .unwrap();

        let status = draft.send().await.unwrap();
        assert_eq!(status, 200);
        assert_eq!(client.transport().calls(), 1);

        let request = client.transport().last_request().unwrap();
        assert_eq!(request.url, "https://api.engagespot.co/v3/notifications");
        assert_eq!(request.header(headers::CONTENT_TYPE), Some("application/json"));
        assert_eq!(request.header(headers::API_KEY), Some("A"));
        assert_eq!(request.header(headers::API_SECRET), Some("B"));

        let body: serde_json::Value = serde_json::from_slice(&request.body.unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "notification": {
                    "title": "Order shipped",
                    "message": "On its way",
                    "icon": "https://example.com/icon.png"
                },
                "recipients": ["user@example.com"],
                "override": {"channels": ["inApp"]}
            })
        );
    }

    #[tokio::test]
    async fn test_send_minimal_body_omits_unset_fields() {
        let client = client();
        let mut draft = client.new_notification("Ping").unwrap();
        draft.add_recipient("u1").unwrap();
        draft.send().await.unwrap();

        let request = client.transport().last_request().unwrap();
        let body: serde_json::Value = serde_json::from_slice(&request.body.unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"notification": {"title": "Ping"}, "recipients": ["u1"]})
        );
        assert_eq!(draft.to_json().unwrap(), body);
    }

    #[tokio::test]
    async fn test_send_surfaces_transport_failure() {
        let client = Client::with_transport("A", "B", RecordingTransport::failing());
        let mut draft = client.new_notification("Ping").unwrap();
        draft.add_recipient("u1").unwrap();

        let err = draft.send().await.unwrap_err();
        assert!(matches!(err, EngagespotError::Transport(_)));
    }
}
