//! Engagespot API client.
//!
//! Holds the credentials, builds authenticated requests and hands them to a
//! [`Transport`]. Responses come back untouched: a 4xx/5xx is still `Ok` here,
//! only transport failures become errors.

use std::fmt;

use crate::config::{DEFAULT_BASE_URL, EngagespotSettings, HttpSettings};
use crate::error::{EngagespotError, EngagespotResult};
use crate::external::{OutboundRequest, ReqwestTransport, Transport};
use crate::services::notification::NotificationDraft;
use crate::utils::signature::compute_signature;

/// Path of the notification endpoint, relative to the base URL
pub const NOTIFICATIONS_PATH: &str = "notifications";

/// Path of the user-connect endpoint, relative to the base URL
pub const CONNECT_PATH: &str = "sdk/connect";

/// Device type reported when connecting a user on their behalf
pub const DEVICE_TYPE: &str = "ios";

/// Header names used by the Engagespot API
pub mod headers {
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const API_KEY: &str = "X-ENGAGESPOT-API-KEY";
    pub const API_SECRET: &str = "X-ENGAGESPOT-API-SECRET";
    pub const USER_ID: &str = "X-ENGAGESPOT-USER-ID";
    pub const DEVICE_ID: &str = "X-ENGAGESPOT-DEVICE-ID";
    pub const USER_SIGNATURE: &str = "X-ENGAGESPOT-USER-SIGNATURE";
}

/// Client for the Engagespot REST API
///
/// # Example
/// ```ignore
/// let client = Client::new("api-key", "api-secret").enable_hmac();
///
/// let mut draft = client.new_notification("Your order shipped")?;
/// draft
///     .set_message("Track it from your account page")?
///     .add_recipient("user@example.com")?;
/// let response = draft.send().await?;
/// ```
pub struct Client<T = ReqwestTransport> {
    api_key: String,
    api_secret: String,
    hmac_enabled: bool,
    base_url: String,
    transport: T,
}

impl Client<ReqwestTransport> {
    /// Creates a client using the shared reqwest transport
    ///
    /// Credentials are stored verbatim; HMAC signing starts disabled.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self::with_transport(api_key, api_secret, ReqwestTransport::default())
    }

    /// Creates a client from loaded settings
    ///
    /// # Errors
    /// Returns a configuration error if credentials or the base URL are invalid,
    /// or a transport error if the HTTP client cannot be built.
    pub fn from_settings(
        settings: &EngagespotSettings,
        http: &HttpSettings,
    ) -> EngagespotResult<Self> {
        settings.validate()?;
        http.validate()?;

        let transport = ReqwestTransport::from_settings(http)?;
        let client = Self::with_transport(&settings.api_key, &settings.api_secret, transport)
            .with_base_url(&settings.base_url);

        Ok(if settings.enable_hmac {
            client.enable_hmac()
        } else {
            client
        })
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client over any transport
    pub fn with_transport(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        transport: T,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            hmac_enabled: false,
            base_url: DEFAULT_BASE_URL.to_string(),
            transport,
        }
    }

    /// Points the client at another endpoint; a trailing slash is added if missing
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Turns on user signatures for `sdk/connect` calls. Idempotent.
    pub fn enable_hmac(mut self) -> Self {
        self.hmac_enabled = true;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn hmac_enabled(&self) -> bool {
        self.hmac_enabled
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Starts a notification draft bound to this client
    ///
    /// # Errors
    /// Returns a validation error if `title` is empty.
    pub fn new_notification(
        &self,
        title: impl Into<String>,
    ) -> EngagespotResult<NotificationDraft<'_, T>> {
        let title = title.into();
        if title.is_empty() {
            return Err(EngagespotError::validation("title", "empty title string"));
        }
        Ok(NotificationDraft::new(self, title))
    }

    /// Hex HMAC-SHA256 of `user_id`, keyed by the API secret
    pub fn compute_signature(&self, user_id: &str) -> String {
        compute_signature(&self.api_secret, user_id)
    }

    /// Serializes a draft and posts it to the notifications endpoint
    ///
    /// No validation happens here; [`NotificationDraft::send`] checks the
    /// recipient list before delegating.
    pub async fn dispatch(&self, draft: &NotificationDraft<'_, T>) -> EngagespotResult<T::Response> {
        let payload = draft.payload();
        let body = serde_json::to_vec(payload)?;

        tracing::debug!(
            recipients = payload.recipients.len(),
            category = payload.category.as_deref(),
            channels = payload.overrides.channels.len(),
            "Dispatching notification"
        );

        let request = OutboundRequest::post(self.endpoint(NOTIFICATIONS_PATH)).with_body(body);
        self.call(request).await
    }

    /// Activates a user without them logging in first
    ///
    /// Marks the user as active on Engagespot. With HMAC enabled the request
    /// also carries the user signature.
    ///
    /// # Errors
    /// Returns a validation error for an empty user id, otherwise only
    /// transport failures.
    pub async fn connect_user(&self, user_id: &str) -> EngagespotResult<T::Response> {
        if user_id.is_empty() {
            return Err(EngagespotError::validation("user_id", "empty user id string"));
        }

        let mut request = OutboundRequest::post(self.endpoint(CONNECT_PATH))
            .with_header(headers::USER_ID, user_id)
            .with_header(headers::DEVICE_ID, DEVICE_TYPE);

        if self.hmac_enabled {
            request = request.with_header(headers::USER_SIGNATURE, self.compute_signature(user_id));
        }

        tracing::debug!(hmac = self.hmac_enabled, "Connecting user");
        self.call(request).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Adds the credential headers and sends the request once
    async fn call(&self, request: OutboundRequest) -> EngagespotResult<T::Response> {
        let request = request
            .with_header(headers::CONTENT_TYPE, "application/json")
            .with_header(headers::API_KEY, &self.api_key)
            .with_header(headers::API_SECRET, &self.api_secret);

        let url = request.url.clone();
        self.transport.post(request).await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Engagespot request failed");
            EngagespotError::from(e)
        })
    }
}

impl<T> fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("hmac_enabled", &self.hmac_enabled)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
