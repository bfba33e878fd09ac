//! Engagespot client library
//!
//! Builds and sends notifications through the Engagespot REST API, and signs
//! user ids with HMAC-SHA256 for `sdk/connect` when HMAC authentication is on.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{EngagespotError, EngagespotResult, TransportError};
pub use external::{OutboundRequest, ReqwestTransport, Transport};
pub use models::NotificationPayload;
pub use services::{Client, NotificationDraft};
pub use utils::signature::{compute_signature, verify_signature};

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
