//! Engagespot client and notification drafts

pub mod client;
pub mod notification;

pub use client::Client;
pub use notification::NotificationDraft;
