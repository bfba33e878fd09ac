mod notification;

pub use notification::{ChannelOverride, NotificationContent, NotificationPayload};
