mod client_error;
mod transport_error;

pub use client_error::{EngagespotError, EngagespotResult};
pub use transport_error::TransportError;
