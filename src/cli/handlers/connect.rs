//! Connect command handler

use crate::error::EngagespotResult;
use crate::external::ReqwestTransport;
use crate::services::Client;

use super::print_response;

/// Handler for the connect command
pub struct ConnectCommandHandler {
    client: Client<ReqwestTransport>,
}

impl ConnectCommandHandler {
    pub fn new(client: Client<ReqwestTransport>) -> Self {
        Self { client }
    }

    /// Activates the user and prints the response
    pub async fn execute(&self, user_id: &str) -> EngagespotResult<()> {
        tracing::info!(user_id, hmac = self.client.hmac_enabled(), "Connecting user");
        let response = self.client.connect_user(user_id).await?;
        print_response(response).await
    }
}
