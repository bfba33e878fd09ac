//! Sign command handler

use crate::config::EngagespotSettings;
use crate::error::EngagespotResult;
use crate::utils::signature::compute_signature;

/// Handler for the sign command
pub struct SignCommandHandler {
    settings: EngagespotSettings,
}

impl SignCommandHandler {
    pub fn new(settings: EngagespotSettings) -> Self {
        Self { settings }
    }

    /// Computes the signature without building a client
    pub fn signature_for(&self, user_id: &str) -> EngagespotResult<String> {
        self.settings.validate_secret()?;
        Ok(compute_signature(&self.settings.api_secret, user_id))
    }

    pub fn execute(&self, user_id: &str) -> EngagespotResult<()> {
        println!("{}", self.signature_for(user_id)?);
        Ok(())
    }
}
