use dioxus_logger::tracing;

use crate::{
    error::{config::ConfigError, AppError},
    util::parse::parse_u64_from_string,
};

/// Identifier and secret token addressing a Discord webhook.
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookCredentials {
    /// Webhook snowflake ID.
    pub id: u64,
    /// Secret token from the webhook URL.
    pub token: String,
}

impl WebhookCredentials {
    /// Validates the raw credential values supplied for a full run.
    ///
    /// Every missing credential is logged on its own line before an error is returned, so a
    /// run missing both reports both.
    ///
    /// # Arguments
    /// - `id` - Webhook identifier as supplied on the command line or environment
    /// - `token` - Webhook token as supplied on the command line or environment
    ///
    /// # Returns
    /// - `Ok(WebhookCredentials)` - Both values present and the ID is a valid snowflake
    /// - `Err(AppError::ConfigErr(MissingCredential))` - Either value absent or blank
    /// - `Err(AppError::InternalErr(ParseStringId))` - The ID is not a valid u64
    pub fn from_parts(id: Option<String>, token: Option<String>) -> Result<Self, AppError> {
        let id = id.filter(|value| !value.trim().is_empty());
        let token = token.filter(|value| !value.trim().is_empty());

        if id.is_none() {
            tracing::error!("WEBHOOK_ID missing");
        }
        if token.is_none() {
            tracing::error!("WEBHOOK_TOKEN missing");
        }

        let (Some(id), Some(token)) = (id, token) else {
            return Err(ConfigError::MissingCredential(
                "webhook credentials (WEBHOOK_ID, WEBHOOK_TOKEN)",
            )
            .into());
        };

        Ok(Self {
            id: parse_u64_from_string(id)?,
            token,
        })
    }
}
