use serenity::http::Http;
use std::sync::Arc;

use crate::{config::Config, data::deck_guide::DeckGuideRepository, error::AppError};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client used to read the deck guide data source.
///
/// Redirects are disabled; the data source is a fixed endpoint and anything else it answers
/// with is treated as a failed fetch.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::NetworkErr)` - The TLS backend could not be initialised
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the deck guide repository for the configured data source.
pub fn setup_guide_repository(config: &Config) -> Result<DeckGuideRepository, AppError> {
    Ok(DeckGuideRepository::new(
        setup_reqwest_client()?,
        config.guides_url.clone(),
    ))
}

/// Builds the Discord HTTP client used for webhook delivery.
///
/// Webhook endpoints authenticate through the token in their path, so no bot token is set.
pub fn setup_discord_http() -> Arc<Http> {
    Arc::new(Http::new(""))
}
