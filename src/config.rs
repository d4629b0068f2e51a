use url::Url;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_GUIDES_URL: &str = "https://random-dice-web.firebaseio.com/decks_guide.json";

pub struct Config {
    pub guides_url: Url,

    pub webhook_id: Option<String>,
    pub webhook_token: Option<String>,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Webhook credentials are optional here; only the full run requires them.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which returns a variable's value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let guides_url = lookup("DECK_GUIDES_URL").unwrap_or_else(|| DEFAULT_GUIDES_URL.to_string());
        let guides_url = Url::parse(&guides_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "DECK_GUIDES_URL".to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            guides_url,
            webhook_id: lookup("WEBHOOK_ID"),
            webhook_token: lookup("WEBHOOK_TOKEN"),
        })
    }
}
