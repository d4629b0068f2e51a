use dioxus_logger::tracing;
use serde::Deserialize;
use serde_json::Value;
use serenity::async_trait;
use std::collections::HashMap;
use url::Url;

use crate::{
    error::{data::DataShapeError, network::NetworkError, AppError},
    model::deck_guide::RawGuide,
};

/// Source of raw deck guide records.
///
/// Implemented by `DeckGuideRepository` for the live data source; tests substitute their own
/// sources to drive the pipeline without a network.
#[async_trait]
pub trait GuideSource: Send + Sync {
    /// Retrieves every raw guide record.
    async fn fetch_guides(&self) -> Result<Vec<RawGuide>, AppError>;
}

/// Body shapes the data source is known to return.
///
/// Firebase serves collections either as an array (with `null` holes for deleted indices) or
/// as an object keyed by record id. Records stay untyped here so that one malformed record
/// is reported on its own.
#[derive(Deserialize)]
#[serde(untagged)]
enum GuidePayload {
    List(Vec<Value>),
    Keyed(HashMap<String, Value>),
}

impl GuidePayload {
    fn into_guides(self) -> Result<Vec<RawGuide>, DataShapeError> {
        match self {
            Self::List(records) => records
                .iter()
                .enumerate()
                .filter(|(_, value)| !value.is_null())
                .map(|(position, value)| RawGuide::from_record(&position.to_string(), value))
                .collect(),
            Self::Keyed(records) => {
                let mut guides = records
                    .iter()
                    .filter(|(_, value)| !value.is_null())
                    .map(|(key, value)| RawGuide::from_record(key, value))
                    .collect::<Result<Vec<_>, _>>()?;
                guides.sort_by_key(|guide| guide.id);
                Ok(guides)
            }
        }
    }
}

pub struct DeckGuideRepository {
    http: reqwest::Client,
    url: Url,
}

impl DeckGuideRepository {
    pub fn new(http: reqwest::Client, url: Url) -> Self {
        Self { http, url }
    }

    /// Fetches all deck guides from the remote JSON endpoint.
    ///
    /// No retry is attempted; any failure is returned to the caller as-is.
    ///
    /// # Returns
    /// - `Ok(Vec<RawGuide>)` - Records in source order (array body) or ID order (object body)
    /// - `Err(AppError::NetworkErr(Request))` - Connection or transport failure
    /// - `Err(AppError::NetworkErr(Status))` - Non-2xx response, body attached
    /// - `Err(AppError::NetworkErr(Decode))` - Body is not a JSON array or object
    /// - `Err(AppError::DataShapeErr)` - A record lacks `id`, `type` or `title`, or holds a
    ///   field of the wrong shape
    pub async fn fetch_all(&self) -> Result<Vec<RawGuide>, AppError> {
        tracing::debug!("Fetching deck guides from {}", self.url);

        let response = self.http.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NetworkError::Status {
                url: self.url.to_string(),
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let bytes = response.bytes().await?;
        let payload: Option<GuidePayload> =
            serde_json::from_slice(&bytes).map_err(|source| NetworkError::Decode {
                url: self.url.to_string(),
                source,
            })?;

        let guides = match payload {
            Some(payload) => payload.into_guides()?,
            None => Vec::new(),
        };

        tracing::info!("Fetched {} deck guides", guides.len());

        Ok(guides)
    }
}

#[async_trait]
impl GuideSource for DeckGuideRepository {
    async fn fetch_guides(&self) -> Result<Vec<RawGuide>, AppError> {
        self.fetch_all().await
    }
}
