//! Error types for the deck guide pipeline.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors. Pipeline stages propagate it upward
//! unmodified; only the runner inspects it to decide what to log and which exit status to use.

pub mod config;
pub mod data;
pub mod internal;
pub mod network;

use thiserror::Error;

use crate::error::{
    config::ConfigError, data::DataShapeError, internal::InternalError, network::NetworkError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur while fetching, transforming, rendering
/// and delivering deck guides. Most variants use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error, including missing webhook credentials.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Failure talking to the deck guide data source.
    #[error(transparent)]
    NetworkErr(#[from] NetworkError),

    /// A raw guide record is missing a required field.
    #[error(transparent)]
    DataShapeErr(#[from] DataShapeError),

    /// Discord API error from Serenity while delivering a card.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Internal issue such as an unparseable webhook identifier.
    #[error(transparent)]
    InternalErr(#[from] InternalError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

/// Manual conversion from reqwest::Error so `?` works directly on HTTP calls.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::NetworkErr(NetworkError::Request(err))
    }
}

impl AppError {
    /// Returns the response body attached to the error, if the remote end sent one.
    ///
    /// For a failed fetch this is the raw body of the non-2xx response. For a failed webhook
    /// delivery it is the message from Discord's JSON error payload.
    ///
    /// # Returns
    /// - `Some(String)` - Response detail reported by the remote service
    /// - `None` - The error carries no response body
    pub fn response_body(&self) -> Option<String> {
        match self {
            Self::NetworkErr(NetworkError::Status { body, .. }) if !body.is_empty() => {
                Some(body.clone())
            }
            Self::DiscordErr(err) => match err.as_ref() {
                serenity::Error::Http(serenity::http::HttpError::UnsuccessfulRequest(response)) => {
                    Some(response.error.message.clone())
                }
                _ => None,
            },
            _ => None,
        }
    }
}
