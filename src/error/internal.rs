use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected input & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Occurs when a webhook identifier is not a valid Discord snowflake.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },
}
