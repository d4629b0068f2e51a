use thiserror::Error;

/// Failures while retrieving deck guides from the remote data source.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// The request could not be completed (DNS, connection, TLS, body read).
    #[error("Request to deck guide source failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The data source answered with a non-success status.
    ///
    /// The response body is kept so it can be reported alongside the error message.
    #[error("Deck guide source {url} responded with status {status}")]
    Status {
        /// URL that was requested
        url: String,
        /// HTTP status code returned
        status: u16,
        /// Raw response body, possibly empty
        body: String,
    },

    /// The response body was not valid deck guide JSON.
    #[error("Failed to decode deck guides from {url}: {source}")]
    Decode {
        /// URL that was requested
        url: String,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}
