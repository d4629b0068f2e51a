use wiremock::MockServer;

use crate::factory::deck_guide::DECK_GUIDES_PATH;

/// Test context containing the mock data source.
///
/// Provides a running `wiremock` server standing in for the deck guide endpoint. The server
/// shuts down when the context is dropped.
pub struct TestContext {
    /// Mock HTTP server serving deck guide payloads.
    pub server: MockServer,
}

impl TestContext {
    /// Starts a new mock server with no routes mounted.
    ///
    /// # Returns
    /// - New `TestContext` instance
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// URL of the mock deck guide endpoint.
    ///
    /// # Returns
    /// - `String` - Absolute URL ending in `/decks_guide.json`
    pub fn guides_url(&self) -> String {
        format!("{}{}", self.server.uri(), DECK_GUIDES_PATH)
    }

    /// Number of requests the mock server has received so far.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}
