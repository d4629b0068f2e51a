use serde_json::Value;
use wiremock::ResponseTemplate;

use crate::{context::TestContext, factory};

/// Builder for creating test contexts with a configured mock data source.
///
/// Provides a fluent interface for choosing what the deck guide endpoint answers, then
/// call `build()` to start the server and mount the response.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, fixture};
///
/// let test = TestBuilder::new()
///     .with_guides(serde_json::json!([fixture::deck_guide::raw()]))
///     .build()
///     .await;
///
/// let url = test.guides_url();
/// ```
pub struct TestBuilder {
    /// Response returned for `GET /decks_guide.json`, if any.
    ///
    /// When unset the mock server answers 404 for every request.
    response: Option<ResponseTemplate>,
}

impl TestBuilder {
    /// Creates a new test builder with no response configured.
    pub fn new() -> Self {
        Self { response: None }
    }

    /// Serves `payload` with status 200.
    ///
    /// # Arguments
    /// - `payload` - JSON body for the deck guide endpoint
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_guides(mut self, payload: Value) -> Self {
        self.response = Some(ResponseTemplate::new(200).set_body_json(payload));
        self
    }

    /// Serves a failing response with a plain-text body.
    ///
    /// # Arguments
    /// - `status` - HTTP status code
    /// - `body` - Response body
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_failure(mut self, status: u16, body: &str) -> Self {
        self.response = Some(ResponseTemplate::new(status).set_body_string(body));
        self
    }

    /// Serves a 200 response whose body is not valid JSON for a guide collection.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_malformed_body(mut self, body: &str) -> Self {
        self.response = Some(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string(body),
        );
        self
    }

    /// Starts the mock server and mounts the configured response.
    ///
    /// # Returns
    /// - `TestContext` - Context owning the running mock server
    pub async fn build(self) -> TestContext {
        let test = TestContext::new().await;

        if let Some(response) = self.response {
            factory::deck_guide::mount_response(&test.server, response).await;
        }

        test
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
