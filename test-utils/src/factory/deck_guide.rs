//! Factory for serving deck guide payloads from the mock data source.

use serde_json::Value;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Path the mock data source serves deck guides on.
pub const DECK_GUIDES_PATH: &str = "/decks_guide.json";

/// Mounts a successful deck guide response.
///
/// # Arguments
/// - `server` - Mock server to mount on
/// - `payload` - JSON body returned for `GET /decks_guide.json`
pub async fn mount_guides(server: &MockServer, payload: Value) {
    mount_response(
        server,
        ResponseTemplate::new(200).set_body_json(payload),
    )
    .await;
}

/// Mounts a failing deck guide response with a plain-text body.
///
/// # Arguments
/// - `server` - Mock server to mount on
/// - `status` - HTTP status code to answer with
/// - `body` - Raw response body
pub async fn mount_failure(server: &MockServer, status: u16, body: &str) {
    mount_response(
        server,
        ResponseTemplate::new(status).set_body_string(body),
    )
    .await;
}

/// Mounts an arbitrary response template for the deck guide path.
pub async fn mount_response(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(DECK_GUIDES_PATH))
        .respond_with(response)
        .mount(server)
        .await;
}
