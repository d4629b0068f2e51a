use crate::{
    data::deck_guide::{DeckGuideRepository, GuideSource},
    error::{data::DataShapeError, network::NetworkError, AppError},
};
use serde_json::json;
use test_utils::{builder::TestBuilder, context::TestContext, factory, fixture};
use url::Url;

mod fetch_all;

/// Helper function to point a repository at the mock data source
fn repository(test: &TestContext) -> DeckGuideRepository {
    DeckGuideRepository::new(
        reqwest::Client::new(),
        Url::parse(&test.guides_url()).unwrap(),
    )
}
