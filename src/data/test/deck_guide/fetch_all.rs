use super::*;

/// Tests fetching an array payload.
///
/// Verifies that records come back in array order with every field decoded.
///
/// Expected: Ok with both guides
#[tokio::test]
async fn fetches_array_payload_in_order() {
    let test = TestBuilder::new()
        .with_guides(json!([
            fixture::deck_guide::raw_builder().id(2).title("Second").build(),
            fixture::deck_guide::raw_builder()
                .id(1)
                .title("First")
                .guide_type("Crew")
                .build(),
        ]))
        .build()
        .await;

    let guides = repository(&test).fetch_all().await.unwrap();

    assert_eq!(guides.len(), 2);
    assert_eq!(guides[0].id, 2);
    assert_eq!(guides[0].title, "Second");
    assert_eq!(guides[0].guide_type, "PvP");
    assert_eq!(guides[0].dice_list, Some(vec![vec![38, 13, 6, 17, 29]]));
    assert_eq!(guides[1].guide_type, "Crew");
}

/// Tests fetching an object payload keyed by ID.
///
/// Verifies that keyed collections are flattened and ordered by numeric ID rather than by
/// key text.
///
/// Expected: Ok with guides sorted by ID
#[tokio::test]
async fn fetches_keyed_payload_sorted_by_id() {
    let test = TestBuilder::new()
        .with_guides(json!({
            "10": fixture::deck_guide::raw_builder().id(10).build(),
            "2": fixture::deck_guide::raw_builder().id(2).build(),
            "9": fixture::deck_guide::raw_builder().id(9).build(),
        }))
        .build()
        .await;

    let guides = repository(&test).fetch_all().await.unwrap();

    let ids: Vec<i64> = guides.iter().map(|guide| guide.id).collect();
    assert_eq!(ids, vec![2, 9, 10]);
}

/// Tests that null holes in an array payload are skipped.
///
/// Expected: Ok with only the present records
#[tokio::test]
async fn skips_null_entries() {
    let test = TestBuilder::new()
        .with_guides(json!([null, fixture::deck_guide::raw(), null]))
        .build()
        .await;

    let guides = repository(&test).fetch_all().await.unwrap();

    assert_eq!(guides.len(), 1);
}

/// Tests that a null body is treated as an empty collection.
///
/// Expected: Ok with no guides
#[tokio::test]
async fn null_body_yields_no_guides() {
    let test = TestBuilder::new().with_guides(json!(null)).build().await;

    let guides = repository(&test).fetch_all().await.unwrap();

    assert!(guides.is_empty());
}

/// Tests that the legacy `name` key is accepted for the title.
///
/// Expected: Ok with title read from `name`
#[tokio::test]
async fn accepts_legacy_name_key() {
    let test = TestBuilder::new()
        .with_guides(json!([{
            "id": 3,
            "type": "Co-op/PvE",
            "name": "Legacy Guide",
            "diceList": [[-1]],
            "guide": "<p>old</p>",
        }]))
        .build()
        .await;

    let guides = repository(&test).fetch_all().await.unwrap();

    assert_eq!(guides[0].title, "Legacy Guide");
    assert_eq!(guides[0].guide_type, "Co-op/PvE");
}

/// Tests that records missing optional-at-decode fields still decode.
///
/// Validation of `diceList` and `guide` belongs to the transformer, so the fetch must not
/// reject them.
///
/// Expected: Ok with the fields set to None
#[tokio::test]
async fn decodes_records_missing_dice_and_guide() {
    let test = TestBuilder::new()
        .with_guides(json!([fixture::deck_guide::raw_builder()
            .without_dice_list()
            .without_guide()
            .build()]))
        .build()
        .await;

    let guides = repository(&test).fetch_all().await.unwrap();

    assert_eq!(guides[0].dice_list, None);
    assert_eq!(guides[0].guide, None);
}

/// Tests that a non-success status is reported with its body.
///
/// Expected: Err(NetworkError::Status) carrying status and body
#[tokio::test]
async fn reports_status_failure_with_body() {
    let test = TestBuilder::new()
        .with_failure(503, "service unavailable")
        .build()
        .await;

    let result = repository(&test).fetch_all().await;

    match result {
        Err(err @ AppError::NetworkErr(NetworkError::Status { status: 503, .. })) => {
            assert_eq!(err.response_body().as_deref(), Some("service unavailable"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

/// Tests that an empty failure body is not reported as response detail.
///
/// Expected: Err(NetworkError::Status) with no response body
#[tokio::test]
async fn omits_empty_failure_body() {
    let test = TestContext::new().await;
    factory::deck_guide::mount_failure(&test.server, 500, "").await;

    let err = repository(&test).fetch_all().await.unwrap_err();

    assert!(matches!(
        err,
        AppError::NetworkErr(NetworkError::Status { status: 500, .. })
    ));
    assert_eq!(err.response_body(), None);
}

/// Tests that a missing route surfaces as a status failure.
///
/// Expected: Err(NetworkError::Status) with 404
#[tokio::test]
async fn reports_not_found() {
    let test = TestBuilder::new().build().await;

    let result = repository(&test).fetch_all().await;

    assert!(matches!(
        result,
        Err(AppError::NetworkErr(NetworkError::Status { status: 404, .. }))
    ));
}

/// Tests that a body which is not a guide collection fails to decode.
///
/// Expected: Err(NetworkError::Decode)
#[tokio::test]
async fn reports_malformed_body() {
    let test = TestBuilder::new()
        .with_malformed_body("{\"1\": {\"id\": 1,")
        .build()
        .await;

    let result = repository(&test).fetch_all().await;

    assert!(matches!(
        result,
        Err(AppError::NetworkErr(NetworkError::Decode { .. }))
    ));
}

/// Tests that a JSON body which is neither an array nor an object fails to decode.
///
/// Expected: Err(NetworkError::Decode)
#[tokio::test]
async fn reports_scalar_body() {
    let test = TestBuilder::new().with_guides(json!(42)).build().await;

    let result = repository(&test).fetch_all().await;

    assert!(matches!(
        result,
        Err(AppError::NetworkErr(NetworkError::Decode { .. }))
    ));
}

/// Tests that an unfamiliar game mode does not affect its neighbours.
///
/// Expected: Ok with both guides, the type kept as served
#[tokio::test]
async fn keeps_records_with_unfamiliar_type() {
    let test = TestBuilder::new()
        .with_guides(json!([
            fixture::deck_guide::raw(),
            fixture::deck_guide::raw_builder().id(2).guide_type("Arena").build(),
        ]))
        .build()
        .await;

    let guides = repository(&test).fetch_all().await.unwrap();

    assert_eq!(guides.len(), 2);
    assert_eq!(guides[0].id, 1);
    assert_eq!(guides[1].guide_type, "Arena");
}

/// Tests that a malformed record among good ones is reported by ID and field.
///
/// Expected: Err(DataShapeError::InvalidField) naming guide 2 and `diceList`
#[tokio::test]
async fn reports_malformed_record_by_id() {
    let mut bad = fixture::deck_guide::raw_builder().id(2).build();
    bad["diceList"] = json!("38,13");
    let test = TestBuilder::new()
        .with_guides(json!([fixture::deck_guide::raw(), bad]))
        .build()
        .await;

    let result = repository(&test).fetch_all().await;

    assert!(matches!(
        result,
        Err(AppError::DataShapeErr(DataShapeError::InvalidField {
            guide_id: 2,
            field: "diceList",
            ..
        }))
    ));
}

/// Tests that a record without an ID is reported by its key.
///
/// Expected: Err(DataShapeError::MissingId) naming the key
#[tokio::test]
async fn reports_record_without_id_by_key() {
    let test = TestBuilder::new()
        .with_guides(json!({
            "1": fixture::deck_guide::raw(),
            "orphan": { "id": "not a number" },
        }))
        .build()
        .await;

    let result = repository(&test).fetch_all().await;

    assert_eq!(
        result.unwrap_err().to_string(),
        "Deck guide record orphan has no integer 'id'"
    );
}

/// Tests that an unreachable source is reported as a request failure.
///
/// Expected: Err(NetworkError::Request)
#[tokio::test]
async fn reports_connection_failure() {
    let repo = DeckGuideRepository::new(
        reqwest::Client::new(),
        Url::parse("http://127.0.0.1:1/decks_guide.json").unwrap(),
    );

    let result = repo.fetch_all().await;

    assert!(matches!(
        result,
        Err(AppError::NetworkErr(NetworkError::Request(_)))
    ));
}

/// Tests the `GuideSource` implementation delegates to `fetch_all`.
///
/// Expected: Ok with every guide served, one request made
#[tokio::test]
async fn guide_source_fetches_from_repository() {
    let test = TestContext::new().await;
    factory::deck_guide::mount_guides(&test.server, factory::helpers::guide_map(3)).await;

    let guides = repository(&test).fetch_guides().await.unwrap();

    assert_eq!(guides.len(), 3);
    assert_eq!(test.request_count().await, 1);
}
