mod common;

use common::harness::{TestServerConfig, spawn_test_server};
use common::http_client::{TestClient, TestClientError};
use serde_json::json;

const TWIST: &str =
    "The protagonist had been dead all along and every scene the audience watched was a \
     memory replayed by the ghost he had become";

#[tokio::test]
async fn test_health_reports_stub_mode() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .unwrap();
    let client = TestClient::new(server.url());

    let health = client.health().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.embedder_mode, "stub");
    assert!(!health.models_loaded);

    server.shutdown().await;
}

#[tokio::test]
async fn test_identical_guess_scores_top() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .unwrap();
    let client = TestClient::new(server.url());

    let result = client
        .score(json!({
            "guess": TWIST,
            "reference": TWIST,
            "guess_tags": ["ghost"],
            "reference_tags": ["Ghost"],
        }))
        .await
        .unwrap();

    assert!(result.score >= 95, "score was {}", result.score);
    assert!(result.confidence > 0.7);
    assert_eq!(result.breakdown.lexical_overlap, 1.0);
    assert_eq!(result.breakdown.tag_match, 1.0);
    assert!(result.justification.starts_with("Excellent match!"));
}

#[tokio::test]
async fn test_score_accepts_legacy_field_name() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .unwrap();
    let client = TestClient::new(server.url());

    let result = client
        .score(json!({
            "guess": "The detective was the killer",
            "actual_twist": "The detective committed the murder",
        }))
        .await
        .unwrap();

    assert!(
        result
            .breakdown
            .shared_tokens
            .contains(&"detective".to_string())
    );
    assert_eq!(result.breakdown.missing_tokens, vec!["committed", "murder"]);
    assert_eq!(result.breakdown.tag_match, 0.5);
}

#[tokio::test]
async fn test_score_rejects_object_guess() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .unwrap();
    let client = TestClient::new(server.url());

    let err = client
        .score(json!({ "guess": { "text": "x" }, "reference": TWIST }))
        .await
        .unwrap_err();

    assert!(matches!(err, TestClientError::BadRequest(_)));
}

#[tokio::test]
async fn test_unavailable_embedder_never_returns_a_score() {
    let server = spawn_test_server(TestServerConfig::unavailable("model missing"))
        .await
        .unwrap();
    let client = TestClient::new(server.url());

    let health = client.health().await.unwrap();
    assert_eq!(health.embedder_mode, "unavailable");

    let err = client
        .score(json!({ "guess": TWIST, "reference": TWIST }))
        .await
        .unwrap_err();
    match err {
        TestClientError::Unavailable(body) => assert!(body.contains("model missing")),
        other => panic!("expected 503, got {other:?}"),
    }

    let err = client
        .semantic_score(json!({ "guess": TWIST, "actual_twist": TWIST }))
        .await
        .unwrap_err();
    assert!(matches!(err, TestClientError::Unavailable(_)));
}

#[tokio::test]
async fn test_missing_model_dir_keeps_server_up() {
    let server = spawn_test_server(TestServerConfig::model_dir("/nonexistent/twist/minilm"))
        .await
        .unwrap();
    let client = TestClient::new(server.url());

    let health = client.health().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.embedder_mode, "unavailable");
    assert!(!health.models_loaded);

    let err = client
        .score(json!({ "guess": TWIST, "reference": TWIST }))
        .await
        .unwrap_err();
    match err {
        TestClientError::Unavailable(body) => {
            assert!(body.contains("/nonexistent/twist/minilm"), "body: {body}")
        }
        other => panic!("expected 503, got {other:?}"),
    }

    server.shutdown().await;
}

#[tokio::test]
async fn test_semantic_score_identical_is_excellent() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .unwrap();
    let client = TestClient::new(server.url());

    let response = client
        .semantic_score(json!({ "guess": TWIST, "actual_twist": TWIST }))
        .await
        .unwrap();

    assert!(response.score > 99.9);
    assert!(response.justification.starts_with("Excellent!"));
    assert_eq!(response.similarity_breakdown.guess_length, 23);
    assert_eq!(response.similarity_breakdown.actual_length, 23);
}

#[tokio::test]
async fn test_concurrent_requests_agree() {
    let server = spawn_test_server(TestServerConfig::default())
        .await
        .unwrap();
    let url = server.url();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = TestClient::new(url.clone());
            tokio::spawn(async move {
                client
                    .score(json!({
                        "guess": "The servant killed the victim",
                        "reference": "The butler committed the murder",
                    }))
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }

    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
}
