mod common;

use std::sync::Arc;
use std::time::Duration;

use pulse::classifier::{ApiClassifier, ClassifierProvider, EmotionClassifier, MockClassifier};
use pulse::config::ClassifierConfig;
use pulse::error::PulseError;
use pulse::models::{EmotionResult, Mood};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::PNG_BYTES;

fn api_config(server: &MockServer) -> ClassifierConfig {
    ClassifierConfig {
        model: "api/emoset".to_string(),
        base_url: Some(server.uri()),
        api_key: Some("test-key".to_string()),
        timeout_secs: 5,
        max_retries: 3,
        ..Default::default()
    }
}

#[tokio::test]
async fn api_classifier_translates_labels() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/classify"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"label": "sadness", "confidence": 0.77})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let classifier = ApiClassifier::new(&api_config(&server), "emoset").unwrap();
    let result = classifier.classify(PNG_BYTES).await.unwrap();

    assert_eq!(result.emotion, Mood::Sad);
    assert!((result.confidence - 0.77).abs() < f32::EPSILON);
    assert_eq!(result.color, "#4169E1");
}

#[tokio::test]
async fn api_classifier_clamps_confidence() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"label": "focus", "confidence": 1.7})),
        )
        .mount(&server)
        .await;

    let classifier = ApiClassifier::new(&api_config(&server), "emoset").unwrap();
    let result = classifier.classify(PNG_BYTES).await.unwrap();

    assert_eq!(result.emotion, Mood::Focused);
    assert_eq!(result.confidence, 1.0);
}

#[tokio::test]
async fn zero_confidence_happy_is_still_a_real_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"label": "joy", "confidence": 0.0})),
        )
        .mount(&server)
        .await;

    let provider = ClassifierProvider::new(&api_config(&server));
    let result = provider.analyze(PNG_BYTES).await;

    assert_eq!(result.emotion, Mood::Happy);
    assert_eq!(result.confidence, 0.0);
    assert!(!result.is_fallback());
}

#[tokio::test]
async fn api_classifier_reports_undecodable_bodies_as_http_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let classifier = ApiClassifier::new(&api_config(&server), "emoset").unwrap();
    let err = classifier.classify(PNG_BYTES).await.unwrap_err();

    assert!(matches!(err, PulseError::Http(_)), "got {err:?}");
}

#[tokio::test]
async fn api_classifier_retries_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"label": "calm", "confidence": 0.9})),
        )
        .mount(&server)
        .await;

    let classifier = ApiClassifier::new(&api_config(&server), "emoset").unwrap();
    let result = classifier.classify(PNG_BYTES).await.unwrap();

    assert_eq!(result.emotion, Mood::Calm);
}

#[tokio::test]
async fn api_classifier_gives_up_on_client_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad image"))
        .expect(1)
        .mount(&server)
        .await;

    let classifier = ApiClassifier::new(&api_config(&server), "emoset").unwrap();
    assert!(classifier.classify(PNG_BYTES).await.is_err());
}

#[tokio::test]
async fn provider_falls_back_when_upstream_keeps_failing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let provider = ClassifierProvider::new(&api_config(&server));
    assert!(provider.is_available());
    assert_eq!(provider.backend_name(), "emoset");

    let result = provider.analyze(PNG_BYTES).await;
    assert_eq!(result, EmotionResult::fallback());
    assert_eq!(result.emotion, Mood::Happy);
    assert_eq!(result.color, "#FFD700");
}

#[tokio::test]
async fn provider_does_not_call_upstream_for_non_images() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let provider = ClassifierProvider::new(&api_config(&server));
    assert!(provider.analyze(b"definitely not an image").await.is_fallback());
}

#[tokio::test]
async fn injected_classifier_is_used_as_is() {
    let provider = ClassifierProvider::with_classifier(
        Arc::new(MockClassifier::new(Duration::ZERO)),
        Duration::from_secs(1),
    );
    let result = provider.analyze(PNG_BYTES).await;

    assert!(!result.is_fallback());
    assert!((0.85..1.0).contains(&result.confidence));
}
