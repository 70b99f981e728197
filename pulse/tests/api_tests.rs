mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use pulse::api::{create_router, AppState};
use pulse::classifier::ClassifierProvider;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{test_config, PNG_BYTES};

struct TestApp {
    router: Router,
}

impl TestApp {
    fn new() -> Self {
        let config = test_config();
        let classifier = ClassifierProvider::new(&config.classifier);
        Self {
            router: create_router(AppState::new(config, classifier)),
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn call(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.call(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.call(Method::POST, uri, body).await
    }

    /// Creates a session and walks it through onboarding to mood capture.
    async fn onboarded_session(&self) -> String {
        let (status, json) = self.post("/api/v1/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = json["data"]["id"].as_str().unwrap().to_string();
        let base = format!("/api/v1/sessions/{id}");

        let (status, json) = self.post(&format!("{base}/start"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["view"], "onboarding");

        let (status, json) = self
            .call(
                Method::PATCH,
                &format!("{base}/onboarding"),
                Some(json!({
                    "name": "Riley",
                    "age": 34,
                    "gender": "female",
                    "occupation": "Engineer",
                    "workSchedule": "flexible",
                    "productivityGoals": ["improve-focus", "manage-stress"],
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["stepValid"], true);
        assert_eq!(json["data"]["cycleTrackingVisible"], true);

        for _ in 0..4 {
            let (status, json) = self.post(&format!("{base}/onboarding/next"), None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(json["data"]["moved"], true);
        }

        let (status, json) = self.post(&format!("{base}/onboarding/finish"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["displayName"], "Riley");

        id
    }
}

#[tokio::test]
async fn full_session_flow() {
    let app = TestApp::new();
    let id = app.onboarded_session().await;
    let base = format!("/api/v1/sessions/{id}");

    let (_, json) = app.get(&base).await;
    assert_eq!(json["data"]["view"], "mood-capture");
    assert_eq!(json["data"]["navigationVisible"], true);

    let (status, json) = app.get(&format!("{base}/profile")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["occupation"], "Engineer");

    // Detect from an image, then accept.
    let (status, json) = app
        .send(
            Request::builder()
                .method("POST")
                .uri(format!("{base}/mood/analyze"))
                .header("content-type", "application/octet-stream")
                .body(Body::from(PNG_BYTES))
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["result"]["isFallback"], false);
    assert!(!json["data"]["tips"].as_array().unwrap().is_empty());
    let detected = json["data"]["result"]["emotion"].clone();

    let (status, json) = app.post(&format!("{base}/mood/accept"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["view"], "tasks");
    assert_eq!(json["data"]["mood"], detected);

    // Back to the grid and pick one by hand.
    let (status, _) = app
        .post(
            &format!("{base}/navigate"),
            Some(json!({"view": "mood-capture"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, json) = app
        .post(&format!("{base}/mood/select"), Some(json!({"mood": "focused"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["capture"]["selected"], "focused");
    let (status, json) = app
        .post(&format!("{base}/mood"), Some(json!({"mood": "focused"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["view"], "tasks");

    // Tasks come back in the focused order.
    let mut ids = Vec::new();
    for (title, importance, category) in [
        ("email", 1, "work"),
        ("plan", 4, "personal"),
        ("deploy", 2, "work"),
    ] {
        let (status, json) = app
            .post(
                &format!("{base}/tasks"),
                Some(json!({"title": title, "importance": importance, "category": category})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(json["data"]["id"].as_str().unwrap().to_string());
    }

    let (_, json) = app.get(&format!("{base}/tasks")).await;
    let titles: Vec<&str> = json["data"]["recommended"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["email", "deploy", "plan"]);
    assert_eq!(json["meta"]["total"], 3);

    let (status, json) = app
        .post(&format!("{base}/tasks/{}/toggle", ids[0]), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["completed"], true);

    let (status, _) = app
        .call(Method::DELETE, &format!("{base}/tasks/{}", ids[1]), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = app.get(&format!("{base}/tasks")).await;
    assert_eq!(json["data"]["recommended"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["completed"][0]["title"], "email");
    assert_eq!(json["meta"]["total"], 2);

    // Daily plan ticks survive until a refresh.
    let (status, json) = app
        .post(&format!("{base}/suggestions/tasks/4/toggle"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["completed"], true);
    let (status, _) = app
        .post(&format!("{base}/suggestions/nudges/0/toggle"), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = app.get(&format!("{base}/suggestions")).await;
    assert_eq!(json["data"]["mood"], "focused");
    assert_eq!(json["data"]["tasks"][3]["completed"], true);
    assert_eq!(json["data"]["nudges"][0]["completed"], true);

    let (status, json) = app.post(&format!("{base}/suggestions/refresh"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["refreshing"], false);
    assert_eq!(json["data"]["tasks"][3]["completed"], false);
    assert_eq!(json["data"]["nudges"][0]["completed"], false);

    // Companion side channel changes the mood but not the view.
    let (status, json) = app
        .post(&format!("{base}/companion"), Some(json!({"mood": "sad"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["mood"], "sad");

    let (_, json) = app.get(&format!("{base}/insights")).await;
    assert_eq!(json["data"]["mood"]["key"], "sad");
    let (_, json) = app.get(&base).await;
    assert_eq!(json["data"]["view"], "tasks");
    assert_eq!(json["data"]["mood"], "sad");

    let (status, json) = app.call(Method::DELETE, &base, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["discardedTasks"], 2);

    let (status, json) = app.get(&base).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn onboarding_rejects_bad_input_with_envelope() {
    let app = TestApp::new();
    let (_, json) = app.post("/api/v1/sessions", None).await;
    let base = format!("/api/v1/sessions/{}", json["data"]["id"].as_str().unwrap());

    // Wizard edits are only accepted on the onboarding view.
    let (status, json) = app
        .call(
            Method::PATCH,
            &format!("{base}/onboarding"),
            Some(json!({"name": "Riley"})),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "conflict");

    app.post(&format!("{base}/start"), None).await;

    let (status, json) = app
        .call(
            Method::PATCH,
            &format!("{base}/onboarding"),
            Some(json!({"stressLevel": 11})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "invalid_request");

    let (status, json) = app.post(&format!("{base}/onboarding/next"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["moved"], false);
    assert_eq!(json["data"]["step"], "basic-info");

    let (status, _) = app.post(&format!("{base}/onboarding/finish"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app.get(&format!("{base}/profile")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn lateral_navigation_requires_onboarding() {
    let app = TestApp::new();
    let (_, json) = app.post("/api/v1/sessions", None).await;
    let base = format!("/api/v1/sessions/{}", json["data"]["id"].as_str().unwrap());
    app.post(&format!("{base}/start"), None).await;

    let (status, _) = app
        .post(&format!("{base}/navigate"), Some(json!({"view": "insights"})))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .post(&format!("{base}/companion"), Some(json!({"mood": "sad"})))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, json) = app.get(&base).await;
    assert_eq!(json["data"]["view"], "onboarding");
    assert_eq!(json["data"]["mood"], "neutral");
}

#[tokio::test]
async fn non_image_upload_falls_back() {
    let app = TestApp::new();
    let id = app.onboarded_session().await;
    let base = format!("/api/v1/sessions/{id}");

    let (status, json) = app
        .send(
            Request::builder()
                .method("POST")
                .uri(format!("{base}/mood/analyze"))
                .header("content-type", "application/octet-stream")
                .body(Body::from("plain text"))
                .unwrap(),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["result"]["isFallback"], true);
    assert_eq!(json["data"]["result"]["emotion"], "happy");
    assert_eq!(json["data"]["result"]["color"], "#FFD700");
}

#[tokio::test]
async fn unknown_suggestion_ids_are_not_found() {
    let app = TestApp::new();
    let (_, json) = app.post("/api/v1/sessions", None).await;
    let base = format!("/api/v1/sessions/{}", json["data"]["id"].as_str().unwrap());

    let (status, _) = app
        .post(&format!("{base}/suggestions/tasks/9/toggle"), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .post(&format!("{base}/suggestions/nudges/4/toggle"), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
