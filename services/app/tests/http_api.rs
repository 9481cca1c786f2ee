use app_lib::{
    config::Config,
    web::{app_router, AppState},
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use smartx_core::{
    assist::{COMPLETE_FALLBACK, INSIGHT_FALLBACK, RECOMMEND_FALLBACK},
    memory::MemoryStore, GenerationRequest, ModelTier, PortError,
    PortResult, SmartxClient, TextGenerationService,
};
use std::sync::Arc;
use tower::ServiceExt;

/// Answers every quick-reply prompt with a fixed list and fails everything else.
struct StubGenerator;

#[async_trait]
impl TextGenerationService for StubGenerator {
    async fn generate(&self, request: GenerationRequest, _tier: ModelTier) -> PortResult<String> {
        if request.content.starts_with("The last message received") {
            Ok("Sounds good, When can we start?, Thanks!".to_string())
        } else {
            Err(PortError::Unexpected("backend offline".to_string()))
        }
    }
}

fn test_app() -> Router {
    let config = Config::from_lookup(|_| None).unwrap();
    let state = Arc::new(AppState {
        client: SmartxClient::new(Arc::new(MemoryStore::new()), Arc::new(StubGenerator)),
        config: Arc::new(config),
    });
    app_router(state).unwrap()
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

#[tokio::test]
async fn anonymous_requests_render_onboarding() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/screen?path=/profile", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["screen"], "onboarding");
    assert!(body["navigation"].is_null());
    assert_eq!(body["path"], "/profile");

    let (status, body) = send(&app, Method::GET, "/session", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["user"].is_null());
}

#[tokio::test]
async fn login_unlocks_role_specific_profile() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/session/login",
        Some(json!({ "role": "Tutor", "phone": "98765 43210" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["role"], "Tutor");
    assert!(body["user"]["id"].as_str().unwrap().starts_with("usr_"));

    let (status, body) = send(&app, Method::GET, "/screen?path=%23/profile/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["screen"], "profile");
    assert_eq!(body["path"], "/profile");
    assert_eq!(body["role"], "Tutor");
    assert_eq!(body["navigation"].as_array().unwrap().len(), 5);

    // A second login without logging out is a conflict.
    let (status, _) = send(
        &app,
        Method::POST,
        "/session/login",
        Some(json!({ "role": "Student", "phone": "9876543210" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, Method::POST, "/session/logout", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, Method::GET, "/screen?path=/", None).await;
    assert_eq!(body["screen"], "onboarding");
}

#[tokio::test]
async fn short_phone_numbers_are_rejected() {
    let app = test_app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/session/login",
        Some(json!({ "phone": "12345" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, Method::GET, "/session", None).await;
    assert!(body["user"].is_null());
}

#[tokio::test]
async fn preference_toggles_work_while_signed_out() {
    let app = test_app();

    let (_, body) = send(&app, Method::GET, "/preferences", None).await;
    assert_eq!(body, json!({ "theme": "light", "language": "en" }));

    let (status, body) = send(&app, Method::POST, "/preferences/theme/toggle", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["theme"], "dark");

    let (_, body) = send(&app, Method::POST, "/preferences/language/toggle", None).await;
    assert_eq!(body, json!({ "theme": "dark", "language": "hi" }));
}

#[tokio::test]
async fn gated_routes_require_a_session() {
    let app = test_app();

    let (status, _) = send(&app, Method::POST, "/favorites/1/toggle", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        Method::POST,
        "/assist/complete",
        Some(json!({ "prompt": "Explain photosynthesis" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn favorites_and_assist_after_login() {
    let app = test_app();
    send(
        &app,
        Method::POST,
        "/session/login",
        Some(json!({ "role": "Student", "phone": "9876543210" })),
    )
    .await;

    let (status, body) = send(&app, Method::POST, "/favorites/2/toggle", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "tutor_id": "2", "favorite": true }));

    let (_, body) = send(&app, Method::POST, "/favorites/2/toggle", None).await;
    assert_eq!(body["favorite"], false);

    let (status, body) = send(
        &app,
        Method::POST,
        "/assist/complete",
        Some(json!({ "prompt": "Explain photosynthesis", "context": "Class 8 biology" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], COMPLETE_FALLBACK);

    let (status, body) = send(
        &app,
        Method::POST,
        "/assist/quick-replies",
        Some(json!({ "last_message": "Can you teach algebra?" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["suggestions"],
        json!(["Sounds good", "When can we start?", "Thanks!"])
    );
}

async fn login(app: &Router, role: &str) {
    let (status, _) = send(
        app,
        Method::POST,
        "/session/login",
        Some(json!({ "role": role, "phone": "9876543210" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn insight_and_recommend_fall_back_when_generation_fails() {
    let app = test_app();
    login(&app, "Parent").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/assist/insight",
        Some(json!({ "history": "Amit Sir: Solve chapter 5", "action": "summarize" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "text": INSIGHT_FALLBACK }));

    let (status, body) = send(
        &app,
        Method::POST,
        "/assist/recommend",
        Some(json!({ "preferences": "Class 10 maths, evenings, under 500/hr" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "text": RECOMMEND_FALLBACK }));
}

#[tokio::test]
async fn directory_variant_follows_the_role() {
    let app = test_app();

    login(&app, "Student").await;
    let (status, body) = send(&app, Method::GET, "/screen?path=/browse&subject=Physics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["screen"], "directory");
    assert_eq!(body["variant"], "mentors");
    assert_eq!(body["selected_subject"], "Physics");
    assert_eq!(body["tutors"][0]["name"], "Rajesh Kumar");
    assert_eq!(body["tutors"][0]["hourly_rate"], 500);

    send(&app, Method::POST, "/session/logout", None).await;
    login(&app, "Tutor").await;
    let (_, body) = send(&app, Method::GET, "/screen?path=/browse", None).await;
    assert_eq!(body["screen"], "directory");
    assert_eq!(body["variant"], "opportunities");
    assert_eq!(body["requests"].as_array().unwrap().len(), 2);
}
