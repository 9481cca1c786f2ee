//! services/app/src/web/assist.rs
//!
//! Handlers for the AI assist endpoints. Every one of them answers 200: when
//! the generation backend fails, the body carries the fixed fallback text.

use crate::web::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Json},
    Extension,
};
use serde::{Deserialize, Serialize};
use smartx_core::{InsightAction, User};
use std::sync::Arc;
use tracing::debug;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CompleteRequest {
    pub prompt: String,
    /// Optional background the answer should take into account.
    pub context: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct QuickRepliesRequest {
    pub last_message: String,
}

#[derive(Deserialize, ToSchema)]
pub struct InsightRequest {
    /// The conversation as plain `Sender: text` lines.
    pub history: String,
    /// `summarize`, `explain` or `draft`.
    #[schema(value_type = String)]
    pub action: InsightAction,
}

#[derive(Deserialize, ToSchema)]
pub struct RecommendRequest {
    pub preferences: String,
}

#[derive(Serialize, ToSchema)]
pub struct TextResponse {
    pub text: String,
}

#[derive(Serialize, ToSchema)]
pub struct QuickRepliesResponse {
    pub suggestions: Vec<String>,
}

/// POST /assist/complete - General-purpose educational answer
#[utoipa::path(
    post,
    path = "/assist/complete",
    request_body = CompleteRequest,
    responses(
        (status = 200, description = "Generated answer or the fallback text", body = TextResponse),
        (status = 401, description = "No user is signed in")
    )
)]
pub async fn complete_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Json(req): Json<CompleteRequest>,
) -> impl IntoResponse {
    debug!(user_id = %user.id, "Assist completion requested.");
    let text = state
        .client
        .assist()
        .complete(&req.prompt, req.context.as_deref())
        .await;
    Json(TextResponse { text })
}

/// POST /assist/quick-replies - Up to three short reply suggestions
#[utoipa::path(
    post,
    path = "/assist/quick-replies",
    request_body = QuickRepliesRequest,
    responses(
        (status = 200, description = "Suggestions; empty when generation failed", body = QuickRepliesResponse),
        (status = 401, description = "No user is signed in")
    )
)]
pub async fn quick_replies_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QuickRepliesRequest>,
) -> impl IntoResponse {
    let suggestions = state.client.assist().quick_replies(&req.last_message).await;
    Json(QuickRepliesResponse { suggestions })
}

/// POST /assist/insight - Summarize, explain or draft from a chat transcript
#[utoipa::path(
    post,
    path = "/assist/insight",
    request_body = InsightRequest,
    responses(
        (status = 200, description = "Insight text or the fallback text", body = TextResponse),
        (status = 401, description = "No user is signed in")
    )
)]
pub async fn insight_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<InsightRequest>,
) -> impl IntoResponse {
    let text = state
        .client
        .assist()
        .chat_insight(&req.history, req.action)
        .await;
    Json(TextResponse { text })
}

/// POST /assist/recommend - Tutor recommendations from free-text preferences
#[utoipa::path(
    post,
    path = "/assist/recommend",
    request_body = RecommendRequest,
    responses(
        (status = 200, description = "Markdown recommendations or the fallback text", body = TextResponse),
        (status = 401, description = "No user is signed in")
    )
)]
pub async fn recommend_handler(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Json(req): Json<RecommendRequest>,
) -> impl IntoResponse {
    debug!(user_id = %user.id, role = user.role.as_str(), "Tutor recommendations requested.");
    let text = state
        .client
        .assist()
        .recommend_tutors(&req.preferences)
        .await;
    Json(TextResponse { text })
}
