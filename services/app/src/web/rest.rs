//! services/app/src/web/rest.rs
//!
//! Contains the Axum handlers for screens, the session, preferences and
//! favorites, and the master definition for the OpenAPI specification.

use crate::web::assist;
use crate::web::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use smartx_core::{
    domain::SessionKind, ClientError, Language, OnboardingForm, Role, ScreenQuery, SessionError,
    Theme, User,
};
use std::sync::Arc;
use tracing::{error, info};
use utoipa::{IntoParams, OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        screen_handler,
        current_session_handler,
        login_handler,
        logout_handler,
        preferences_handler,
        toggle_theme_handler,
        toggle_language_handler,
        toggle_favorite_handler,
        assist::complete_handler,
        assist::quick_replies_handler,
        assist::insight_handler,
        assist::recommend_handler,
    ),
    components(
        schemas(
            LoginRequest, SessionResponse, PreferencesResponse, FavoriteResponse,
            assist::CompleteRequest, assist::QuickRepliesRequest, assist::InsightRequest,
            assist::RecommendRequest, assist::TextResponse, assist::QuickRepliesResponse,
        )
    ),
    tags(
        (name = "SMARTX Companion API", description = "Device-local view-models, preferences and AI assist for the SMARTX client.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScreenParams {
    /// The requested route, e.g. `/profile` or `/tutor/2`. Defaults to `/`.
    pub path: Option<String>,
    pub search: Option<String>,
    pub subject: Option<String>,
    /// `live` or `recorded`.
    #[param(value_type = Option<String>)]
    pub tab: Option<SessionKind>,
    pub category: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    /// `Student`, `Parent`, `Tutor` or `Institute`. Defaults to `Student`.
    #[schema(value_type = Option<String>)]
    pub role: Option<Role>,
    pub phone: String,
}

#[derive(Serialize, ToSchema)]
pub struct SessionResponse {
    #[schema(value_type = Option<Object>)]
    pub user: Option<User>,
}

#[derive(Serialize, ToSchema)]
pub struct PreferencesResponse {
    #[schema(value_type = String)]
    pub theme: Theme,
    #[schema(value_type = String)]
    pub language: Language,
}

#[derive(Serialize, ToSchema)]
pub struct FavoriteResponse {
    pub tutor_id: String,
    pub favorite: bool,
}

/// Maps core errors onto the HTTP status and message a shell can show.
fn client_error_response(e: ClientError) -> (StatusCode, String) {
    match e {
        ClientError::Onboarding(e) => (StatusCode::BAD_REQUEST, e.to_string()),
        ClientError::Session(
            SessionError::AlreadyAuthenticated | SessionError::NotAuthenticated,
        ) => (StatusCode::CONFLICT, e.to_string()),
        ClientError::Session(SessionError::Port(_)) | ClientError::Port(_) => {
            error!("Preference storage failed: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save preferences".to_string(),
            )
        }
    }
}

//=========================================================================================
// Screen Handler
//=========================================================================================

/// Render the screen for a requested path.
///
/// Signed-out devices always receive the onboarding screen.
#[utoipa::path(
    get,
    path = "/screen",
    params(ScreenParams),
    responses(
        (status = 200, description = "The view-model for the routed screen")
    )
)]
pub async fn screen_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScreenParams>,
) -> impl IntoResponse {
    let path = params.path.unwrap_or_else(|| "/".to_string());
    let query = ScreenQuery {
        search: params.search,
        subject: params.subject,
        tab: params.tab,
        category: params.category,
    };
    Json(state.client.render(&path, &query).await)
}

//=========================================================================================
// Session Handlers
//=========================================================================================

#[utoipa::path(
    get,
    path = "/session",
    responses((status = 200, description = "The signed-in user, if any", body = SessionResponse))
)]
pub async fn current_session_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(SessionResponse {
        user: state.client.sessions().current_user().await,
    })
}

/// POST /session/login - Complete onboarding and start a device session
#[utoipa::path(
    post,
    path = "/session/login",
    request_body = LoginRequest,
    responses(
        (status = 201, description = "Session started", body = SessionResponse),
        (status = 400, description = "Invalid phone number"),
        (status = 409, description = "A user is already signed in")
    )
)]
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let form = OnboardingForm {
        role: req.role.unwrap_or(Role::Student),
        phone: req.phone,
    };
    let user = state
        .client
        .sign_in(&form)
        .await
        .map_err(client_error_response)?;

    info!(user_id = %user.id, "Onboarding completed.");
    Ok((StatusCode::CREATED, Json(SessionResponse { user: Some(user) })))
}

/// POST /session/logout - Sign out and clear the persisted session
#[utoipa::path(
    post,
    path = "/session/logout",
    responses(
        (status = 204, description = "Signed out"),
        (status = 409, description = "No user is signed in")
    )
)]
pub async fn logout_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .client
        .sign_out()
        .await
        .map_err(client_error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

//=========================================================================================
// Preference Handlers
//=========================================================================================

#[utoipa::path(
    get,
    path = "/preferences",
    responses((status = 200, description = "Current theme and language", body = PreferencesResponse))
)]
pub async fn preferences_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let prefs = state.client.preferences().preferences().await;
    Json(PreferencesResponse {
        theme: prefs.theme,
        language: prefs.language,
    })
}

#[utoipa::path(
    post,
    path = "/preferences/theme/toggle",
    responses(
        (status = 200, description = "Theme after the toggle", body = PreferencesResponse),
        (status = 500, description = "Preference could not be saved")
    )
)]
pub async fn toggle_theme_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let theme = state
        .client
        .toggle_theme()
        .await
        .map_err(client_error_response)?;
    let language = state.client.preferences().language().await;
    Ok(Json(PreferencesResponse { theme, language }))
}

#[utoipa::path(
    post,
    path = "/preferences/language/toggle",
    responses(
        (status = 200, description = "Language after the toggle", body = PreferencesResponse),
        (status = 500, description = "Preference could not be saved")
    )
)]
pub async fn toggle_language_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let language = state
        .client
        .toggle_language()
        .await
        .map_err(client_error_response)?;
    let theme = state.client.preferences().theme().await;
    Ok(Json(PreferencesResponse { theme, language }))
}

//=========================================================================================
// Favorites Handler
//=========================================================================================

#[utoipa::path(
    post,
    path = "/favorites/{tutor_id}/toggle",
    params(("tutor_id" = String, Path, description = "The tutor to (un)favorite.")),
    responses(
        (status = 200, description = "Membership after the toggle", body = FavoriteResponse),
        (status = 401, description = "No user is signed in"),
        (status = 500, description = "Favorites could not be saved")
    )
)]
pub async fn toggle_favorite_handler(
    State(state): State<Arc<AppState>>,
    Path(tutor_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let favorite = state
        .client
        .toggle_favorite(&tutor_id)
        .await
        .map_err(client_error_response)?;
    Ok(Json(FavoriteResponse { tutor_id, favorite }))
}
