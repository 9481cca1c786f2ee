pub mod assist;
pub mod middleware;
pub mod rest;
pub mod state;

pub use middleware::require_session;
pub use state::AppState;

use crate::config::ConfigError;
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the full HTTP surface: public screen/session/preference routes, the
/// session-gated favorites and assist routes, and the Swagger UI.
pub fn app_router(state: Arc<AppState>) -> Result<Router, ConfigError> {
    let origin = state
        .config
        .cors_origin
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidValue("CORS_ORIGIN".to_string(), e.to_string()))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    // Public routes (no session required)
    let public_routes = Router::new()
        .route("/screen", get(rest::screen_handler))
        .route("/session", get(rest::current_session_handler))
        .route("/session/login", post(rest::login_handler))
        .route("/session/logout", post(rest::logout_handler))
        .route("/preferences", get(rest::preferences_handler))
        .route("/preferences/theme/toggle", post(rest::toggle_theme_handler))
        .route(
            "/preferences/language/toggle",
            post(rest::toggle_language_handler),
        );

    // Session-gated routes
    let protected_routes = Router::new()
        .route(
            "/favorites/{tutor_id}/toggle",
            post(rest::toggle_favorite_handler),
        )
        .route("/assist/complete", post(assist::complete_handler))
        .route("/assist/quick-replies", post(assist::quick_replies_handler))
        .route("/assist/insight", post(assist::insight_handler))
        .route("/assist/recommend", post(assist::recommend_handler))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    let api_router = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", rest::ApiDoc::openapi())))
}
