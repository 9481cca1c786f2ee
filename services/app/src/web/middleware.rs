//! services/app/src/web/middleware.rs
//!
//! Session gate for routes that only exist while someone is signed in.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::debug;

use crate::web::state::AppState;

/// Middleware that requires a locally persisted session.
///
/// If present, inserts the `User` into request extensions for handlers to use.
/// This is a UI gate, not authentication: the session is a client-side claim.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let user = state
        .client
        .sessions()
        .current_user()
        .await
        .ok_or_else(|| {
            debug!(path = %req.uri().path(), "Rejected request without a session.");
            StatusCode::UNAUTHORIZED
        })?;

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
