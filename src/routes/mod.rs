//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the note fragments the floating panels load, a
//! landing page listing every note with a pop-out button, a health check,
//! and the static site (stylesheet plus the client WASM bundle under
//! `/static/pkg`).

pub mod posts;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState, site_dir: &Path) -> Router {
    Router::new()
        .route("/", get(posts::index))
        .route("/posts/{slug}/fragment", get(posts::fragment))
        .route("/healthz", get(healthz))
        .nest_service("/static", ServeDir::new(site_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
