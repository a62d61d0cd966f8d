//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the server-rendered page, its login/logout form targets, and the
//! read-only JSON API under a single Axum router. The stylesheet is served
//! from the configured static directory under `/static`.

pub mod api;
pub mod page;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
#[must_use]
pub fn app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/login", post(page::login))
        .route("/logout", post(page::logout))
        .route("/api/announcements", get(api::list_announcements))
        .route("/api/training", get(api::training_history))
        .route("/healthz", get(healthz))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
