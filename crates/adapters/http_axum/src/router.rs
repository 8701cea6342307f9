//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

use worldstate_app::ports::WorldRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the landing page at `/` straight from `index_file` (a missing file
/// answers `404`), merges the entity and world routes, and includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
///
/// Request bodies longer than `body_limit` bytes are answered with
/// `413 Payload Too Large` without touching the world.
pub fn build<R>(state: AppState<R>, index_file: impl AsRef<Path>, body_limit: usize) -> Router
where
    R: WorldRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route_service("/", ServeFile::new(index_file.as_ref()))
        .merge(crate::api::routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
