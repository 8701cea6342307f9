//! Shared application state for axum handlers.

use std::sync::Arc;

use worldstate_app::ports::WorldRepository;
use worldstate_app::services::world_service::WorldService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Entity and world operations.
    pub world_service: Arc<WorldService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            world_service: Arc::clone(&self.world_service),
        }
    }
}

impl<R> AppState<R>
where
    R: WorldRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(world_service: WorldService<R>) -> Self {
        Self {
            world_service: Arc::new(world_service),
        }
    }
}
