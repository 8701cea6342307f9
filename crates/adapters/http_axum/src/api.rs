//! JSON route handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod entity;
#[allow(clippy::missing_errors_doc)]
pub mod world;

use axum::Router;
use axum::routing::get;

use worldstate_app::ports::WorldRepository;

use crate::state::AppState;

/// Build the entity and world sub-router.
///
/// `/world` and `/clear` answer both `GET` and `POST` identically.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: WorldRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/entity/{name}",
            get(entity::get::<R>)
                .post(entity::replace::<R>)
                .put(entity::merge::<R>),
        )
        .route("/world", get(world::get::<R>).post(world::get::<R>))
        .route("/clear", get(world::clear::<R>).post(world::clear::<R>))
}
