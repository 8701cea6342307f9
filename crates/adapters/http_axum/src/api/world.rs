//! JSON handlers for the whole world.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use worldstate_app::ports::WorldRepository;
use worldstate_domain::world::World;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the world endpoints.
pub enum WorldResponse {
    Ok(Json<World>),
}

impl IntoResponse for WorldResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /world`, `POST /world`
pub async fn get<R>(State(state): State<AppState<R>>) -> Result<WorldResponse, ApiError>
where
    R: WorldRepository + Send + Sync + 'static,
{
    let world = state.world_service.get_world().await?;
    Ok(WorldResponse::Ok(Json(world)))
}

/// `GET /clear`, `POST /clear`: empty the world and return it.
pub async fn clear<R>(State(state): State<AppState<R>>) -> Result<WorldResponse, ApiError>
where
    R: WorldRepository + Send + Sync + 'static,
{
    let world = state.world_service.clear_world().await?;
    Ok(WorldResponse::Ok(Json(world)))
}
