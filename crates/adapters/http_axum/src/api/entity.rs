//! JSON handlers for a single entity.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use worldstate_app::ports::WorldRepository;
use worldstate_domain::entity::Entity;

use crate::error::ApiError;
use crate::extract::EntityBody;
use crate::state::AppState;

/// Possible responses from the entity endpoints.
pub enum EntityResponse {
    Ok(Json<Entity>),
}

impl IntoResponse for EntityResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /entity/{name}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(name): Path<String>,
) -> Result<EntityResponse, ApiError>
where
    R: WorldRepository + Send + Sync + 'static,
{
    let entity = state.world_service.get_entity(&name).await?;
    Ok(EntityResponse::Ok(Json(entity)))
}

/// `POST /entity/{name}`: replace the entity, respond with what was stored.
pub async fn replace<R>(
    State(state): State<AppState<R>>,
    Path(name): Path<String>,
    EntityBody(body): EntityBody,
) -> Result<EntityResponse, ApiError>
where
    R: WorldRepository + Send + Sync + 'static,
{
    let stored = state.world_service.replace_entity(&name, body).await?;
    Ok(EntityResponse::Ok(Json(stored)))
}

/// `PUT /entity/{name}`: merge into the entity, respond with the request body.
pub async fn merge<R>(
    State(state): State<AppState<R>>,
    Path(name): Path<String>,
    EntityBody(body): EntityBody,
) -> Result<EntityResponse, ApiError>
where
    R: WorldRepository + Send + Sync + 'static,
{
    state
        .world_service
        .merge_into_entity(&name, body.clone())
        .await?;
    Ok(EntityResponse::Ok(Json(body)))
}
