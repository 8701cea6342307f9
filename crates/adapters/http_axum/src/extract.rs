//! Lenient JSON body extraction.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, Request};

use worldstate_domain::entity::Entity;

/// Request body read as an [`Entity`].
///
/// Whatever body arrives in full is accepted: invalid JSON, or a JSON value
/// that is not an object, produces an empty entity. The `Content-Type` header
/// is ignored. A body that cannot be read at all, for instance one over the
/// configured size limit, is rejected before any handler runs.
#[derive(Debug)]
pub struct EntityBody(pub Entity);

impl<S> FromRequest<S> for EntityBody
where
    S: Send + Sync,
{
    type Rejection = BytesRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.inspect_err(|rejection| {
            tracing::warn!(error = %rejection, "request body rejected");
        })?;
        Ok(Self(Entity::from_slice(&bytes)))
    }
}
