//! Storage port — repository trait for the world.

use std::future::Future;

use worldstate_domain::entity::Entity;
use worldstate_domain::error::WorldError;
use worldstate_domain::world::World;

/// Repository holding every [`Entity`] of the [`World`].
///
/// Each method is atomic with respect to the others; nothing is guaranteed
/// across calls.
pub trait WorldRepository {
    /// Store `entity` under `name`, discarding any previous attributes.
    fn replace(
        &self,
        name: &str,
        entity: Entity,
    ) -> impl Future<Output = Result<Entity, WorldError>> + Send;

    /// Overlay the attributes of `entity` onto the one stored under `name`,
    /// creating it if absent. Returns the merged entity.
    fn merge(
        &self,
        name: &str,
        entity: Entity,
    ) -> impl Future<Output = Result<Entity, WorldError>> + Send;

    /// Get an entity by name.
    fn get(&self, name: &str) -> impl Future<Output = Result<Option<Entity>, WorldError>> + Send;

    /// Snapshot of the whole world.
    fn get_all(&self) -> impl Future<Output = Result<World, WorldError>> + Send;

    /// Remove every entity, returning how many were removed.
    fn clear(&self) -> impl Future<Output = Result<usize, WorldError>> + Send;
}
