//! In-memory implementation of [`WorldRepository`].

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use worldstate_app::ports::WorldRepository;
use worldstate_domain::entity::Entity;
use worldstate_domain::error::WorldError;
use worldstate_domain::world::World;

use crate::error::StorageError;

/// World repository living entirely in process memory.
///
/// Every operation takes the lock once and releases it before returning, so
/// single operations are atomic but sequences of them are not.
#[derive(Default)]
pub struct InMemoryWorldRepository {
    world: RwLock<World>,
}

impl InMemoryWorldRepository {
    /// Create a repository holding an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, World>, StorageError> {
        Ok(self.world.read()?)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, World>, StorageError> {
        Ok(self.world.write()?)
    }
}

impl WorldRepository for InMemoryWorldRepository {
    async fn replace(&self, name: &str, entity: Entity) -> Result<Entity, WorldError> {
        self.write()?.replace(name, entity.clone());
        Ok(entity)
    }

    async fn merge(&self, name: &str, entity: Entity) -> Result<Entity, WorldError> {
        let merged = self.write()?.merge(name, entity).clone();
        Ok(merged)
    }

    async fn get(&self, name: &str) -> Result<Option<Entity>, WorldError> {
        let found = self.read()?.get(name).cloned();
        Ok(found)
    }

    async fn get_all(&self) -> Result<World, WorldError> {
        let world = self.read()?.clone();
        Ok(world)
    }

    async fn clear(&self) -> Result<usize, WorldError> {
        let removed = self.write()?.clear();
        Ok(removed)
    }
}
