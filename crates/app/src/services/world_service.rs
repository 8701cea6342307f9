//! World service — use-cases for reading and writing entities.

use worldstate_domain::entity::Entity;
use worldstate_domain::error::WorldError;
use worldstate_domain::world::World;

use crate::ports::WorldRepository;

/// Application service for entity writes, reads and world resets.
pub struct WorldService<R> {
    repo: R,
}

impl<R: WorldRepository> WorldService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Set the attributes of `name` to exactly `entity`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn replace_entity(&self, name: &str, entity: Entity) -> Result<Entity, WorldError> {
        tracing::debug!(entity = name, attributes = entity.len(), "replacing entity");
        self.repo.replace(name, entity).await
    }

    /// Merge the attributes of `entity` into `name`, creating it if absent.
    ///
    /// Returns the entity as stored after the merge.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn merge_into_entity(
        &self,
        name: &str,
        entity: Entity,
    ) -> Result<Entity, WorldError> {
        tracing::debug!(entity = name, attributes = entity.len(), "merging into entity");
        self.repo.merge(name, entity).await
    }

    /// Look up an entity, treating an unknown name as an empty entity.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_entity(&self, name: &str) -> Result<Entity, WorldError> {
        Ok(self.repo.get(name).await?.unwrap_or_default())
    }

    /// Snapshot of every entity.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_world(&self) -> Result<World, WorldError> {
        self.repo.get_all().await
    }

    /// Remove every entity and return an empty world.
    ///
    /// The response is built here rather than read back from the repository,
    /// so writes landing after the clear never show up in it.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn clear_world(&self) -> Result<World, WorldError> {
        let removed = self.repo.clear().await?;
        tracing::info!(removed, "world cleared");
        Ok(World::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryWorldRepo {
        world: Mutex<World>,
    }

    impl WorldRepository for InMemoryWorldRepo {
        fn replace(
            &self,
            name: &str,
            entity: Entity,
        ) -> impl Future<Output = Result<Entity, WorldError>> + Send {
            self.world.lock().unwrap().replace(name, entity.clone());
            async { Ok(entity) }
        }

        fn merge(
            &self,
            name: &str,
            entity: Entity,
        ) -> impl Future<Output = Result<Entity, WorldError>> + Send {
            let merged = self.world.lock().unwrap().merge(name, entity).clone();
            async { Ok(merged) }
        }

        fn get(
            &self,
            name: &str,
        ) -> impl Future<Output = Result<Option<Entity>, WorldError>> + Send {
            let result = self.world.lock().unwrap().get(name).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<World, WorldError>> + Send {
            let result = self.world.lock().unwrap().clone();
            async { Ok(result) }
        }

        fn clear(&self) -> impl Future<Output = Result<usize, WorldError>> + Send {
            let removed = self.world.lock().unwrap().clear();
            async move { Ok(removed) }
        }
    }

    struct FailingRepo;

    fn storage_failure() -> WorldError {
        WorldError::Storage(Box::new(std::io::Error::other("backend unavailable")))
    }

    impl WorldRepository for FailingRepo {
        async fn replace(&self, _name: &str, _entity: Entity) -> Result<Entity, WorldError> {
            Err(storage_failure())
        }
        async fn merge(&self, _name: &str, _entity: Entity) -> Result<Entity, WorldError> {
            Err(storage_failure())
        }
        async fn get(&self, _name: &str) -> Result<Option<Entity>, WorldError> {
            Err(storage_failure())
        }
        async fn get_all(&self) -> Result<World, WorldError> {
            Err(storage_failure())
        }
        async fn clear(&self) -> Result<usize, WorldError> {
            Err(storage_failure())
        }
    }

    /// Repository whose world is refilled by another writer right after
    /// every clear.
    struct RefilledAfterClearRepo;

    impl WorldRepository for RefilledAfterClearRepo {
        async fn replace(&self, _name: &str, entity: Entity) -> Result<Entity, WorldError> {
            Ok(entity)
        }
        async fn merge(&self, _name: &str, entity: Entity) -> Result<Entity, WorldError> {
            Ok(entity)
        }
        async fn get(&self, _name: &str) -> Result<Option<Entity>, WorldError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<World, WorldError> {
            let mut world = World::new();
            world.replace("late", Entity::from_value(json!({"x": 1})));
            Ok(world)
        }
        async fn clear(&self) -> Result<usize, WorldError> {
            Ok(3)
        }
    }

    fn make_service() -> WorldService<InMemoryWorldRepo> {
        WorldService::new(InMemoryWorldRepo::default())
    }

    fn entity(value: Value) -> Entity {
        Entity::from_value(value)
    }

    #[tokio::test]
    async fn should_return_replaced_entity_when_fetched() {
        let svc = make_service();
        let stored = svc
            .replace_entity("a", entity(json!({"x": 1})))
            .await
            .unwrap();
        assert_eq!(stored, entity(json!({"x": 1})));

        let fetched = svc.get_entity("a").await.unwrap();
        assert_eq!(fetched, entity(json!({"x": 1})));
    }

    #[tokio::test]
    async fn should_override_keys_when_merging_after_replace() {
        let svc = make_service();
        svc.replace_entity("a", entity(json!({"x": 1, "y": 1})))
            .await
            .unwrap();

        let merged = svc
            .merge_into_entity("a", entity(json!({"y": 2, "z": 3})))
            .await
            .unwrap();

        let expected = entity(json!({"x": 1, "y": 2, "z": 3}));
        assert_eq!(merged, expected);
        assert_eq!(svc.get_entity("a").await.unwrap(), expected);
    }

    #[tokio::test]
    async fn should_return_empty_entity_when_unknown() {
        let svc = make_service();
        let fetched = svc.get_entity("nobody").await.unwrap();
        assert!(fetched.is_empty());
    }

    #[tokio::test]
    async fn should_list_every_entity_in_world() {
        let svc = make_service();
        svc.replace_entity("a", entity(json!({"x": 1})))
            .await
            .unwrap();
        svc.merge_into_entity("b", entity(json!({"y": 2})))
            .await
            .unwrap();

        let world = svc.get_world().await.unwrap();
        assert_eq!(
            serde_json::to_value(&world).unwrap(),
            json!({"a": {"x": 1}, "b": {"y": 2}})
        );
    }

    #[tokio::test]
    async fn should_return_empty_world_when_cleared() {
        let svc = make_service();
        svc.replace_entity("a", entity(json!({"x": 1})))
            .await
            .unwrap();

        let world = svc.clear_world().await.unwrap();
        assert!(world.is_empty());
        assert!(svc.get_world().await.unwrap().is_empty());
        assert!(svc.get_entity("a").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_empty_world_when_cleared_even_if_written_concurrently() {
        let svc = WorldService::new(RefilledAfterClearRepo);

        let world = svc.clear_world().await.unwrap();

        assert!(world.is_empty());
    }

    #[tokio::test]
    async fn should_propagate_storage_error() {
        let svc = WorldService::new(FailingRepo);

        assert!(matches!(
            svc.get_entity("a").await,
            Err(WorldError::Storage(_))
        ));
        assert!(matches!(
            svc.clear_world().await,
            Err(WorldError::Storage(_))
        ));
    }
}
