//! World — the collection of every entity, keyed by name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// Every entity known to the service.
///
/// Serializes as a JSON object mapping entity names to their attributes.
/// Entities are created on first write and only ever removed all at once by
/// [`World::clear`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct World {
    entities: BTreeMap<String, Entity>,
}

impl World {
    /// Create an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `entity` under `name`, discarding whatever was there before.
    pub fn replace(&mut self, name: impl Into<String>, entity: Entity) {
        self.entities.insert(name.into(), entity);
    }

    /// Overlay the attributes of `entity` onto the one stored under `name`,
    /// creating it if absent. Returns the merged entity.
    ///
    /// Each attribute is written with [`World::set_attribute`]; keys absent
    /// from `entity` keep their current value.
    pub fn merge(&mut self, name: impl Into<String>, entity: Entity) -> &Entity {
        let name = name.into();
        for (key, value) in entity.into_attributes() {
            self.set_attribute(name.clone(), key, value);
        }
        self.entities.entry(name).or_default()
    }

    /// Set a single attribute on the entity stored under `name`, creating the
    /// entity if absent.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        key: impl Into<String>,
        value: serde_json::Value,
    ) {
        self.entities
            .entry(name.into())
            .or_default()
            .set_attribute(key, value);
    }

    /// Look up an entity by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    /// Remove every entity, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.entities.len();
        self.entities.clear();
        removed
    }

    /// Number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the world holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
