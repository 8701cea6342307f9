//! Entity — a named bag of JSON attributes.
//!
//! Entities carry no schema: any attribute key may hold any JSON value
//! (scalar, array, or object). Attribute keys are unique within an entity and
//! their order carries no meaning.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Attribute mapping of an entity, keyed by attribute name.
pub type Attributes = Map<String, Value>;

/// The attribute mapping stored under one entity name.
///
/// Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity {
    attributes: Attributes,
}

impl Entity {
    /// Create an entity with no attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an entity from an arbitrary JSON value.
    ///
    /// Anything other than a JSON object yields an empty entity.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(attributes) => Self { attributes },
            _ => Self::default(),
        }
    }

    /// Build an entity from raw JSON bytes.
    ///
    /// Empty input, invalid JSON, and non-object JSON all yield an empty entity.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Self {
        serde_json::from_slice::<Value>(bytes)
            .map(Self::from_value)
            .unwrap_or_default()
    }

    /// Set a single attribute, overwriting any previous value under `key`.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: Value) {
        self.attributes.insert(key.into(), value);
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the entity has no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Consume the entity and return its attribute mapping.
    #[must_use]
    pub fn into_attributes(self) -> Attributes {
        self.attributes
    }
}
