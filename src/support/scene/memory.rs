use std::collections::{BTreeMap, HashMap};

use super::{AttributeValue, EntityPath, Scene, SceneError};

/// In-memory scene graph.
///
/// Entities are traversed in definition order. Defining an entity also
/// defines any missing ancestors first, so traversal is always parent-first.
#[derive(Debug, Clone, Default)]
pub struct MemoryScene {
    order: Vec<EntityPath>,
    entities: HashMap<EntityPath, BTreeMap<String, AttributeValue>>,
}

impl MemoryScene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines `path` and its missing ancestors. Existing entities are untouched.
    pub fn define(&mut self, path: &EntityPath) {
        for ancestor in path.ancestors() {
            self.define_one(ancestor);
        }
        if !path.is_root() {
            self.define_one(path.clone());
        }
    }

    /// Defines `path` and authors `name = value` on it.
    ///
    /// Convenience for building fixtures; replaces any existing value
    /// regardless of its type.
    #[must_use]
    pub fn with_attribute(
        mut self,
        path: impl Into<EntityPath>,
        name: &str,
        value: AttributeValue,
    ) -> Self {
        let path = path.into();
        self.define(&path);
        if let Some(attributes) = self.entities.get_mut(&path) {
            attributes.insert(name.to_owned(), value);
        }
        self
    }

    /// Removes `path` and all of its descendants.
    ///
    /// Returns the number of entities removed.
    pub fn remove(&mut self, path: &EntityPath) -> usize {
        let before = self.order.len();
        self.order.retain(|candidate| !candidate.has_prefix(path));
        self.entities.retain(|candidate, _| !candidate.has_prefix(path));
        before - self.order.len()
    }

    /// Returns all authored attributes on `path`, or `None` if it does not resolve.
    #[must_use]
    pub fn attributes(&self, path: &EntityPath) -> Option<&BTreeMap<String, AttributeValue>> {
        self.entities.get(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn define_one(&mut self, path: EntityPath) {
        if !self.entities.contains_key(&path) {
            self.entities.insert(path.clone(), BTreeMap::new());
            self.order.push(path);
        }
    }

    fn entity(&self, path: &EntityPath) -> Result<&BTreeMap<String, AttributeValue>, SceneError> {
        self.entities
            .get(path)
            .ok_or_else(|| SceneError::InvalidEntity { path: path.clone() })
    }

    fn entity_mut(
        &mut self,
        path: &EntityPath,
    ) -> Result<&mut BTreeMap<String, AttributeValue>, SceneError> {
        self.entities
            .get_mut(path)
            .ok_or_else(|| SceneError::InvalidEntity { path: path.clone() })
    }
}

impl Scene for MemoryScene {
    fn traverse(&self) -> Vec<EntityPath> {
        self.order.clone()
    }

    fn is_valid(&self, path: &EntityPath) -> bool {
        self.entities.contains_key(path)
    }

    fn attribute(
        &self,
        path: &EntityPath,
        name: &str,
    ) -> Result<Option<AttributeValue>, SceneError> {
        Ok(self.entity(path)?.get(name).cloned())
    }

    fn set_attribute(
        &mut self,
        path: &EntityPath,
        name: &str,
        value: AttributeValue,
    ) -> Result<(), SceneError> {
        let attributes = self.entity_mut(path)?;
        if let Some(existing) = attributes.get(name) {
            if existing.kind() != value.kind() {
                return Err(SceneError::TypeMismatch {
                    path: path.clone(),
                    name: name.to_owned(),
                    expected: existing.kind(),
                    found: value.kind(),
                });
            }
        }
        attributes.insert(name.to_owned(), value);
        Ok(())
    }

    fn remove_attribute(&mut self, path: &EntityPath, name: &str) -> Result<bool, SceneError> {
        Ok(self.entity_mut(path)?.remove(name).is_some())
    }
}
