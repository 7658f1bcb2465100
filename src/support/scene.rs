//! Attribute-store interface over a hierarchical scene graph.
//!
//! The overlay never owns scene entities. It addresses them by [`EntityPath`]
//! and reads, upserts, or removes named typed attributes on them through the
//! [`Scene`] trait. Hosts with a native scene graph implement [`Scene`] as a
//! thin adapter; [`MemoryScene`] is a complete in-memory implementation.
//!
//! # Example
//!
//! ```
//! use rack_thermal_overlay::support::scene::{AttributeValue, EntityPath, MemoryScene, Scene};
//!
//! let mut scene = MemoryScene::new();
//! let rack = EntityPath::new("/World/Row1/Rack01");
//! scene.define(&rack);
//! scene.set_attribute(&rack, "user:rackPowerW", AttributeValue::Double(1000.0)).unwrap();
//!
//! let paths = scene.traverse();
//! assert_eq!(paths.len(), 3);
//! assert_eq!(
//!     scene.attribute(&rack, "user:rackPowerW").unwrap(),
//!     Some(AttributeValue::Double(1000.0))
//! );
//! ```

mod attribute;
mod error;
mod memory;
mod path;

pub use attribute::{AttributeKind, AttributeValue, Color};
pub use error::SceneError;
pub use memory::MemoryScene;
pub use path::EntityPath;

/// Narrow read/write/remove access to entity attributes.
///
/// Only authored values are visible through [`Scene::attribute`]. An attribute
/// that exists without an authored value reads as `None`, exactly like one
/// that was never created.
pub trait Scene {
    /// Returns the paths of all entities in traversal order.
    fn traverse(&self) -> Vec<EntityPath>;

    /// Returns `true` if `path` currently resolves to an entity.
    fn is_valid(&self, path: &EntityPath) -> bool;

    /// Reads the authored value of attribute `name` on `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidEntity`] if `path` does not resolve.
    fn attribute(&self, path: &EntityPath, name: &str)
    -> Result<Option<AttributeValue>, SceneError>;

    /// Sets attribute `name` on `path`, creating the attribute if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidEntity`] if `path` does not resolve, or
    /// [`SceneError::TypeMismatch`] if the attribute exists with another type.
    fn set_attribute(
        &mut self,
        path: &EntityPath,
        name: &str,
        value: AttributeValue,
    ) -> Result<(), SceneError>;

    /// Removes attribute `name` from `path`.
    ///
    /// Returns `true` if an attribute was removed.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidEntity`] if `path` does not resolve.
    fn remove_attribute(&mut self, path: &EntityPath, name: &str) -> Result<bool, SceneError>;
}

impl<S: Scene + ?Sized> Scene for &mut S {
    fn traverse(&self) -> Vec<EntityPath> {
        (**self).traverse()
    }

    fn is_valid(&self, path: &EntityPath) -> bool {
        (**self).is_valid(path)
    }

    fn attribute(
        &self,
        path: &EntityPath,
        name: &str,
    ) -> Result<Option<AttributeValue>, SceneError> {
        (**self).attribute(path, name)
    }

    fn set_attribute(
        &mut self,
        path: &EntityPath,
        name: &str,
        value: AttributeValue,
    ) -> Result<(), SceneError> {
        (**self).set_attribute(path, name, value)
    }

    fn remove_attribute(&mut self, path: &EntityPath, name: &str) -> Result<bool, SceneError> {
        (**self).remove_attribute(path, name)
    }
}
