use thiserror::Error;

use super::{AttributeKind, EntityPath};

/// Errors reported by a [`Scene`](super::Scene) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// The path no longer resolves to an entity.
    #[error("entity does not resolve: {path}")]
    InvalidEntity { path: EntityPath },

    /// The attribute exists with a different value type.
    #[error("cannot write {found} to {expected} attribute {name} on {path}")]
    TypeMismatch {
        path: EntityPath,
        name: String,
        expected: AttributeKind,
        found: AttributeKind,
    },
}
