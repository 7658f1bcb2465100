use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable, absolute address of an entity in the scene graph.
///
/// Paths are `/`-separated and rooted, e.g. `/World/Row1/Rack03`.
/// A missing leading `/` is added on construction and trailing separators
/// are dropped, so equivalent spellings compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct EntityPath(String);

impl EntityPath {
    /// Normalizes `path` into an absolute entity path.
    #[must_use]
    pub fn new(path: impl AsRef<str>) -> Self {
        let segments: Vec<&str> = path
            .as_ref()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();
        Self(format!("/{}", segments.join("/")))
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the pseudo-root `/`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Returns the parent path, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        let cut = self.0.rfind('/').unwrap_or(0);
        Some(Self::new(&self.0[..cut]))
    }

    /// Returns the path of a direct child named `name`.
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        Self::new(format!("{}/{name}", self.0))
    }

    /// Returns `true` if `self` is `other` or lies beneath it.
    #[must_use]
    pub fn has_prefix(&self, other: &Self) -> bool {
        other.is_root()
            || self == other
            || self
                .0
                .strip_prefix(other.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Returns every ancestor from the top level down, excluding the root and `self`.
    pub(super) fn ancestors(&self) -> Vec<Self> {
        let mut chain = Vec::new();
        let mut current = self.parent();
        while let Some(path) = current {
            if path.is_root() {
                break;
            }
            current = path.parent();
            chain.push(path);
        }
        chain.reverse();
        chain
    }
}

impl fmt::Display for EntityPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for EntityPath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<EntityPath> for String {
    fn from(path: EntityPath) -> Self {
        path.0
    }
}
