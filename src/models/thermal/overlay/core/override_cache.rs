//! Record of display colors as they were before the overlay touched them.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::support::scene::{AttributeValue, Color, EntityPath, Scene, SceneError};

use super::{RestoreReport, attributes};

/// Display color of an entity before its first override.
#[derive(Debug, Clone, PartialEq)]
pub enum OriginalColor {
    /// The entity had this authored display color.
    Authored(AttributeValue),
    /// The entity had no authored display color.
    Absent,
}

impl From<Option<AttributeValue>> for OriginalColor {
    fn from(value: Option<AttributeValue>) -> Self {
        value.map_or(Self::Absent, Self::Authored)
    }
}

/// Session-scoped map from entity to its pre-override display color.
///
/// The first recorded value for an entity wins until the cache is cleared by
/// [`OverrideCache::restore_all`], so later overrides within the same session
/// never replace the true original.
#[derive(Debug, Clone, Default)]
pub struct OverrideCache {
    originals: BTreeMap<EntityPath, OriginalColor>,
}

impl OverrideCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `current` as the original color of `path` unless one is already recorded.
    ///
    /// Returns `true` if a new entry was inserted.
    pub fn record_if_absent(&mut self, path: &EntityPath, current: Option<AttributeValue>) -> bool {
        if self.originals.contains_key(path) {
            return false;
        }
        self.originals.insert(path.clone(), current.into());
        true
    }

    /// Writes `color` as the display color of `path`, creating the attribute if needed.
    ///
    /// The original color of `path` must already be recorded.
    ///
    /// # Errors
    ///
    /// Returns a [`SceneError`] if the scene rejects the write.
    pub fn apply_override<S: Scene + ?Sized>(
        &self,
        scene: &mut S,
        path: &EntityPath,
        color: Color,
    ) -> Result<(), SceneError> {
        debug_assert!(
            self.originals.contains_key(path),
            "override applied to {path} before its original color was recorded"
        );
        scene.set_attribute(
            path,
            attributes::DISPLAY_COLOR,
            AttributeValue::Color3fArray(vec![color]),
        )
    }

    /// Returns every recorded entity to its original display color and clears the cache.
    ///
    /// Entities that no longer resolve, or that refuse the write, are skipped.
    /// The cache is empty afterwards regardless.
    pub fn restore_all<S: Scene + ?Sized>(&mut self, scene: &mut S) -> RestoreReport {
        let mut report = RestoreReport::default();

        for (path, original) in std::mem::take(&mut self.originals) {
            if !scene.is_valid(&path) {
                warn!(path = %path, "cached entity no longer resolves; skipping restore");
                report.missing += 1;
                continue;
            }

            let result = match original {
                OriginalColor::Absent => scene
                    .remove_attribute(&path, attributes::DISPLAY_COLOR)
                    .map(|_| ()),
                OriginalColor::Authored(value) => {
                    scene.set_attribute(&path, attributes::DISPLAY_COLOR, value)
                }
            };

            match result {
                Ok(()) => report.restored += 1,
                Err(err) => {
                    warn!(path = %path, error = %err, "failed to restore display color");
                    report.missing += 1;
                }
            }
        }

        debug!(
            restored = report.restored,
            missing = report.missing,
            "override cache cleared"
        );
        report
    }

    /// Returns the recorded original color of `path`.
    #[must_use]
    pub fn original(&self, path: &EntityPath) -> Option<&OriginalColor> {
        self.originals.get(path)
    }

    #[must_use]
    pub fn contains(&self, path: &EntityPath) -> bool {
        self.originals.contains_key(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.originals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.originals.is_empty()
    }
}
