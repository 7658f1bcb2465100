//! Outcome summaries for overlay passes.

use std::collections::BTreeMap;

use serde::Serialize;

use super::Classification;

/// Why an entity was left unannotated during a full pass.
///
/// Skips are expected outcomes of partially authored scenes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SkipReason {
    /// The entity path no longer resolves.
    InvalidEntity,
    /// No heat load is authored.
    MissingHeatLoad,
    /// The heat load cannot be read as a finite number.
    UnparsableHeatLoad,
    /// The heat load is zero or negative.
    NonPositiveHeatLoad,
    /// Design mode with a target rise that is not strictly positive.
    NonPositiveTarget,
    /// Audit mode without an authored actual flow.
    MissingActualFlow,
    /// The actual flow cannot be read as a finite number.
    UnparsableActualFlow,
    /// The actual flow is zero or negative.
    NonPositiveActualFlow,
    /// The scene refused a write (e.g., an attribute authored with another type).
    WriteRejected,
}

/// Which pass produced a [`PassReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PassKind {
    /// Restore previous overrides, then traverse, compute, and annotate.
    Full,
    /// Restore cached colors only.
    Restore,
    /// Nothing to do because no scene is attached.
    #[default]
    NoScene,
}

/// Outcome of restoring cached colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RestoreReport {
    /// Entities returned to their pre-override color (or lack of one).
    pub restored: usize,
    /// Cached entities that no longer resolve or refused the write.
    pub missing: usize,
}

/// Outcome of a single controller pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PassReport {
    pub kind: PassKind,
    /// Entities visited during traversal.
    pub visited: usize,
    /// Annotated entities by classification.
    pub annotated: BTreeMap<Classification, usize>,
    /// Unannotated entities by reason.
    pub skipped: BTreeMap<SkipReason, usize>,
    /// Outcome of the restore that preceded (or made up) this pass.
    pub restore: RestoreReport,
}

impl PassReport {
    pub(super) fn new(kind: PassKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub(super) fn record_annotated(&mut self, class: Classification) {
        *self.annotated.entry(class).or_default() += 1;
    }

    pub(super) fn record_skip(&mut self, reason: SkipReason) {
        *self.skipped.entry(reason).or_default() += 1;
    }

    /// Returns the number of entities annotated with `class`.
    #[must_use]
    pub fn annotated_as(&self, class: Classification) -> usize {
        self.annotated.get(&class).copied().unwrap_or(0)
    }

    /// Returns the total number of annotated entities.
    #[must_use]
    pub fn annotated_total(&self) -> usize {
        self.annotated.values().sum()
    }

    /// Returns the number of entities skipped for `reason`.
    #[must_use]
    pub fn skipped_for(&self, reason: SkipReason) -> usize {
        self.skipped.get(&reason).copied().unwrap_or(0)
    }

    /// Returns the total number of skipped entities.
    #[must_use]
    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }
}
