//! Recompute controller: runs full and restore passes over a scene.

use tracing::{debug, info, warn};
use uom::si::{f64::SpecificHeatCapacity, specific_heat_capacity::joule_per_kilogram_kelvin};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    scene::{AttributeValue, EntityPath, Scene},
};

use super::{
    BalanceInput, BatchDefaults, Classification, ConfigError, Mode, OverlayConfig,
    OverrideCache, PassKind, PassReport, SkipReason, Tolerance, attributes, classify, compute,
    heat_balance,
};

/// Lifecycle state of an [`OverlayController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Annotation is off and no overrides are applied.
    Disabled,
    /// Annotation is on and the cache matches the overrides in the scene.
    EnabledClean,
    /// A full pass is in progress. Never observable between calls.
    EnabledDirty,
}

/// Outcome of a batch assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Entities that received both attributes.
    pub assigned: usize,
    /// The pass triggered after assignment.
    pub pass: PassReport,
}

/// Owns the overlay session for one scene.
///
/// Every configuration change runs exactly one pass with the latest settings.
/// Entry points take `&mut self`, so passes never overlap; a multi-threaded
/// host should hold the controller behind a single lock.
///
/// The scene is optional: with no scene attached every pass is a no-op.
/// Dropping the controller restores any outstanding overrides.
#[derive(Debug)]
pub struct OverlayController<S: Scene> {
    scene: Option<S>,
    config: OverlayConfig,
    tolerance: Tolerance,
    cache: OverrideCache,
    state: ControllerState,
}

impl<S: Scene> OverlayController<S> {
    /// Creates a controller without running a pass.
    #[must_use]
    pub fn new(scene: Option<S>, config: OverlayConfig) -> Self {
        Self {
            scene,
            config,
            tolerance: Tolerance::default(),
            cache: OverrideCache::new(),
            state: if config.annotation_enabled {
                ControllerState::EnabledClean
            } else {
                ControllerState::Disabled
            },
        }
    }

    /// Replaces the match-band tolerance used by later passes.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    #[must_use]
    pub fn cache(&self) -> &OverrideCache {
        &self.cache
    }

    #[must_use]
    pub fn scene(&self) -> Option<&S> {
        self.scene.as_ref()
    }

    /// Gives the host mutable access to the scene between passes.
    ///
    /// Edits made here take effect on the next pass.
    pub fn scene_mut(&mut self) -> Option<&mut S> {
        self.scene.as_mut()
    }

    /// Sets the specific heat capacity, J/(kg·K), and recomputes.
    ///
    /// Finite values below [`CP_FLOOR`](super::CP_FLOOR) are kept and clamped on use.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] without changing anything if `cp` is not finite.
    pub fn set_cp(&mut self, cp: f64) -> Result<PassReport, ConfigError> {
        self.apply_config(OverlayConfig { cp, ..self.config })
    }

    /// Sets the target temperature rise, K, and recomputes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] without changing anything if the target is not finite.
    pub fn set_target_delta_t(&mut self, target_delta_t: f64) -> Result<PassReport, ConfigError> {
        self.apply_config(OverlayConfig {
            target_delta_t,
            ..self.config
        })
    }

    /// Sets the balance mode and recomputes.
    pub fn set_mode(&mut self, mode: Mode) -> PassReport {
        self.config.mode = mode;
        self.recompute()
    }

    /// Turns annotation on or off and recomputes.
    ///
    /// Turning it off restores every overridden color.
    pub fn set_annotation_enabled(&mut self, enabled: bool) -> PassReport {
        self.config.annotation_enabled = enabled;
        self.recompute()
    }

    /// Replaces the whole configuration and recomputes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] without changing anything if `config` is invalid.
    pub fn apply_config(&mut self, config: OverlayConfig) -> Result<PassReport, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self.recompute())
    }

    /// Runs the pass the current configuration calls for.
    ///
    /// A full pass when annotation is enabled; otherwise a restore pass.
    pub fn recompute(&mut self) -> PassReport {
        if self.config.annotation_enabled {
            self.full_pass()
        } else {
            self.restore_pass()
        }
    }

    /// Authors `defaults` on every entity in `paths`, then recomputes.
    ///
    /// Paths that do not resolve, or that refuse either write, are skipped.
    pub fn assign_batch(&mut self, paths: &[EntityPath], defaults: BatchDefaults) -> BatchOutcome {
        let Some(scene) = self.scene.as_mut() else {
            warn!("no scene attached; batch assignment ignored");
            return BatchOutcome {
                assigned: 0,
                pass: PassReport::default(),
            };
        };

        let mut assigned = 0;
        for path in paths {
            if !scene.is_valid(path) {
                debug!(path = %path, "batch target does not resolve");
                continue;
            }
            let written = scene
                .set_attribute(
                    path,
                    attributes::HEAT_LOAD,
                    AttributeValue::Double(defaults.heat_load),
                )
                .and_then(|()| {
                    scene.set_attribute(
                        path,
                        attributes::ACTUAL_FLOW,
                        AttributeValue::Double(defaults.actual_flow),
                    )
                });
            match written {
                Ok(()) => assigned += 1,
                Err(err) => warn!(path = %path, error = %err, "batch assignment rejected"),
            }
        }

        info!(
            assigned,
            requested = paths.len(),
            heat_load_w = defaults.heat_load,
            actual_flow_kg_s = defaults.actual_flow,
            "batch defaults applied"
        );

        BatchOutcome {
            assigned,
            pass: self.recompute(),
        }
    }

    /// Restores all overrides and detaches the scene.
    ///
    /// Later calls find no scene and do nothing.
    pub fn shutdown(&mut self) -> PassReport {
        let report = self.restore_pass();
        self.scene = None;
        report
    }

    /// Restores the previous session, then annotates every eligible entity.
    fn full_pass(&mut self) -> PassReport {
        let Some(scene) = self.scene.as_mut() else {
            debug!("no scene attached; skipping full pass");
            return PassReport::default();
        };

        self.state = ControllerState::EnabledDirty;
        let mut report = PassReport::new(PassKind::Full);
        report.restore = self.cache.restore_all(scene);

        let config = self.config;
        let Ok(cp) = StrictlyPositive::new(config.cp()) else {
            warn!(cp = config.cp, "specific heat capacity unusable; nothing annotated");
            self.state = ControllerState::EnabledClean;
            return report;
        };

        for path in scene.traverse() {
            report.visited += 1;
            match annotate(scene, &mut self.cache, &path, &config, cp, self.tolerance) {
                Ok(class) => {
                    debug!(path = %path, ?class, "annotated");
                    report.record_annotated(class);
                }
                Err(reason) => {
                    debug!(path = %path, ?reason, "skipped");
                    report.record_skip(reason);
                }
            }
        }

        self.state = ControllerState::EnabledClean;
        info!(
            mode = ?config.mode,
            cp_j_per_kg_k = cp.as_ref().get::<joule_per_kilogram_kelvin>(),
            target_delta_t_k = config.target_delta_t,
            visited = report.visited,
            annotated = report.annotated_total(),
            skipped = report.skipped_total(),
            restored = report.restore.restored,
            "full pass complete"
        );
        report
    }

    /// Returns every overridden entity to its original color.
    fn restore_pass(&mut self) -> PassReport {
        self.state = ControllerState::Disabled;
        let Some(scene) = self.scene.as_mut() else {
            return PassReport::default();
        };

        let mut report = PassReport::new(PassKind::Restore);
        report.restore = self.cache.restore_all(scene);
        info!(
            restored = report.restore.restored,
            missing = report.restore.missing,
            "restore pass complete"
        );
        report
    }
}

impl<S: Scene> Drop for OverlayController<S> {
    fn drop(&mut self) {
        if !self.cache.is_empty() {
            self.restore_pass();
        }
    }
}

/// Computes, classifies, and colors a single entity.
fn annotate<S: Scene>(
    scene: &mut S,
    cache: &mut OverrideCache,
    path: &EntityPath,
    config: &OverlayConfig,
    cp: Constrained<SpecificHeatCapacity, StrictlyPositive>,
    tolerance: Tolerance,
) -> Result<Classification, SkipReason> {
    if !scene.is_valid(path) {
        return Err(SkipReason::InvalidEntity);
    }
    let read = |scene: &S, name: &str| {
        scene
            .attribute(path, name)
            .map_err(|_| SkipReason::InvalidEntity)
    };

    let heat_load = heat_balance::heat_load(read(&*scene, attributes::HEAT_LOAD)?.as_ref())?;
    let input = match config.mode {
        Mode::Design => BalanceInput::design(config.target_delta_t())?,
        Mode::Audit => BalanceInput::audit(read(&*scene, attributes::ACTUAL_FLOW)?.as_ref())?,
    };

    let balance = compute(heat_load, input, cp);
    if let Some((name, value)) = balance.writeback() {
        scene
            .set_attribute(path, name, value)
            .map_err(|_| SkipReason::WriteRejected)?;
    }

    let class = classify(balance.delta_t, config.target_delta_t(), tolerance);

    cache.record_if_absent(path, read(&*scene, attributes::DISPLAY_COLOR)?);
    cache
        .apply_override(scene, path, class.color())
        .map_err(|_| SkipReason::WriteRejected)?;

    Ok(class)
}
