//! Rack thermal overlay.
//!
//! Annotates scene entities that carry a heat load with the result of a
//! sensible heat balance, encoded as a reversible display-color override.
//!
//! [`OverlayController`] is the entry point a host drives: it owns the scene
//! handle, the [`OverlayConfig`], and the [`OverrideCache`], and runs one pass
//! per configuration change. [`HeatBalanceModel`] exposes the balance alone
//! as a [`twine_core::Model`].
//!
//! # Example
//!
//! ```
//! use rack_thermal_overlay::models::thermal::overlay::{
//!     Classification, Mode, OverlayConfig, OverlayController, attributes,
//! };
//! use rack_thermal_overlay::support::scene::{AttributeValue, EntityPath, MemoryScene, Scene};
//!
//! let scene = MemoryScene::new()
//!     .with_attribute("/World/Rack01", attributes::HEAT_LOAD, AttributeValue::Double(1000.0))
//!     .with_attribute("/World/Rack01", attributes::ACTUAL_FLOW, AttributeValue::Double(0.05));
//!
//! let mut overlay = OverlayController::new(Some(scene), OverlayConfig::default());
//! let report = overlay.recompute();
//! assert_eq!(report.annotated_as(Classification::Over), 1);
//!
//! // Design mode writes the required flow back to the entity.
//! overlay.set_mode(Mode::Design);
//! let rack = EntityPath::new("/World/Rack01");
//! let scene = overlay.scene().unwrap();
//! assert!(scene.attribute(&rack, attributes::REQUIRED_FLOW).unwrap().is_some());
//!
//! // Turning annotation off puts every color back.
//! overlay.set_annotation_enabled(false);
//! let scene = overlay.scene().unwrap();
//! assert_eq!(scene.attribute(&rack, attributes::DISPLAY_COLOR).unwrap(), None);
//! ```

pub(crate) mod core;

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::{Power, SpecificHeatCapacity};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

pub use self::core::{
    BalanceInput, BatchDefaults, BatchOutcome, CP_FLOOR, Classification, ConfigError,
    ControllerState, DEFAULT_TOLERANCE_K, HeatBalance, Mode, OriginalColor, OverlayConfig,
    OverlayController, OverrideCache, PassKind, PassReport, RestoreReport, SkipReason,
    Tolerance, attributes, classify, compute, heat_load,
};

/// One load presented to a [`HeatBalanceModel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatBalanceLoad {
    pub heat_load: Constrained<Power, StrictlyPositive>,
    pub input: BalanceInput,
}

/// [`Model`] adapter for the sensible heat balance at a fixed `cp`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatBalanceModel {
    cp: Constrained<SpecificHeatCapacity, StrictlyPositive>,
}

impl HeatBalanceModel {
    #[must_use]
    pub fn new(cp: Constrained<SpecificHeatCapacity, StrictlyPositive>) -> Self {
        Self { cp }
    }

    /// Builds a model from the clamped `cp` of `config`.
    ///
    /// # Errors
    ///
    /// Returns `Err` only if the clamped `cp` is still not strictly positive.
    pub fn from_config(config: &OverlayConfig) -> ConstraintResult<Self> {
        Ok(Self::new(StrictlyPositive::new(config.cp())?))
    }
}

impl Model for HeatBalanceModel {
    type Input = HeatBalanceLoad;
    type Output = HeatBalance;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(compute(input.heat_load, input.input, self.cp))
    }
}
