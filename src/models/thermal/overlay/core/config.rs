use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::{
    f64::{SpecificHeatCapacity, TemperatureInterval},
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_interval::kelvin as delta_kelvin,
};

/// Smallest specific heat capacity used in the balance, J/(kg·K).
///
/// Configured values below this are clamped up to it.
pub const CP_FLOOR: f64 = 1e-6;

/// Which unknown of the heat balance is solved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Heat load and target rise give the required coolant flow.
    Design,
    /// Heat load and observed coolant flow give the actual rise.
    #[default]
    Audit,
}

/// Errors raised when validating an [`OverlayConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A numeric field is NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}

/// User-editable overlay settings.
///
/// Values are held exactly as the host supplies them. Quantities used by the
/// balance are derived through [`OverlayConfig::cp`] and
/// [`OverlayConfig::target_delta_t`], which apply the documented clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Coolant specific heat capacity, J/(kg·K).
    pub cp: f64,

    /// Target coolant temperature rise, K.
    pub target_delta_t: f64,

    pub mode: Mode,

    /// Whether color overrides are shown.
    pub annotation_enabled: bool,
}

impl Default for OverlayConfig {
    /// Dry air at a 10 K target rise, auditing, with annotation on.
    fn default() -> Self {
        Self {
            cp: 1005.0,
            target_delta_t: 10.0,
            mode: Mode::Audit,
            annotation_enabled: true,
        }
    }
}

impl OverlayConfig {
    /// Returns the specific heat capacity, clamped to at least [`CP_FLOOR`].
    ///
    /// A non-finite setting also resolves to the floor.
    #[must_use]
    pub fn cp(&self) -> SpecificHeatCapacity {
        let cp = if self.cp.is_finite() {
            self.cp.max(CP_FLOOR)
        } else {
            CP_FLOOR
        };
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp)
    }

    /// Returns the target temperature rise as configured.
    #[must_use]
    pub fn target_delta_t(&self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(self.target_delta_t)
    }

    /// Checks that every numeric field is finite.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonFinite`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.cp.is_finite() {
            return Err(ConfigError::NonFinite { field: "cp" });
        }
        if !self.target_delta_t.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "target_delta_t",
            });
        }
        Ok(())
    }
}

/// Values written by batch assignment to a set of entities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchDefaults {
    /// Heat load, W.
    pub heat_load: f64,

    /// Actual coolant flow, kg/s.
    pub actual_flow: f64,
}

impl Default for BatchDefaults {
    fn default() -> Self {
        Self {
            heat_load: 1000.0,
            actual_flow: 0.1,
        }
    }
}
