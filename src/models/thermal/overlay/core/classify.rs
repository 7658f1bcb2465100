use std::{cmp::Ordering, ops::Deref};

use serde::{Deserialize, Serialize};
use uom::{
    ConstZero,
    si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin},
};

use crate::support::{
    constraint::{ConstraintResult, NonNegative},
    scene::Color,
};

/// Half-width of the band around the target treated as a match, in kelvin.
pub const DEFAULT_TOLERANCE_K: f64 = 1e-3;

/// Position of a temperature rise relative to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Classification {
    /// No meaningful target; rendered gray.
    Neutral,
    /// Below the target band: flow exceeds the requirement (over-cooled); green.
    Under,
    /// Within the target band; yellow.
    Match,
    /// Above the target band: flow falls short (under-cooled); red.
    Over,
}

impl Classification {
    pub const NEUTRAL_COLOR: Color = Color::new(0.5, 0.5, 0.5);
    pub const UNDER_COLOR: Color = Color::new(0.0, 1.0, 0.0);
    pub const MATCH_COLOR: Color = Color::new(1.0, 1.0, 0.0);
    pub const OVER_COLOR: Color = Color::new(1.0, 0.0, 0.0);

    /// Returns the override color for this classification.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Neutral => Self::NEUTRAL_COLOR,
            Self::Under => Self::UNDER_COLOR,
            Self::Match => Self::MATCH_COLOR,
            Self::Over => Self::OVER_COLOR,
        }
    }
}

/// Non-negative half-width of the match band.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tolerance(TemperatureInterval);

impl Tolerance {
    /// Creates a [`Tolerance`] from a quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the interval is negative or not a number.
    pub fn from_quantity(quantity: TemperatureInterval) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(quantity)?.into_inner()))
    }

    /// Creates a [`Tolerance`] in kelvin.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is negative or not a number.
    pub fn kelvin(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(TemperatureInterval::new::<delta_kelvin>(value))
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(TemperatureInterval::new::<delta_kelvin>(DEFAULT_TOLERANCE_K))
    }
}

impl Deref for Tolerance {
    type Target = TemperatureInterval;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Classifies a temperature rise against its target.
///
/// A target that is not strictly positive (including NaN) is [`Classification::Neutral`].
/// Otherwise the band edges `target - tolerance` and `target + tolerance` split
/// the line into [`Under`](Classification::Under), [`Match`](Classification::Match)
/// (both edges inclusive), and [`Over`](Classification::Over). Comparing against
/// the edges directly, rather than against `|delta_t - target|`, keeps a rise that
/// sits exactly on an edge inside the match band under floating-point rounding.
#[must_use]
pub fn classify(
    delta_t: TemperatureInterval,
    target: TemperatureInterval,
    tolerance: Tolerance,
) -> Classification {
    if target.partial_cmp(&TemperatureInterval::ZERO) != Some(Ordering::Greater) {
        return Classification::Neutral;
    }

    let lower = target - *tolerance;
    let upper = target + *tolerance;

    if delta_t < lower {
        Classification::Under
    } else if delta_t <= upper {
        Classification::Match
    } else {
        Classification::Over
    }
}
