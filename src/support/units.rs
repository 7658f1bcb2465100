//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (heat load, mass flow rate,
//! specific heat, temperature rise). This module provides the quantities the
//! sensible heat balance needs that [`uom`] does not name directly.
//!
//! ## Specific enthalpy change
//!
//! Multiplying a specific heat capacity by a temperature interval yields a
//! specific enthalpy change (J/kg). Dividing a heat load by it yields a mass
//! flow rate, which is how required coolant flow is derived:
//!
//! ```
//! use rack_thermal_overlay::support::units::SpecificEnthalpy;
//! use uom::si::{
//!     f64::{MassRate, Power, SpecificHeatCapacity, TemperatureInterval},
//!     mass_rate::kilogram_per_second,
//!     power::watt,
//!     specific_heat_capacity::joule_per_kilogram_kelvin,
//!     temperature_interval::kelvin,
//! };
//!
//! let cp = SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1000.0);
//! let dh: SpecificEnthalpy = cp * TemperatureInterval::new::<kelvin>(10.0);
//! let m_dot: MassRate = Power::new::<watt>(1000.0) / dh;
//! assert!((m_dot.get::<kilogram_per_second>() - 0.1).abs() < 1e-12);
//! ```

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N2, P2, Z0},
};

/// Specific enthalpy, J/kg in SI.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
