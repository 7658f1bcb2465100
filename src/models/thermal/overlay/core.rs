//! Reactive thermal annotation of scene entities.
//!
//! Each entity with an authored heat load is run through a sensible heat
//! balance, classified against the target temperature rise, and painted with
//! a reversible display-color override. The pieces, leaves first:
//!
//! - [`compute`]: design and audit solutions of `Q = m_dot * cp * ΔT`.
//! - [`classify()`]: tolerance-banded classification of a rise against its target.
//! - [`OverrideCache`]: first-touch record of pre-override colors and their restoration.
//! - [`OverlayController`]: the full and restore passes and their state machine.

mod classify;
mod config;
mod controller;
mod heat_balance;
mod override_cache;
mod report;

#[cfg(test)]
pub(crate) mod test_support;

pub use classify::{Classification, DEFAULT_TOLERANCE_K, Tolerance, classify};
pub use config::{BatchDefaults, CP_FLOOR, ConfigError, Mode, OverlayConfig};
pub use controller::{BatchOutcome, ControllerState, OverlayController};
pub use heat_balance::{BalanceInput, HeatBalance, compute, heat_load};
pub use override_cache::{OriginalColor, OverrideCache};
pub use report::{PassKind, PassReport, RestoreReport, SkipReason};

/// Names of the entity attributes the overlay reads and writes.
pub mod attributes {
    /// Heat load, W. Read.
    pub const HEAT_LOAD: &str = "user:rackPowerW";

    /// Observed coolant mass flow rate, kg/s. Read in audit mode.
    pub const ACTUAL_FLOW: &str = "user:mdotActual";

    /// Required coolant mass flow rate, kg/s. Written in design mode.
    pub const REQUIRED_FLOW: &str = "user:mdotRequired";

    /// Display color array. Overridden while annotation is enabled.
    pub const DISPLAY_COLOR: &str = "primvars:displayColor";
}
