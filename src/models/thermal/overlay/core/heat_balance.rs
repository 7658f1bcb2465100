//! Sensible heat balance for an air- or liquid-cooled load.
//!
//! A steady coolant stream absorbing a heat load `Q` obeys `Q = m_dot * cp * ΔT`.
//! Design mode solves it for `m_dot` given a target `ΔT`; audit mode solves it
//! for `ΔT` given the observed `m_dot`.

use uom::si::{
    f64::{MassRate, Power, SpecificHeatCapacity, TemperatureInterval, ThermalConductance},
    mass_rate::kilogram_per_second,
    power::watt,
};

use crate::support::{
    constraint::{Constrained, ConstraintError, StrictlyPositive},
    scene::AttributeValue,
    units::SpecificEnthalpy,
};

use super::{SkipReason, attributes};

/// Mode-specific input to the heat balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BalanceInput {
    /// Solve for the coolant flow that produces exactly this rise.
    Design {
        target_delta_t: Constrained<TemperatureInterval, StrictlyPositive>,
    },
    /// Solve for the rise produced by this observed coolant flow.
    Audit {
        m_dot: Constrained<MassRate, StrictlyPositive>,
    },
}

impl BalanceInput {
    /// Builds a design input, skipping unless the target is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`SkipReason::NonPositiveTarget`] for a zero, negative, or NaN target.
    pub fn design(target_delta_t: TemperatureInterval) -> Result<Self, SkipReason> {
        let target_delta_t =
            StrictlyPositive::new(target_delta_t).map_err(|_| SkipReason::NonPositiveTarget)?;
        Ok(Self::Design { target_delta_t })
    }

    /// Builds an audit input from the authored actual flow, in kg/s.
    ///
    /// # Errors
    ///
    /// Returns the matching [`SkipReason`] when the flow is missing,
    /// unparsable, or not strictly positive.
    pub fn audit(authored: Option<&AttributeValue>) -> Result<Self, SkipReason> {
        let value = authored.ok_or(SkipReason::MissingActualFlow)?;
        let m_dot = value.as_f64().ok_or(SkipReason::UnparsableActualFlow)?;
        let m_dot = StrictlyPositive::new(MassRate::new::<kilogram_per_second>(m_dot))
            .map_err(|_| SkipReason::NonPositiveActualFlow)?;
        Ok(Self::Audit { m_dot })
    }
}

/// Reads an authored heat load, in watts.
///
/// # Errors
///
/// Returns the matching [`SkipReason`] when the load is missing, unparsable,
/// or not strictly positive. A zero load is valid authoring but leaves
/// nothing to annotate.
pub fn heat_load(
    authored: Option<&AttributeValue>,
) -> Result<Constrained<Power, StrictlyPositive>, SkipReason> {
    let value = authored.ok_or(SkipReason::MissingHeatLoad)?;
    let watts = value.as_f64().ok_or(SkipReason::UnparsableHeatLoad)?;
    StrictlyPositive::new(Power::new::<watt>(watts)).map_err(|err| match err {
        ConstraintError::NotANumber => SkipReason::UnparsableHeatLoad,
        _ => SkipReason::NonPositiveHeatLoad,
    })
}

/// Resolved heat balance for one load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatBalance {
    /// Temperature rise used for classification.
    ///
    /// In design mode this is the target itself, since the required flow
    /// meets it exactly by construction.
    pub delta_t: TemperatureInterval,

    /// Coolant flow the load requires; only resolved in design mode.
    pub required_flow: Option<MassRate>,
}

impl HeatBalance {
    /// Returns the attribute to write back to the entity, if any.
    #[must_use]
    pub fn writeback(&self) -> Option<(&'static str, AttributeValue)> {
        self.required_flow.map(|m_dot| {
            (
                attributes::REQUIRED_FLOW,
                AttributeValue::Double(m_dot.get::<kilogram_per_second>()),
            )
        })
    }
}

/// Solves the sensible heat balance for one load.
#[must_use]
pub fn compute(
    heat_load: Constrained<Power, StrictlyPositive>,
    input: BalanceInput,
    cp: Constrained<SpecificHeatCapacity, StrictlyPositive>,
) -> HeatBalance {
    let q_dot = heat_load.into_inner();
    let cp = cp.into_inner();

    match input {
        BalanceInput::Design { target_delta_t } => {
            let target_delta_t = target_delta_t.into_inner();
            let dh: SpecificEnthalpy = cp * target_delta_t;
            let m_dot: MassRate = q_dot / dh;
            HeatBalance {
                delta_t: target_delta_t,
                required_flow: Some(m_dot),
            }
        }
        BalanceInput::Audit { m_dot } => {
            let capacitance: ThermalConductance = m_dot.into_inner() * cp;
            let delta_t: TemperatureInterval = q_dot / capacitance;
            HeatBalance {
                delta_t,
                required_flow: None,
            }
        }
    }
}
