//! Boundary corrections applied around each time step
//!
//! # Design Philosophy
//!
//! The integration step itself is pure numerics: `y + f(y)·dt`. Anything
//! that keeps the state inside its physical domain lives here, as an
//! ordered list of corrections attached to the [`Scenario`](crate::solver::Scenario).
//!
//! Each correction has two hooks:
//!
//! - [`correct_rates`](BoundaryCorrection::correct_rates): runs *before* the
//!   update and may replace the rates when the naive step would leave the
//!   domain (e.g. drive substrate below zero)
//! - [`project_state`](BoundaryCorrection::project_state): runs *after* the
//!   update and may project the new state back into the domain (e.g. clip
//!   floating-point undershoot at zero)
//!
//! Both default to the identity, so a correction only overrides what it needs.
//!
//! # Available corrections
//!
//! | Correction            | Hook            | Effect                                       |
//! |-----------------------|-----------------|----------------------------------------------|
//! | [`SubstrateExhaustion`] | `correct_rates` | deplete substrate to exactly 0 in one step |
//! | [`NonNegative`]         | `project_state` | clamp every quantity at 0                  |

use crate::models::KineticParameters;
use crate::physics::{PhysicalData, PhysicalQuantity, PhysicalState};

// =================================================================================================
// Boundary Correction Trait
// =================================================================================================

/// A correction keeping the state inside its physical domain
pub trait BoundaryCorrection: Send + Sync {
    /// Replace `rates` if stepping `state` by `rates · dt` would violate the domain
    fn correct_rates(&self, _state: &PhysicalState, rates: PhysicalState, _dt: f64) -> PhysicalState {
        rates
    }

    /// Project an updated state back into the domain
    fn project_state(&self, state: PhysicalState) -> PhysicalState {
        state
    }

    /// Name (for diagnostics)
    fn name(&self) -> &str;
}

// =================================================================================================
// Substrate Exhaustion
// =================================================================================================

const DEPLETION_MARGIN: f64 = 1.0 + 4.0 * f64::EPSILON;

/// Substrate-exhaustion clamp
///
/// When the explicit step would drive total substrate negative,
///
/// ```text
/// S + dS/dt · dt < 0
/// ```
///
/// the three rates are replaced by the exact rates that consume the
/// remaining substrate over this step, rescaled by the same yields:
///
/// ```text
/// dS/dt = -S/dt
/// dX/dt =  Yxs · S/dt
/// dP/dt =  Yps · S/dt
/// ```
///
/// The mass balance `Yxs · ΔS = -ΔX` is therefore preserved at the boundary.
/// Once S reaches 0 the Monod term is 0, so the correction fires at most once.
///
/// Pair it with [`NonNegative`] (after it in the scenario) so that the
/// depleted substrate is stored as exactly 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubstrateExhaustion {
    /// Biomass yield Yxs [g/g]
    pub biomass_yield: f64,

    /// Ethanol yield Yps [g/g]
    pub ethanol_yield: f64,
}

impl SubstrateExhaustion {
    /// Create with explicit yields
    pub fn new(biomass_yield: f64, ethanol_yield: f64) -> Self {
        Self { biomass_yield, ethanol_yield }
    }

    /// Create with the yields of a kinetic constant set
    pub fn from_parameters(parameters: &KineticParameters) -> Self {
        Self::new(parameters.biomass_yield, parameters.ethanol_yield)
    }
}

impl BoundaryCorrection for SubstrateExhaustion {
    fn correct_rates(&self, state: &PhysicalState, rates: PhysicalState, dt: f64) -> PhysicalState {
        let (Some(substrate), Some(d_substrate)) = (
            state.scalar(PhysicalQuantity::Substrate),
            rates.scalar(PhysicalQuantity::Substrate),
        ) else {
            return rates;
        };

        if substrate + d_substrate * dt >= 0.0 {
            return rates;
        }

        log::debug!(
            "substrate exhausted within this step: {:.6} g left, naive rate {:.6} g/h",
            substrate,
            d_substrate
        );

        // Rounding margin: the update lands at or just below 0, never a few
        // ulps above it, so the projection pins substrate to exactly 0.
        let depletion = substrate / dt * DEPLETION_MARGIN;

        let mut corrected = rates;
        corrected.set(PhysicalQuantity::Substrate, PhysicalData::Scalar(-depletion));
        corrected.set(PhysicalQuantity::Biomass, PhysicalData::Scalar(self.biomass_yield * depletion));
        corrected.set(PhysicalQuantity::Ethanol, PhysicalData::Scalar(self.ethanol_yield * depletion));
        corrected
    }

    fn name(&self) -> &str {
        "Substrate Exhaustion"
    }
}

// =================================================================================================
// Non-negativity
// =================================================================================================

/// Clamp every quantity at zero after the update
///
/// Guards against residual floating-point undershoot; masses are never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NonNegative;

impl BoundaryCorrection for NonNegative {
    fn project_state(&self, mut state: PhysicalState) -> PhysicalState {
        state.apply(|x| x.max(0.0));
        state
    }

    fn name(&self) -> &str {
        "Non Negative"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn totals(biomass: f64, substrate: f64, ethanol: f64) -> PhysicalState {
        PhysicalState::new(PhysicalQuantity::Biomass, PhysicalData::Scalar(biomass))
            .with(PhysicalQuantity::Substrate, PhysicalData::Scalar(substrate))
            .with(PhysicalQuantity::Ethanol, PhysicalData::Scalar(ethanol))
    }

    #[test]
    fn test_exhaustion_leaves_safe_rates_untouched() {
        let correction = SubstrateExhaustion::new(0.5, 0.48);
        let state = totals(100.0, 1000.0, 0.0);
        let rates = totals(10.0, -20.0, 9.6);

        let corrected = correction.correct_rates(&state, rates.clone(), 0.1);
        assert_eq!(corrected, rates);
    }

    #[test]
    fn test_exhaustion_depletes_exactly() {
        let correction = SubstrateExhaustion::new(0.5, 0.48);
        let state = totals(100.0, 1.0, 50.0);
        let rates = totals(10.0, -20.0, 9.6);
        let dt = 0.1;

        let corrected = correction.correct_rates(&state, rates, dt);

        let d_s = corrected.scalar(PhysicalQuantity::Substrate).unwrap();
        let d_x = corrected.scalar(PhysicalQuantity::Biomass).unwrap();
        let d_p = corrected.scalar(PhysicalQuantity::Ethanol).unwrap();

        assert_relative_eq!(1.0 + d_s * dt, 0.0, epsilon = 1e-12);
        assert_relative_eq!(d_x, 0.5 * 10.0, epsilon = 1e-12);
        assert_relative_eq!(d_p, 0.48 * 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_exhaustion_ignores_states_without_substrate() {
        let correction = SubstrateExhaustion::from_parameters(&KineticParameters::default());
        let state = PhysicalState::new(PhysicalQuantity::Custom("y"), PhysicalData::Scalar(1.0));
        let rates = PhysicalState::new(PhysicalQuantity::Custom("y"), PhysicalData::Scalar(-100.0));

        assert_eq!(correction.correct_rates(&state, rates.clone(), 1.0), rates);
        assert_eq!(correction.name(), "Substrate Exhaustion");
    }

    #[test]
    fn test_non_negative_projection() {
        let projected = NonNegative.project_state(totals(1.0, -1e-15, 2.0));
        assert_eq!(projected.scalar(PhysicalQuantity::Substrate), Some(0.0));
        assert_eq!(projected.scalar(PhysicalQuantity::Biomass), Some(1.0));
    }

    #[test]
    fn test_default_hooks_are_identity() {
        let state = totals(1.0, 2.0, 3.0);
        assert_eq!(NonNegative.correct_rates(&state, state.clone(), 0.1), state);
        let exhaustion = SubstrateExhaustion::new(0.5, 0.48);
        assert_eq!(exhaustion.project_state(state.clone()), state);
    }
}
