//! Batch bioethanol fermentation model
//!
//! # Mathematical Background
//!
//! The broth is well mixed, so the state is three total masses (grams):
//! biomass X, substrate S and ethanol P. Concentrations are derived by
//! dividing by the broth volume V only where the kinetics need them.
//!
//! ## Specific growth rate
//!
//! ```text
//! μmax = μmax,base · (N / 400)^0.6
//!
//! μ = μmax · S/(Ks + S) · 1/(1 + S/Ksi) · max(0, 1 - P/Pmax)
//! ```
//!
//! - **Monod saturation** S/(Ks + S): substrate limitation
//! - **Substrate inhibition** 1/(1 + S/Ksi): high sugar slows growth
//! - **Ethanol inhibition** max(0, 1 - P/Pmax): growth halts at Pmax
//!
//! ## Mass balances (total-mass formulation)
//!
//! ```text
//! dX/dt =  μ · X
//! dS/dt = -(1/Yxs) · dX/dt
//! dP/dt = -Yps · dS/dt
//! ```
//!
//! Tracking totals instead of concentrations keeps the stoichiometric
//! coupling exact: at every explicit Euler step
//! `Yxs · (S₀ - Sₙ) = Xₙ - X₀` holds to rounding error.
//!
//! There is no decay or death term: X and P never decrease, S never
//! increases.
//!
//! # Example
//!
//! ```rust
//! use ferment_rs::models::{BatchFermentation, KineticParameters, SimulationState};
//! use ferment_rs::physics::PhysicalModel;
//!
//! let model = BatchFermentation::new(
//!     KineticParameters::default(),
//!     100.0,                                       // V [L]
//!     300.0,                                       // N [rpm]
//!     SimulationState::from_concentrations(1.0, 50.0, 0.0, 100.0),
//! );
//!
//! let rates = model.rates(&model.initial_state());
//! assert!(rates.biomass > 0.0);
//! assert!(rates.substrate < 0.0);
//! ```

use crate::models::KineticParameters;
use crate::physics::{PhysicalData, PhysicalModel, PhysicalQuantity, PhysicalState};

// =================================================================================================
// Simulation state (total masses)
// =================================================================================================

/// Total masses in the reactor at one instant [g]
///
/// Also used for the derivative triple (g/h) returned by
/// [`BatchFermentation::rates`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimulationState {
    /// Total biomass [g]
    pub biomass: f64,

    /// Total substrate [g]
    pub substrate: f64,

    /// Total ethanol [g]
    pub ethanol: f64,
}

impl SimulationState {
    /// Create from total masses
    pub fn new(biomass: f64, substrate: f64, ethanol: f64) -> Self {
        Self { biomass, substrate, ethanol }
    }

    /// Create from concentrations [g/L] and a broth volume [L]
    pub fn from_concentrations(biomass: f64, substrate: f64, ethanol: f64, volume: f64) -> Self {
        Self::new(biomass * volume, substrate * volume, ethanol * volume)
    }

    /// Convert to concentrations [g/L] as (biomass, substrate, ethanol)
    pub fn concentrations(&self, volume: f64) -> (f64, f64, f64) {
        (self.biomass / volume, self.substrate / volume, self.ethanol / volume)
    }

    /// Pack into the solver-facing state container
    pub fn to_physical_state(&self) -> PhysicalState {
        PhysicalState::new(PhysicalQuantity::Biomass, PhysicalData::Scalar(self.biomass))
            .with(PhysicalQuantity::Substrate, PhysicalData::Scalar(self.substrate))
            .with(PhysicalQuantity::Ethanol, PhysicalData::Scalar(self.ethanol))
    }
}

impl TryFrom<&PhysicalState> for SimulationState {
    type Error = String;

    fn try_from(state: &PhysicalState) -> Result<Self, Self::Error> {
        let read = |quantity: PhysicalQuantity| {
            state
                .scalar(quantity)
                .ok_or_else(|| format!("{} is missing or not a scalar in the state", quantity))
        };

        Ok(Self {
            biomass: read(PhysicalQuantity::Biomass)?,
            substrate: read(PhysicalQuantity::Substrate)?,
            ethanol: read(PhysicalQuantity::Ethanol)?,
        })
    }
}

// =================================================================================================
// Batch fermentation model (Kinetics Evaluator)
// =================================================================================================

/// Batch fermentation kinetics
///
/// Holds the constant set, the broth volume, the impeller speed and the
/// initial totals. The agitation-corrected μmax is computed once at
/// construction since N is fixed for the run.
///
/// # Thread Safety
///
/// All fields are plain values, so the model is `Send + Sync` and pure:
/// [`rates`](Self::rates) depends only on its argument.
#[derive(Debug, Clone)]
pub struct BatchFermentation {
    parameters: KineticParameters,
    volume: f64,
    impeller_speed: f64,
    mu_max: f64,
    initial: SimulationState,
}

impl BatchFermentation {
    /// Create the model
    ///
    /// # Arguments
    ///
    /// * `parameters` - Kinetic constant set
    /// * `volume` - Broth volume [L], must be > 0
    /// * `impeller_speed` - Agitation [rpm]
    /// * `initial` - Initial total masses [g]
    pub fn new(
        parameters: KineticParameters,
        volume: f64,
        impeller_speed: f64,
        initial: SimulationState,
    ) -> Self {
        let mu_max = parameters.max_growth_rate(impeller_speed);

        Self {
            parameters,
            volume,
            impeller_speed,
            mu_max,
            initial,
        }
    }

    /// Kinetic constants in use
    pub fn parameters(&self) -> &KineticParameters {
        &self.parameters
    }

    /// Broth volume [L]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Impeller speed [rpm]
    pub fn impeller_speed(&self) -> f64 {
        self.impeller_speed
    }

    /// Agitation-corrected maximum specific growth rate [1/h]
    pub fn mu_max(&self) -> f64 {
        self.mu_max
    }

    /// Initial total masses
    pub fn initial_state(&self) -> SimulationState {
        self.initial
    }

    /// Specific growth rate μ [1/h] at the given totals
    pub fn specific_growth_rate(&self, state: &SimulationState) -> f64 {
        let (_, substrate, ethanol) = state.concentrations(self.volume);
        self.parameters.specific_growth_rate(self.mu_max, substrate, ethanol)
    }

    /// Time derivatives of the three totals [g/h]
    pub fn rates(&self, state: &SimulationState) -> SimulationState {
        let mu = self.specific_growth_rate(state);

        let d_biomass = mu * state.biomass;
        let d_substrate = -(1.0 / self.parameters.biomass_yield) * d_biomass;
        let d_ethanol = -self.parameters.ethanol_yield * d_substrate;

        SimulationState::new(d_biomass, d_substrate, d_ethanol)
    }
}

impl PhysicalModel for BatchFermentation {
    fn compute_physics(&self, state: &PhysicalState) -> PhysicalState {
        match SimulationState::try_from(state) {
            Ok(totals) => self.rates(&totals).to_physical_state(),
            // A state without the three totals has nothing to react: no change.
            Err(_) => SimulationState::default().to_physical_state(),
        }
    }

    fn setup_initial_state(&self) -> PhysicalState {
        self.initial.to_physical_state()
    }

    fn name(&self) -> &str {
        "Batch Fermentation"
    }

    fn description(&self) -> Option<&str> {
        Some("Monod growth with substrate and ethanol inhibition, total-mass balances")
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn default_model(speed: f64) -> BatchFermentation {
        BatchFermentation::new(
            KineticParameters::default(),
            100.0,
            speed,
            SimulationState::from_concentrations(1.0, 50.0, 0.0, 100.0),
        )
    }

    #[test]
    fn test_state_conversions() {
        let state = SimulationState::from_concentrations(2.0, 80.0, 5.0, 10.0);
        assert_eq!(state, SimulationState::new(20.0, 800.0, 50.0));
        assert_eq!(state.concentrations(10.0), (2.0, 80.0, 5.0));

        let physical = state.to_physical_state();
        assert_eq!(SimulationState::try_from(&physical).unwrap(), state);
    }

    #[test]
    fn test_try_from_missing_quantity() {
        let partial = PhysicalState::new(PhysicalQuantity::Biomass, PhysicalData::Scalar(1.0));
        let err = SimulationState::try_from(&partial).unwrap_err();
        assert!(err.contains("Substrate"));
    }

    #[test]
    fn test_mu_max_reference_speed() {
        let model = default_model(400.0);
        assert_relative_eq!(model.mu_max(), 0.4, epsilon = 1e-15);
    }

    #[test]
    fn test_initial_rates_by_hand() {
        // S = 50 g/L, P = 0: μ = μmax · 50/51 · 1/2 · 1
        let model = default_model(400.0);
        let rates = model.rates(&model.initial_state());

        let mu = 0.4 * (50.0 / 51.0) * 0.5;
        assert_relative_eq!(rates.biomass, mu * 100.0, epsilon = 1e-12);
        assert_relative_eq!(rates.substrate, -rates.biomass / 0.5, epsilon = 1e-12);
        assert_relative_eq!(rates.ethanol, -0.48 * rates.substrate, epsilon = 1e-12);
    }

    #[test]
    fn test_rates_signs() {
        let model = default_model(300.0);
        let rates = model.rates(&SimulationState::new(150.0, 2500.0, 1200.0));
        assert!(rates.biomass > 0.0);
        assert!(rates.substrate < 0.0);
        assert!(rates.ethanol > 0.0);
    }

    #[test]
    fn test_no_growth_without_substrate_or_above_ceiling() {
        let model = default_model(300.0);

        let starved = model.rates(&SimulationState::new(100.0, 0.0, 10.0));
        assert_eq!(starved, SimulationState::new(0.0, -0.0, 0.0));

        // P = 95 g/L > Pmax
        let poisoned = model.rates(&SimulationState::new(100.0, 3000.0, 9500.0));
        assert_eq!(poisoned.biomass, 0.0);
    }

    #[test]
    fn test_faster_agitation_grows_faster() {
        let slow = default_model(200.0);
        let fast = default_model(400.0);
        let state = slow.initial_state();

        let ratio = fast.rates(&state).biomass / slow.rates(&state).biomass;
        assert_relative_eq!(ratio, 2.0_f64.powf(0.6), epsilon = 1e-12);
    }

    #[test]
    fn test_compute_physics_matches_rates() {
        let model = default_model(300.0);
        let physics = model.compute_physics(&model.setup_initial_state());
        let rates = model.rates(&model.initial_state());

        assert_eq!(physics.scalar(PhysicalQuantity::Biomass), Some(rates.biomass));
        assert_eq!(physics.scalar(PhysicalQuantity::Substrate), Some(rates.substrate));
        assert_eq!(physics.scalar(PhysicalQuantity::Ethanol), Some(rates.ethanol));
    }

    #[test]
    fn test_model_metadata() {
        let model = default_model(300.0);
        assert_eq!(model.name(), "Batch Fermentation");
        assert!(model.description().is_some());
        assert_eq!(model.volume(), 100.0);
        assert_eq!(model.impeller_speed(), 300.0);
    }
}
