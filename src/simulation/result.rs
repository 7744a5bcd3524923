//! Post-processed run result

use crate::error::FermentationError;
use crate::models::{KineticParameters, SimulationState};
use crate::physics::PhysicalQuantity;
use crate::simulation::SimulationInputs;
use crate::solver::SolverResult;

/// Outcome of one fermentation run
///
/// Concentration series are in g/L and share the `time` grid (hours).
/// Created once per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Inputs the run was made with
    pub inputs: SimulationInputs,

    /// Time grid [h]
    pub time: Vec<f64>,

    /// Biomass concentration series X [g/L]
    pub biomass: Vec<f64>,

    /// Substrate concentration series S [g/L]
    pub substrate: Vec<f64>,

    /// Ethanol concentration series P [g/L]
    pub ethanol: Vec<f64>,

    /// Final biomass concentration [g/L]
    pub final_biomass: f64,

    /// Final substrate concentration [g/L]
    pub final_substrate: f64,

    /// Final ethanol concentration [g/L]
    pub final_ethanol: f64,

    /// Total ethanol produced [g]
    pub ethanol_mass: f64,

    /// Total ethanol produced [L]
    pub ethanol_volume: f64,

    /// Cost of the ethanol produced [currency]
    pub total_cost: f64,

    /// Name of the integrator that produced the series
    pub solver: String,
}

impl SimulationResult {
    /// Convert a solver trajectory of total masses into concentrations and totals
    pub(crate) fn from_solver_result(
        inputs: SimulationInputs,
        parameters: &KineticParameters,
        result: &SolverResult,
    ) -> Result<Self, FermentationError> {
        let volume = inputs.volume;

        let series = |quantity: PhysicalQuantity| -> Result<Vec<f64>, FermentationError> {
            result
                .scalar_series(quantity)
                .map(|totals| totals.into_iter().map(|mass| mass / volume).collect())
                .ok_or_else(|| FermentationError::Solver(format!("{} missing from trajectory", quantity)))
        };

        let biomass = series(PhysicalQuantity::Biomass)?;
        let substrate = series(PhysicalQuantity::Substrate)?;
        let ethanol = series(PhysicalQuantity::Ethanol)?;

        let final_state = SimulationState::try_from(&result.final_state).map_err(FermentationError::Solver)?;
        let (final_biomass, final_substrate, final_ethanol) = final_state.concentrations(volume);

        let ethanol_mass = final_ethanol * volume;
        let ethanol_volume = parameters.ethanol_volume(ethanol_mass);
        let total_cost = parameters.ethanol_cost(ethanol_volume);

        Ok(Self {
            inputs,
            time: result.time_points.clone(),
            biomass,
            substrate,
            ethanol,
            final_biomass,
            final_substrate,
            final_ethanol,
            ethanol_mass,
            ethanol_volume,
            total_cost,
            solver: result.get_metadata("solver").unwrap_or_default().to_string(),
        })
    }

    /// Number of time points
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// True if the result holds no time point
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Broth volume of the run [L]
    pub fn volume(&self) -> f64 {
        self.inputs.volume
    }

    /// Total masses [g] at time index `index`
    pub fn totals_at(&self, index: usize) -> Option<SimulationState> {
        Some(SimulationState::from_concentrations(
            *self.biomass.get(index)?,
            *self.substrate.get(index)?,
            *self.ethanol.get(index)?,
            self.volume(),
        ))
    }

    /// First time [h] at which the substrate is fully depleted, if it is
    pub fn substrate_exhaustion_time(&self) -> Option<f64> {
        self.substrate
            .iter()
            .position(|&s| s == 0.0)
            .map(|index| self.time[index])
    }

    /// Substrate consumed over the run [g]
    pub fn substrate_consumed(&self) -> f64 {
        match self.substrate.first() {
            Some(&initial) => (initial - self.final_substrate) * self.volume(),
            None => 0.0,
        }
    }

    /// Ethanol produced per substrate consumed [g/g], 0 if nothing was consumed
    pub fn ethanol_yield(&self) -> f64 {
        let consumed = self.substrate_consumed();
        if consumed > 0.0 { self.ethanol_mass / consumed } else { 0.0 }
    }

    /// Volumetric ethanol productivity over the whole run [g/L/h]
    pub fn productivity(&self) -> f64 {
        match self.time.last() {
            Some(&duration) if duration > 0.0 => self.final_ethanol / duration,
            _ => 0.0,
        }
    }
}
