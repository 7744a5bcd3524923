//! Fermentation runs
//!
//! The façade over the physics and solver layers: takes the five run inputs,
//! builds the batch model and its boundary corrections, integrates on a
//! uniform grid and post-processes the trajectory into concentrations,
//! ethanol volume and cost.
//!
//! # Example
//!
//! ```rust
//! use ferment_rs::simulation::{simulate, SimulationInputs};
//!
//! let inputs = SimulationInputs::new(50.0, 100.0, 1.0, 300.0, 72.0);
//! let result = simulate(&inputs).unwrap();
//!
//! assert!(result.final_substrate < 50.0);
//! assert!(result.final_biomass > 1.0);
//! assert!(result.final_ethanol > 0.0 && result.final_ethanol <= 90.0);
//! ```
//!
//! The only failure before integration is an invalid (non-positive or
//! non-finite) input:
//!
//! ```rust
//! use ferment_rs::error::FermentationError;
//! use ferment_rs::simulation::{simulate, SimulationInputs};
//!
//! let inputs = SimulationInputs { duration: 0.0, ..SimulationInputs::default() };
//! assert!(matches!(simulate(&inputs), Err(FermentationError::InvalidParameter { .. })));
//! ```

mod convergence;
mod inputs;
mod result;
mod sweep;

pub use convergence::{ConvergenceLevel, ConvergenceReport, ConvergenceStudy};
pub use inputs::SimulationInputs;
pub use result::SimulationResult;

use crate::config::DEFAULT_POINTS_PER_HOUR;
use crate::error::FermentationError;
use crate::models::{BatchFermentation, KineticParameters, SimulationState};
use crate::solver::{
    NonNegative, Scenario, SolverConfiguration, SolverType, SubstrateExhaustion, MAX_TIME_STEPS,
};

// =================================================================================================
// Simulator
// =================================================================================================

/// Runs batch fermentations for a fixed constant set and numerical setup
///
/// Holds no per-run state: the same simulator can run any number of inputs,
/// from any number of threads, and identical inputs give identical results.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulator {
    parameters: KineticParameters,
    method: SolverType,
    points_per_hour: usize,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(KineticParameters::default())
    }
}

impl Simulator {
    /// Forward Euler at 10 points per hour with the given constants
    pub fn new(parameters: KineticParameters) -> Self {
        Self {
            parameters,
            method: SolverType::Euler,
            points_per_hour: DEFAULT_POINTS_PER_HOUR,
        }
    }

    /// Use another integration method
    pub fn with_method(mut self, method: SolverType) -> Self {
        self.method = method;
        self
    }

    /// Use another output resolution
    pub fn with_points_per_hour(mut self, points_per_hour: usize) -> Self {
        self.points_per_hour = points_per_hour;
        self
    }

    /// Kinetic constants
    pub fn parameters(&self) -> &KineticParameters {
        &self.parameters
    }

    /// Integration method
    pub fn method(&self) -> SolverType {
        self.method
    }

    /// Output resolution [points per hour]
    pub fn points_per_hour(&self) -> usize {
        self.points_per_hour
    }

    /// Time grid used for a run of `duration` hours
    pub fn configuration(&self, duration: f64) -> SolverConfiguration {
        SolverConfiguration::from_resolution(duration, self.points_per_hour)
    }

    /// Check inputs, constants and resolution before any computation
    pub fn validate(&self, inputs: &SimulationInputs) -> Result<(), FermentationError> {
        inputs.validate()?;
        self.parameters.validate()?;

        if self.points_per_hour == 0 || self.points_per_hour > MAX_TIME_STEPS {
            return Err(FermentationError::InvalidParameter {
                name: "points_per_hour",
                value: self.points_per_hour as f64,
            });
        }

        // Grid size is checked here so no trajectory is ever allocated for it
        let steps = (inputs.duration * self.points_per_hour as f64).floor();
        if steps > MAX_TIME_STEPS as f64 {
            return Err(FermentationError::InvalidParameter {
                name: "duration",
                value: inputs.duration,
            });
        }

        // Mass balance bounds every total: X ≤ X0 + Yxs·S0 and P ≤ Yps·S0
        let biomass_ceiling = inputs.initial_biomass + self.parameters.biomass_yield * inputs.initial_substrate;
        let ethanol_ceiling = self.parameters.ethanol_yield * inputs.initial_substrate;
        if !(biomass_ceiling * inputs.volume).is_finite() || !(ethanol_ceiling * inputs.volume).is_finite() {
            return Err(FermentationError::InvalidParameter {
                name: "initial_substrate",
                value: inputs.initial_substrate,
            });
        }
        Ok(())
    }

    /// Batch model and corrections for one run
    ///
    /// Exhaustion is corrected before the non-negativity projection so that
    /// depleted substrate ends at exactly zero.
    pub fn scenario(&self, inputs: &SimulationInputs) -> Scenario {
        let initial = SimulationState::from_concentrations(
            inputs.initial_biomass,
            inputs.initial_substrate,
            0.0,
            inputs.volume,
        );

        let model = BatchFermentation::new(
            self.parameters.clone(),
            inputs.volume,
            inputs.impeller_speed,
            initial,
        );

        Scenario::new(Box::new(model))
            .with_correction(Box::new(SubstrateExhaustion::from_parameters(&self.parameters)))
            .with_correction(Box::new(NonNegative))
    }

    /// Run one fermentation
    pub fn run(&self, inputs: &SimulationInputs) -> Result<SimulationResult, FermentationError> {
        self.validate(inputs)?;

        let scenario = self.scenario(inputs);
        let config = self.configuration(inputs.duration);
        let solver = self.method.solver();

        log::info!(
            "Running {} (S0={} g/L, V={} L, X0={} g/L, N={} rpm, t={} h) with {}, {} steps",
            scenario.get_model_name(),
            inputs.initial_substrate,
            inputs.volume,
            inputs.initial_biomass,
            inputs.impeller_speed,
            inputs.duration,
            solver.name(),
            config.time_steps
        );

        let trajectory = solver
            .solve(&scenario, &config)
            .map_err(FermentationError::Solver)?;

        let result = SimulationResult::from_solver_result(*inputs, &self.parameters, &trajectory)?;

        log::info!(
            "Run finished: X={:.2} g/L, S={:.2} g/L, P={:.2} g/L, {:.2} L ethanol",
            result.final_biomass,
            result.final_substrate,
            result.final_ethanol,
            result.ethanol_volume
        );

        Ok(result)
    }
}

/// Run one fermentation with the literature constants, Euler at 10 points per hour
pub fn simulate(inputs: &SimulationInputs) -> Result<SimulationResult, FermentationError> {
    Simulator::default().run(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_simulator() {
        let simulator = Simulator::default();
        assert_eq!(simulator.method(), SolverType::Euler);
        assert_eq!(simulator.points_per_hour(), 10);
        assert_eq!(simulator.parameters(), &KineticParameters::default());
    }

    #[test]
    fn test_grid_size() {
        let simulator = Simulator::default();
        assert_eq!(simulator.configuration(72.0).time_steps, 720);
        assert_eq!(simulator.configuration(12.0).time_steps, 120);

        // Sub-resolution durations still take one step
        let short = simulate(&SimulationInputs { duration: 0.05, ..SimulationInputs::default() }).unwrap();
        assert_eq!(short.len(), 2);
        assert_eq!(*short.time.last().unwrap(), 0.05);
    }

    #[test]
    fn test_oversized_grid_is_rejected() {
        let simulator = Simulator::default();

        for duration in [1e300, 1e9, 100_000.1] {
            let inputs = SimulationInputs { duration, ..SimulationInputs::default() };
            assert!(matches!(
                simulator.run(&inputs),
                Err(FermentationError::InvalidParameter { name: "duration", .. })
            ));
        }

        // The limit itself is accepted
        let at_limit = SimulationInputs { duration: 100_000.0, ..SimulationInputs::default() };
        assert!(simulator.validate(&at_limit).is_ok());

        let fine = Simulator::default().with_points_per_hour(MAX_TIME_STEPS + 1);
        assert!(matches!(
            fine.run(&SimulationInputs::default()),
            Err(FermentationError::InvalidParameter { name: "points_per_hour", .. })
        ));
    }

    #[test]
    fn test_overflowing_totals_are_rejected() {
        let simulator = Simulator::default();
        let cases = [
            SimulationInputs::new(1e300, 1e10, 1.0, 300.0, 12.0),
            SimulationInputs::new(50.0, 1e308, 1.0, 300.0, 12.0),
            SimulationInputs::new(1.5e308, 1.0, 1.5e308, 300.0, 12.0),
        ];

        for inputs in cases {
            assert!(inputs.validate().is_err() || simulator.validate(&inputs).is_err());
            assert!(matches!(
                simulator.run(&inputs),
                Err(FermentationError::InvalidParameter { .. })
            ));
        }

        // Large but representable totals still run
        let large = SimulationInputs::new(1e150, 1e150, 1.0, 300.0, 12.0);
        assert!(simulator.run(&large).is_ok());
    }

    #[test]
    fn test_zero_resolution_is_rejected() {
        let simulator = Simulator::default().with_points_per_hour(0);
        let result = simulator.run(&SimulationInputs::default());
        assert!(matches!(
            result,
            Err(FermentationError::InvalidParameter { name: "points_per_hour", .. })
        ));
    }

    #[test]
    fn test_invalid_constants_are_rejected() {
        let parameters = KineticParameters { biomass_yield: 0.0, ..KineticParameters::default() };
        let result = Simulator::new(parameters).run(&SimulationInputs::default());
        assert!(matches!(
            result,
            Err(FermentationError::InvalidParameter { name: "biomass_yield", .. })
        ));
    }

    #[test]
    fn test_scenario_corrections_order() {
        let scenario = Simulator::default().scenario(&SimulationInputs::default());
        let names: Vec<&str> = scenario.corrections().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["Substrate Exhaustion", "Non Negative"]);
    }

    #[test]
    fn test_rk4_run() {
        let result = Simulator::default()
            .with_method(SolverType::Rk4)
            .run(&SimulationInputs::default())
            .unwrap();
        assert_eq!(result.solver, "Runge Kutta (RK4)");
        assert!(result.final_substrate < 50.0);
    }
}
