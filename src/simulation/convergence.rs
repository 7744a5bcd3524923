//! Step-size convergence study
//!
//! The production grid (10 points per hour, forward Euler) is not universally
//! sufficient. A study reruns the same inputs while doubling the resolution
//! and reports how much the final concentrations still move, optionally
//! against an RK4 run at the finest resolution.

use crate::error::FermentationError;
use crate::simulation::{SimulationInputs, SimulationResult, Simulator};
use crate::solver::SolverType;

/// Final concentrations at one resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceLevel {
    /// Resolution [points per hour]
    pub points_per_hour: usize,
    /// Number of time steps
    pub time_steps: usize,
    /// Final biomass [g/L]
    pub final_biomass: f64,
    /// Final substrate [g/L]
    pub final_substrate: f64,
    /// Final ethanol [g/L]
    pub final_ethanol: f64,
}

impl ConvergenceLevel {
    fn from_result(points_per_hour: usize, result: &SimulationResult) -> Self {
        Self {
            points_per_hour,
            time_steps: result.len().saturating_sub(1),
            final_biomass: result.final_biomass,
            final_substrate: result.final_substrate,
            final_ethanol: result.final_ethanol,
        }
    }

    /// Largest relative difference of the three final concentrations
    pub fn max_relative_change(&self, other: &ConvergenceLevel) -> f64 {
        [
            relative_change(self.final_biomass, other.final_biomass),
            relative_change(self.final_substrate, other.final_substrate),
            relative_change(self.final_ethanol, other.final_ethanol),
        ]
        .into_iter()
        .fold(0.0, f64::max)
    }
}

fn relative_change(a: f64, b: f64) -> f64 {
    if a == b {
        return 0.0;
    }
    (a - b).abs() / a.abs().max(b.abs())
}

/// Refinement study settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceStudy {
    /// Coarsest resolution [points per hour]
    pub base_points_per_hour: usize,
    /// Number of doublings after the base level
    pub levels: usize,
    /// Also run RK4 at the finest resolution
    pub rk4_reference: bool,
}

impl Default for ConvergenceStudy {
    fn default() -> Self {
        Self {
            base_points_per_hour: 10,
            levels: 3,
            rk4_reference: true,
        }
    }
}

impl ConvergenceStudy {
    /// Run the study with the simulator's constants and method
    pub fn run(
        &self,
        simulator: &Simulator,
        inputs: &SimulationInputs,
    ) -> Result<ConvergenceReport, FermentationError> {
        let mut levels = Vec::with_capacity(self.levels + 1);

        for level in 0..=self.levels {
            let points_per_hour = self.base_points_per_hour << level;
            let result = simulator
                .clone()
                .with_points_per_hour(points_per_hour)
                .run(inputs)?;
            levels.push(ConvergenceLevel::from_result(points_per_hour, &result));
        }

        let changes = levels
            .windows(2)
            .map(|pair| pair[1].max_relative_change(&pair[0]))
            .collect();

        let reference = if self.rk4_reference {
            let points_per_hour = self.base_points_per_hour << self.levels;
            let result = simulator
                .clone()
                .with_method(SolverType::Rk4)
                .with_points_per_hour(points_per_hour)
                .run(inputs)?;
            Some(ConvergenceLevel::from_result(points_per_hour, &result))
        } else {
            None
        };

        Ok(ConvergenceReport { levels, changes, reference })
    }
}

/// Outcome of a [`ConvergenceStudy`]
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceReport {
    /// One entry per resolution, coarsest first
    pub levels: Vec<ConvergenceLevel>,
    /// Max relative change between successive levels
    pub changes: Vec<f64>,
    /// RK4 at the finest resolution
    pub reference: Option<ConvergenceLevel>,
}

impl ConvergenceReport {
    /// Finest level
    pub fn finest(&self) -> Option<&ConvergenceLevel> {
        self.levels.last()
    }

    /// Max relative deviation of the finest level from the RK4 reference
    pub fn reference_deviation(&self) -> Option<f64> {
        let finest = self.finest()?;
        self.reference.as_ref().map(|reference| finest.max_relative_change(reference))
    }

    /// True if the last refinement and the reference deviation are within `tolerance`
    pub fn is_converged(&self, tolerance: f64) -> bool {
        let last_change = self.changes.last().copied().unwrap_or(0.0);
        let deviation = self.reference_deviation().unwrap_or(0.0);
        let converged = last_change <= tolerance && deviation <= tolerance;

        if !converged {
            log::warn!(
                "Not converged at tolerance {:e}: last refinement changed {:e}, RK4 deviation {:e}",
                tolerance,
                last_change,
                deviation
            );
        }
        converged
    }
}
