//! Numerical solver traits and types
//!
//! # Design Philosophy
//!
//! - `Solver` trait: the stable interface every time integrator implements
//! - `SolverType`: run-time choice of integrator (Euler, RK4)
//! - `SolverConfiguration`: the time grid (duration and number of steps)
//! - `SolverResult`: trajectory on that grid, plus string metadata

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::physics::{PhysicalQuantity, PhysicalState};
use crate::solver::{EulerSolver, RK4Solver, Scenario};

// =================================================================================================
// Solver Type
// =================================================================================================

/// Time integration method
///
/// Both methods are explicit and fixed-step.
///
/// # Example
///
/// ```rust
/// use ferment_rs::solver::SolverType;
///
/// let solver = SolverType::Rk4.solver();
/// assert_eq!(solver.name(), "Runge Kutta (RK4)");
/// assert_eq!("euler".parse::<SolverType>().unwrap(), SolverType::Euler);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverType {
    /// Forward Euler, first order
    #[default]
    Euler,

    /// Classical Runge-Kutta, fourth order
    Rk4,
}

impl SolverType {
    /// Get name identifier
    pub fn name(&self) -> &'static str {
        match self {
            SolverType::Euler => "euler",
            SolverType::Rk4 => "rk4",
        }
    }

    /// Build the corresponding solver
    pub fn solver(&self) -> Box<dyn Solver> {
        match self {
            SolverType::Euler => Box::new(EulerSolver::new()),
            SolverType::Rk4 => Box::new(RK4Solver::new()),
        }
    }
}

impl fmt::Display for SolverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for SolverType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "euler" => Ok(SolverType::Euler),
            "rk4" => Ok(SolverType::Rk4),
            other => Err(format!("Unknown solver '{}', expected 'euler' or 'rk4'", other)),
        }
    }
}

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Largest grid a solve accepts
///
/// Every step stores a full state, so the trajectory is allocated up front;
/// 10⁶ steps is about 11 years of fermentation at 10 points per hour.
pub const MAX_TIME_STEPS: usize = 1_000_000;

/// Time grid for a time-evolution solve
///
/// The grid is uniform: `time_steps + 1` points from 0 to `total_time`.
///
/// # Examples
///
/// ```rust
/// use ferment_rs::solver::SolverConfiguration;
///
/// // 72 h at 10 points per hour -> 720 steps, 721 points
/// let config = SolverConfiguration::from_resolution(72.0, 10);
/// assert_eq!(config.time_steps, 720);
/// assert!((config.dt() - 0.1).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfiguration {
    /// Total simulated time (hours for the fermentation model)
    pub total_time: f64,

    /// Number of time steps
    pub time_steps: usize,
}

impl SolverConfiguration {
    /// Create a time resolution configuration
    pub fn time_evolution(total_time: f64, time_steps: usize) -> Self {
        Self { total_time, time_steps }
    }

    /// Create a configuration from a resolution in points per unit time
    ///
    /// `time_steps = floor(total_time · points_per_unit)`, never less than 1.
    pub fn from_resolution(total_time: f64, points_per_unit: usize) -> Self {
        let steps = (total_time * points_per_unit as f64).floor();
        let time_steps = if steps.is_finite() && steps >= 1.0 { steps as usize } else { 1 };
        Self::time_evolution(total_time, time_steps)
    }

    /// Step size
    pub fn dt(&self) -> f64 {
        self.total_time / self.time_steps as f64
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.total_time.is_finite() || self.total_time <= 0.0 {
            return Err("Total time must be positive".to_string());
        }
        if self.time_steps == 0 {
            return Err("TimeSteps must be greater than 0".to_string());
        }
        if self.time_steps > MAX_TIME_STEPS {
            return Err(format!(
                "{} time steps exceed the limit of {}",
                self.time_steps, MAX_TIME_STEPS
            ));
        }
        Ok(())
    }
}

// =================================================================================================
// Solver result
// =================================================================================================

/// Trajectory produced by a solver
///
/// `time_points[i]` is the time of `state_trajectory[i]`; both include the
/// initial condition, so their length is `time_steps + 1`.
#[derive(Clone, Debug)]
pub struct SolverResult {
    /// Time grid
    pub time_points: Vec<f64>,

    /// State at every time point
    pub state_trajectory: Vec<PhysicalState>,

    /// Last state
    pub final_state: PhysicalState,

    /// Diagnostics (solver name, dt, ...)
    pub metadata: HashMap<String, String>,
}

impl SolverResult {
    /// Create a result
    pub fn new(
        time_points: Vec<f64>,
        state_trajectory: Vec<PhysicalState>,
        final_state: PhysicalState,
    ) -> Self {
        Self {
            time_points,
            state_trajectory,
            final_state,
            metadata: HashMap::new(),
        }
    }

    /// Add a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Get a metadata entry
    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Number of stored time points
    pub fn len(&self) -> usize {
        self.time_points.len()
    }

    /// True when nothing was stored
    pub fn is_empty(&self) -> bool {
        self.time_points.is_empty()
    }

    /// Time series of a scalar quantity, `None` if any state lacks it
    pub fn scalar_series(&self, quantity: PhysicalQuantity) -> Option<Vec<f64>> {
        self.state_trajectory
            .iter()
            .map(|state| state.scalar(quantity))
            .collect()
    }
}

// =================================================================================================
// Solver trait
// =================================================================================================

/// Trait for numerical solvers
///
/// A solver applies a numerical method to the equations of the scenario's
/// model. It never knows which physics it is integrating.
pub trait Solver: Send + Sync {
    /// Integrate the scenario over the configured time grid
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<SolverResult, String>;

    /// Solver name
    fn name(&self) -> &str;
}
