//! Forward Euler numerical solver
//!
//! # Mathematical Background
//!
//! The Forward Euler method is the simplest explicit time-stepping scheme
//! for ordinary differential equations:
//!
//! ```text
//! dy/dt = f(y)
//!
//! y_{n+1} = y_n + dt · f(y_n)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate (global error ~ O(dt))
//! - **Complexity**: 1 function evaluation per step
//! - **Stability**: conditionally stable; dt must be small compared to the
//!   fastest time scale of the model (1/μmax ≈ 2.5 h for the fermentation
//!   model, against dt = 0.1 h at the default resolution)
//!
//! For the fermentation model Euler has a useful property: since every
//! rate is a fixed multiple of dX/dt, the stoichiometric balance
//! `Yxs · (S₀ - Sₙ) = Xₙ - X₀` is kept exactly at every step, whatever dt.
//!
//! # Example
//!
//! ```rust,ignore
//! use ferment_rs::solver::{EulerSolver, Solver, SolverConfiguration};
//!
//! let solver = EulerSolver::new();
//! let config = SolverConfiguration::from_resolution(72.0, 10);
//!
//! let result = solver.solve(&scenario, &config)?;
//! ```

use crate::physics::PhysicalState;
use crate::solver::{self, Scenario, SolverConfiguration, SolverResult, Solver};

// =================================================================================================
// Forward Euler Solver
// =================================================================================================

/// Forward Euler solver
///
/// # Algorithm
///
/// 1. Start with the scenario's initial state y₀
/// 2. For each time step n = 0, 1, ..., N-1:
///    - rates = f(yₙ)
///    - rates = boundary corrections (yₙ, rates, dt)
///    - yₙ₊₁ = project(yₙ + dt · rates)
/// 3. Return the complete trajectory
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerSolver;

impl EulerSolver {
    /// Create a new Forward Euler solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferment_rs::solver::{EulerSolver, Solver};
    ///
    /// let solver = EulerSolver::new();
    /// assert_eq!(solver.name(), "Forward Euler");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for EulerSolver {

    fn solve(&self, scenario: &Scenario, config: &SolverConfiguration) -> Result<SolverResult, String> {

        // ====== Step 1: Validation ======

        config.validate()?;
        scenario.validate()?;

        let total_time = config.total_time;
        let time_steps = config.time_steps;

        // ====== Step 2: Setup ======

        let dt = config.dt();

        let mut state = scenario.initial_state.clone();

        // Reserve exact capacity to avoid reallocation during integration
        let mut time_points = Vec::with_capacity(time_steps + 1);
        let mut state_trajectory = Vec::with_capacity(time_steps + 1);

        time_points.push(0.0);
        state_trajectory.push(state.clone());

        // ====== Step 3: Time Integration ======

        for step in 0..time_steps {
            // f(y_n)
            let rates: PhysicalState = scenario.model.compute_physics(&state);

            // Boundary correction before the update (substrate exhaustion)
            let rates = scenario.correct_rates(&state, rates, dt);

            // y_{n+1} = y_n + dt * f(y_n), then projection (non-negativity)
            state = scenario.project_state(state + rates * dt);

            state_trajectory.push(state.clone());

            // Computed from the index, not accumulated: the last point is total_time
            time_points.push(total_time * (step + 1) as f64 / time_steps as f64);

            solver::validate_state(&state, step + 1)?;
        }

        // ====== Step 4: Build Result ======

        let mut result = SolverResult::new(time_points, state_trajectory, state);

        result.add_metadata("solver", self.name());
        result.add_metadata("time steps", &time_steps.to_string());
        result.add_metadata("dt", &dt.to_string());
        result.add_metadata("total time", &total_time.to_string());

        Ok(result)
    }

    fn name(&self) -> &str {
        "Forward Euler"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
