//! Runge-Kutta 4 (RK4) numerical solver
//!
//! # Mathematical Background
//!
//! The classical fourth-order Runge-Kutta method uses a weighted average of
//! four slope estimates:
//!
//! ```text
//! k₁ = f(yₙ)
//! k₂ = f(yₙ + dt/2 · k₁)
//! k₃ = f(yₙ + dt/2 · k₂)
//! k₄ = f(yₙ + dt · k₃)
//!
//! yₙ₊₁ = yₙ + dt/6 · (k₁ + 2k₂ + 2k₃ + k₄)
//! ```
//!
//! # Role in this crate
//!
//! Euler is the production scheme. RK4 on the same fixed grid is the
//! reference used to check that the Euler answer has converged; it is not
//! adaptive.
//!
//! # Boundary corrections
//!
//! Intermediate stage states are projected (e.g. clamped at zero) before
//! the model is evaluated on them, so the kinetics never see a negative
//! concentration. The rate correction runs once, on the combined slope,
//! exactly as it does for Euler.
//!
//! | Method | Order | Evals/Step | Error  |
//! |--------|-------|------------|--------|
//! | Euler  | 1     | 1          | O(dt)  |
//! | RK4    | 4     | 4          | O(dt⁴) |

use crate::physics::PhysicalState;
use crate::solver::{self, Scenario, SolverConfiguration, SolverResult, Solver};

// =================================================================================================
// RK4 Solver
// =================================================================================================

/// Classical fourth-order Runge-Kutta solver
///
/// # Example
///
/// ```rust
/// use ferment_rs::solver::{RK4Solver, Solver};
///
/// let solver = RK4Solver::new();
/// assert_eq!(solver.name(), "Runge Kutta (RK4)");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RK4Solver;

impl RK4Solver {
    /// Create a new RK4 solver
    pub fn new() -> Self {
        Self
    }

    /// One RK4 step: the combined slope (k₁ + 2k₂ + 2k₃ + k₄)/6
    fn slope(scenario: &Scenario, state: &PhysicalState, dt: f64) -> PhysicalState {
        let model = &scenario.model;

        let k1 = model.compute_physics(state);

        let y2 = scenario.project_state(state.clone() + k1.clone() * (dt / 2.0));
        let k2 = model.compute_physics(&y2);

        let y3 = scenario.project_state(state.clone() + k2.clone() * (dt / 2.0));
        let k3 = model.compute_physics(&y3);

        let y4 = scenario.project_state(state.clone() + k3.clone() * dt);
        let k4 = model.compute_physics(&y4);

        (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (1.0 / 6.0)
    }
}

impl Solver for RK4Solver {
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration
    ) -> Result<SolverResult, String> {

        // ====== Step 1: Validation ======

        config.validate()?;
        scenario.validate()?;

        let total_time = config.total_time;
        let time_steps = config.time_steps;

        // ====== Step 2: Setup ======

        let dt = config.dt();

        let mut state = scenario.initial_state.clone();

        let mut time_points = Vec::with_capacity(time_steps + 1);
        let mut state_trajectory = Vec::with_capacity(time_steps + 1);

        time_points.push(0.0);
        state_trajectory.push(state.clone());

        // ====== Step 3: Time Integration ======

        for step in 0..time_steps {
            let rates = Self::slope(scenario, &state, dt);
            let rates = scenario.correct_rates(&state, rates, dt);

            state = scenario.project_state(state + rates * dt);

            state_trajectory.push(state.clone());
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
        "Runge Kutta (RK4)"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{PhysicalData, PhysicalModel, PhysicalQuantity};
    use crate::solver::EulerSolver;
    use approx::assert_relative_eq;

    const Y: PhysicalQuantity = PhysicalQuantity::Custom("y");

    /// dy/dt = -k * y on a vector of identical points
    struct ExponentialDecay {
        points: usize,
        decay_rate: f64,
    }

    impl PhysicalModel for ExponentialDecay {
        fn compute_physics(&self, state: &PhysicalState) -> PhysicalState {
            state.clone() * -self.decay_rate
        }

        fn setup_initial_state(&self) -> PhysicalState {
            PhysicalState::new(Y, PhysicalData::uniform_vector(self.points, 1.0))
        }

        fn name(&self) -> &str {
            "Exponential Decay"
        }
    }

    fn decay_scenario() -> Scenario {
        Scenario::new(Box::new(ExponentialDecay { points: 3, decay_rate: 0.3 }))
    }

    #[test]
    fn test_rk4_solver_creation() {
        assert_eq!(RK4Solver::default().name(), "Runge Kutta (RK4)");
    }

    #[test]
    fn test_rk4_accuracy_on_decay() {
        let config = SolverConfiguration::time_evolution(5.0, 50);
        let result = RK4Solver::new().solve(&decay_scenario(), &config).unwrap();

        let exact = (-0.3_f64 * 5.0).exp();
        let final_value = result.final_state.get(Y).unwrap().try_as_vector().unwrap()[0];
        assert_relative_eq!(final_value, exact, max_relative = 1e-6);
    }

    #[test]
    fn test_rk4_more_accurate_than_euler() {
        let config = SolverConfiguration::time_evolution(5.0, 20);
        let exact = (-0.3_f64 * 5.0).exp();

        let rk4 = RK4Solver::new().solve(&decay_scenario(), &config).unwrap();
        let euler = EulerSolver::new().solve(&decay_scenario(), &config).unwrap();

        let rk4_error = (rk4.final_state.get(Y).unwrap().try_as_vector().unwrap()[0] - exact).abs();
        let euler_error = (euler.final_state.get(Y).unwrap().try_as_vector().unwrap()[0] - exact).abs();

        assert!(rk4_error * 100.0 < euler_error, "rk4 {rk4_error} vs euler {euler_error}");
    }

    #[test]
    fn test_rk4_trajectory_shape() {
        let config = SolverConfiguration::time_evolution(1.0, 8);
        let result = RK4Solver::new().solve(&decay_scenario(), &config).unwrap();

        assert_eq!(result.len(), 9);
        assert_eq!(*result.time_points.last().unwrap(), 1.0);
        assert_eq!(result.get_metadata("time steps"), Some("8"));
    }

    #[test]
    fn test_rk4_rejects_invalid_configuration() {
        let config = SolverConfiguration::time_evolution(-1.0, 8);
        assert!(RK4Solver::new().solve(&decay_scenario(), &config).is_err());
    }
}
