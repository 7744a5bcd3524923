//! Numerical solvers
//!
//! This module provides traits and implementations for numerical solvers.
//! A numerical solver applies a numerical method to the equations provided
//! by a physical model within a specific scenario.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Physical model (equations)
//!    - Initial state
//!    - Boundary corrections (physical domain)
//!
//! 2. **Configuration** (`SolverConfiguration`) - the time grid
//!    - Total time and number of steps
//!
//! 3. **Solver** (`Solver` trait) - HOW to solve
//!    - Applies the numerical scheme
//!    - Independent of physics
//!
//! # Module Organization
//!
//! - **`traits`**: `Solver`, `SolverType`, `SolverConfiguration`, `SolverResult`
//! - **`boundary`**: `BoundaryCorrection` and the fermentation corrections
//! - **`scenario`**: `Scenario` (model + initial state + corrections)
//! - **`methods`**: `EulerSolver`, `RK4Solver`
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────────┐   ┌──────────────────────┐
//! │  Physical Model │   │ Boundary Corrections │
//! └────────┬────────┘   └──────────┬───────────┘
//!          └──────────┬────────────┘
//!            ┌────────▼────────┐
//!            │    Scenario     │ ← WHAT to solve
//!            └────────┬────────┘
//!            ┌────────▼─────────────┐
//!            │ Solver Configuration │ ← time grid
//!            └────────┬─────────────┘
//!            ┌────────▼────────┐
//!            │ Numerical Solver│ ← Euler, RK4
//!            └────────┬────────┘
//!            ┌────────▼────────┐
//!            │  Solver Result  │ ← trajectory + metadata
//!            └─────────────────┘
//! ```
//!
//! # One Time Step
//!
//! ```text
//! rates  = model.compute_physics(y)
//! rates  = scenario.correct_rates(y, rates, dt)     // e.g. substrate exhaustion
//! y_next = y + rates · dt
//! y_next = scenario.project_state(y_next)           // e.g. clamp at zero
//! validate_state(y_next)                            // NaN / Inf check
//! ```
//!
//! # Quick Start Example
//!
//! ```rust
//! use ferment_rs::models::{BatchFermentation, KineticParameters, SimulationState};
//! use ferment_rs::solver::{EulerSolver, NonNegative, Scenario, Solver, SolverConfiguration};
//!
//! let model = BatchFermentation::new(
//!     KineticParameters::default(),
//!     10.0,
//!     400.0,
//!     SimulationState::from_concentrations(1.0, 100.0, 0.0, 10.0),
//! );
//! let scenario = Scenario::new(Box::new(model)).with_correction(Box::new(NonNegative));
//!
//! let config = SolverConfiguration::from_resolution(24.0, 10);
//! let result = EulerSolver::new().solve(&scenario, &config).unwrap();
//!
//! assert_eq!(result.len(), 241);
//! ```
//!
//! # Error Handling
//!
//! Solver methods return `Result<T, String>`. Common errors:
//! - Invalid configuration (non-positive time, zero steps)
//! - Invalid scenario (empty or non-finite initial state)
//! - Numerical instability (NaN or Inf during the march)

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod boundary;
mod scenario;
mod methods;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{
    Solver,
    SolverConfiguration,
    SolverResult,
    SolverType,
    MAX_TIME_STEPS,
};

pub use boundary::{BoundaryCorrection, NonNegative, SubstrateExhaustion};
pub use scenario::Scenario;

pub use methods::{EulerSolver, RK4Solver};

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::physics::PhysicalState;

/// Validate physical state for numerical issues
///
/// Checks that the state does not contain NaN or Inf values, which would
/// indicate numerical instability or errors in the physics computation.
///
/// # Arguments
///
/// * `state` - Physical state to validate
/// * `step` - Current time step (for error reporting)
pub(crate) fn validate_state(state: &PhysicalState, step: usize) -> Result<(), String> {
    for (quantity, data) in &state.quantities {
        if data.has_non_finite() {
            return Err(format!(
                "NaN or Inf detected in {} at step {}. This indicates numerical instability. \
                 Try reducing the time step (increase the resolution).",
                quantity, step
            ));
        }
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
