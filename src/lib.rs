//! ferment-rs: Batch Bioethanol Fermentation Simulator
//!
//! Predicts the time evolution of biomass, residual substrate and ethanol
//! in a stirred batch fermenter from five inputs (initial substrate, broth
//! volume, initial biomass, impeller speed, run time), plus the ethanol
//! volume produced and its cost.
//!
//! # Architecture
//!
//! ferment-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Physical models define equations (what to solve)
//!    - Numerical solvers provide methods (how to solve)
//!    - Boundary corrections keep the state physical (substrate exhaustion,
//!      non-negativity) without touching either
//!
//! 2. **Explicit constants**
//!    - The kinetic constant set is a value passed to every run, never
//!      global state, so another strain is another value
//!
//! # Model
//!
//! ```text
//! μ     = μmax · S/(Ks + S) · 1/(1 + S/Ksi) · max(0, 1 - P/Pmax)
//! μmax  = μmax,base · (N / 400)^0.6
//!
//! dX/dt = μ · X
//! dS/dt = -(1/Yxs) · dX/dt
//! dP/dt = -Yps · dS/dt
//! ```
//!
//! integrated on total masses (grams) by forward Euler at 10 points per hour.
//!
//! # Quick Start
//!
//! ```rust
//! use ferment_rs::prelude::*;
//!
//! # fn main() -> Result<(), FermentationError> {
//! let inputs = SimulationInputs::new(50.0, 100.0, 1.0, 300.0, 72.0);
//! let result = simulate(&inputs)?;
//!
//! println!("{}", Summary(&result));
//! assert_eq!(result.time.len(), 721);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: State containers and the model trait (equations)
//! - [`models`]: Kinetic constants and the batch fermentation model
//! - [`solver`]: Numerical solvers and boundary corrections (methods)
//! - [`simulation`]: Run façade, post-processing, batch runs, convergence study
//! - [`output`]: Summary, plots and CSV export
//! - [`config`]: TOML run configuration and documented input ranges
//! - [`error`]: Crate error type

// Core modules
pub mod physics;

pub mod models;
pub mod solver;

pub mod simulation;

// Outer surfaces
pub mod config;
pub mod error;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use ferment_rs::prelude::*;
    //! ```
    pub use crate::error::FermentationError;
    pub use crate::models::{BatchFermentation, KineticParameters, SimulationState};
    pub use crate::output::Summary;
    pub use crate::physics::{PhysicalData,
                             PhysicalQuantity,
                             PhysicalState,
                             PhysicalModel};
    pub use crate::simulation::{simulate,
                                SimulationInputs,
                                SimulationResult,
                                Simulator};
    pub use crate::solver::{Solver,
                            SolverConfiguration,
                            SolverType,
                            Scenario,
                            SolverResult,
                            EulerSolver,
                            RK4Solver};
}
