//! Numerical methods for solving differential equations
//!
//! This module contains concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//!
//! # Available Methods
//!
//! - **[`EulerSolver`]**: Forward Euler method
//!   - Order: First-order O(dt)
//!   - Cost: 1 function evaluation per step
//!   - Use: production fermentation runs (mass balance exact per step)
//!
//! - **[`RK4Solver`]**: Classical fourth-order Runge-Kutta
//!   - Order: Fourth-order O(dt⁴)
//!   - Cost: 4 function evaluations per step
//!   - Use: reference solution for convergence checks
//!
//! Both are fixed-step. Each solver is stateless and can be reused for any
//! number of simulations, from any number of threads.

pub mod euler;
mod rk4;

pub use euler::EulerSolver;
pub use rk4::RK4Solver;
