//! Physical models
//!
//! This module provides traits and types for physical models.
//! A physical model encapsulates the equations of a system (here, the
//! kinetics of a batch fermentation), never the numerical method used to
//! integrate them.
//!
//! # Core Concepts
//!
//! - **Physical Model**: Computes the time derivatives at a given state
//! - **Physical State**: Container for all tracked quantities (biomass, substrate, ethanol)
//! - **Physical Quantity**: Type-safe identifier for physical variables
//!
//! # Example
//!
//! ```rust
//! use ferment_rs::physics::{PhysicalModel, PhysicalState, PhysicalQuantity, PhysicalData};
//!
//! struct Decay;
//!
//! impl PhysicalModel for Decay {
//!     fn compute_physics(&self, state: &PhysicalState) -> PhysicalState {
//!         state.clone() * -0.1
//!     }
//!
//!     fn setup_initial_state(&self) -> PhysicalState {
//!         PhysicalState::new(PhysicalQuantity::Substrate, PhysicalData::Scalar(1.0))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Decay"
//!     }
//! }
//!
//! let model = Decay;
//! let rates = model.compute_physics(&model.setup_initial_state());
//! assert_eq!(rates.scalar(PhysicalQuantity::Substrate), Some(-0.1));
//! ```
//!
//! # Available Models
//!
//! - **Batch fermentation** ([`crate::models::BatchFermentation`]): Monod growth with
//!   substrate and ethanol inhibition

pub mod traits;
pub mod data;

pub use data::PhysicalData;
pub use traits::{
    PhysicalModel,
    PhysicalQuantity,
    PhysicalState,
};
