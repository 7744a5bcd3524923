//! Physical model implementations
//!
//! - [`KineticParameters`]: literature constant set (strain + cost basis)
//! - [`BatchFermentation`]: batch bioethanol kinetics over total masses
//! - [`SimulationState`]: total biomass, substrate and ethanol masses

pub mod parameters;
pub mod batch_fermentation;

pub use parameters::KineticParameters;
pub use batch_fermentation::{BatchFermentation, SimulationState};
