//! Visualization module for fermentation results
//!
//! This module renders simulation results using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Plot configuration and themes (`PlotConfig`)
//! - **fermentation**: Two-panel time-series plot (`plot_fermentation`)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ferment_rs::output::visualization::{plot_fermentation, PlotConfig};
//! use ferment_rs::simulation::{simulate, SimulationInputs};
//!
//! let result = simulate(&SimulationInputs::default()).unwrap();
//!
//! // Dark theme, default title
//! plot_fermentation(&result, "run.png", None).unwrap();
//!
//! // White theme for reports
//! plot_fermentation(&result, "run.svg", Some(&PlotConfig::light())).unwrap();
//! ```

pub mod config;
pub mod fermentation;

pub use config::{PlotConfig, NO_TITLE};
pub use fermentation::plot_fermentation;
