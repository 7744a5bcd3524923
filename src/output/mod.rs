//! Output module for fermentation results
//!
//! This module presents simulation results in three forms:
//! - **Summary**: the five headline figures as text
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV data for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── summary.rs          ← Text summary
//! ├── visualization/      ← Plots and graphics
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── fermentation.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ferment_rs::output::{export_fermentation_csv, plot_fermentation, Summary};
//! use ferment_rs::simulation::{simulate, SimulationInputs};
//!
//! let result = simulate(&SimulationInputs::default()).unwrap();
//!
//! println!("{}", Summary(&result));
//! plot_fermentation(&result, "run.png", None).unwrap();
//! export_fermentation_csv(&result, "run.csv", None).unwrap();
//! ```
//!
//! Everything here reads a finished [`SimulationResult`](crate::simulation::SimulationResult);
//! none of it feeds back into the simulation.

pub mod export;
pub mod summary;
pub mod visualization;

pub use summary::Summary;

pub use visualization::{plot_fermentation, PlotConfig};

pub use export::{export_fermentation_csv, CsvConfig, CsvExporter, Exporter};
