//! Export module for fermentation results.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module, so a
//! new format is a new file and existing code stays untouched.
//!
//! # Available formats
//!
//! | Format  | Module  |
//! |---------|---------|
//! | CSV     | [`csv`] |
//!
//! # Usage example
//!
//! ```rust,no_run
//! use ferment_rs::output::export::{CsvExporter, Exporter};
//! use ferment_rs::simulation::{simulate, SimulationInputs};
//!
//! let result = simulate(&SimulationInputs::default()).unwrap();
//! let exporter = CsvExporter::default();
//!
//! // Full export (all time points)
//! exporter.export(&result, None, "run.csv").unwrap();
//!
//! // Downsampled export to 100 points
//! exporter.export(&result, Some(100), "run_light.csv").unwrap();
//! ```

pub mod csv;

pub use csv::{export_fermentation_csv, CsvConfig, CsvError, CsvExporter, CsvMetadata};

use std::path::Path;

use crate::simulation::SimulationResult;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type, so the
/// caller can react to the precise failure without boxing.
///
/// # Parameter `n_points`
///
/// - `None`: exports every time point
/// - `Some(n)`: uniformly downsamples to `n` points, always keeping the
///   **first and last** points (initial charge and end of run)
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Export the time series of one run to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the path is invalid or the directory does not exist
    /// - `result` contains no data or non-finite values
    fn export<P: AsRef<Path>>(
        &self,
        result: &SimulationResult,
        n_points: Option<usize>,
        path: P,
    ) -> Result<(), Self::Error>;
}

/// Indices of `n_points` uniformly spread over `0..len`, first and last included
///
/// `None`, `n_points >= len` and `len <= 2` keep every index.
pub(crate) fn downsample_indices(len: usize, n_points: Option<usize>) -> Vec<usize> {
    match n_points {
        Some(n) if n < len && len > 2 => {
            let n = n.max(2);
            let last = len - 1;
            let mut indices: Vec<usize> = (0..n)
                .map(|i| (i as f64 * last as f64 / (n - 1) as f64).round() as usize)
                .collect();
            indices.dedup();
            indices
        }
        _ => (0..len).collect(),
    }
}
