//! CSV export for fermentation results
//!
//! Writes the time grid and the three concentration series to CSV
//! (Comma-Separated Values), readable by spreadsheets, pandas, MATLAB and
//! most data analysis tools.
//!
//! # Features
//!
//! - **Metadata support**: optional comment header with run inputs and solver
//! - **Customizable**: delimiter, decimal separator, precision, headers
//! - **Downsampling**: uniform, first and last points always kept
//! - **Validation**: empty data, mismatched lengths, NaN or Inf
//!
//! # Example output
//!
//! ```csv
//! # Batch Fermentation Simulation Data
//! # Generated: 2026-10-16T09:30:00+00:00
//! # Solver: Forward Euler
//! # Duration: 72 h
//! # Time Steps: 720
//! #
//! Time (h),Biomass (g/L),Substrate (g/L),Ethanol (g/L)
//! 0.000000,1.000000,50.000000,0.000000
//! 0.100000,1.016539,49.966922,0.015877
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::output::export::{downsample_indices, Exporter};
use crate::simulation::SimulationResult;

// =============================================================================
// Errors
// =============================================================================

/// CSV export failures
#[derive(Debug, Error)]
pub enum CsvError {
    /// Nothing to write
    #[error("Empty data: time and concentration series must not be empty")]
    EmptyData,

    /// A series does not match the time grid
    #[error("Data length mismatch: {column} has {found} points versus {expected} time points")]
    LengthMismatch {
        /// Offending column
        column: String,
        /// Time grid length
        expected: usize,
        /// Column length
        found: usize,
    },

    /// NaN or Inf in a series
    #[error("Invalid data: NaN or Inf detected in {0}")]
    NonFinite(String),

    /// File creation or write error
    #[error("CSV write error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use ferment_rs::output::export::CsvConfig;
///
/// let config = CsvConfig::european().precision(3);
/// assert_eq!(config.delimiter, ';');
/// assert_eq!(config.decimal_separator, ',');
/// ```
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Column headers: time, biomass, substrate, ethanol
    pub headers: [String; 4],
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            headers: [
                "Time (h)".to_string(),
                "Biomass (g/L)".to_string(),
                "Substrate (g/L)".to_string(),
                "Ethanol (g/L)".to_string(),
            ],
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct CsvMetadata {
    /// Solver name (e.g. "Forward Euler")
    pub solver_name: Option<String>,

    /// Run duration [h]
    pub duration: Option<f64>,

    /// Number of time steps
    pub time_steps: Option<usize>,

    /// Run inputs as (label, value) pairs
    pub inputs: Vec<(String, f64)>,

    /// Additional custom entries
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Metadata describing one run: solver, grid and the five inputs
    pub fn from_result(result: &SimulationResult) -> Self {
        let inputs = &result.inputs;

        Self {
            solver_name: Some(result.solver.clone()),
            duration: result.time.last().copied(),
            time_steps: Some(result.len().saturating_sub(1)),
            inputs: vec![
                ("Initial Substrate S0 (g/L)".to_string(), inputs.initial_substrate),
                ("Volume V (L)".to_string(), inputs.volume),
                ("Initial Biomass X0 (g/L)".to_string(), inputs.initial_biomass),
                ("Impeller Speed N (rpm)".to_string(), inputs.impeller_speed),
                ("Duration t (h)".to_string(), inputs.duration),
            ],
            custom: Vec::new(),
        }
    }

    /// Add custom entry
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn write_metadata_header<W: Write>(out: &mut W, metadata: &CsvMetadata) -> Result<(), CsvError> {
    writeln!(out, "# Batch Fermentation Simulation Data")?;
    writeln!(out, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(solver) = &metadata.solver_name {
        writeln!(out, "# Solver: {}", solver)?;
    }
    if let Some(duration) = metadata.duration {
        writeln!(out, "# Duration: {} h", duration)?;
    }
    if let Some(time_steps) = metadata.time_steps {
        writeln!(out, "# Time Steps: {}", time_steps)?;
    }
    for (label, value) in &metadata.inputs {
        writeln!(out, "# {}: {}", label, value)?;
    }
    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")?;
    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

fn validate(result: &SimulationResult, headers: &[String; 4]) -> Result<(), CsvError> {
    if result.time.is_empty() {
        return Err(CsvError::EmptyData);
    }

    let columns = [&result.time, &result.biomass, &result.substrate, &result.ethanol];

    for (header, column) in headers.iter().zip(columns) {
        if column.len() != result.time.len() {
            return Err(CsvError::LengthMismatch {
                column: header.clone(),
                expected: result.time.len(),
                found: column.len(),
            });
        }
        if column.iter().any(|v| !v.is_finite()) {
            return Err(CsvError::NonFinite(header.clone()));
        }
    }
    Ok(())
}

// =============================================================================
// Exporter
// =============================================================================

/// CSV implementation of [`Exporter`]
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    /// Formatting options
    pub config: CsvConfig,
}

impl CsvExporter {
    /// Exporter with the given configuration
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    /// Write CSV text for `result` to any writer
    pub fn write<W: Write>(
        &self,
        result: &SimulationResult,
        n_points: Option<usize>,
        out: &mut W,
    ) -> Result<(), CsvError> {
        let config = &self.config;
        validate(result, &config.headers)?;

        if config.include_metadata {
            if let Some(metadata) = &config.metadata {
                write_metadata_header(out, metadata)?;
            }
        }

        let delimiter = config.delimiter.to_string();
        let delimiter = delimiter.as_str();
        writeln!(out, "{}", config.headers.join(delimiter))?;

        for i in downsample_indices(result.len(), n_points) {
            let row = [result.time[i], result.biomass[i], result.substrate[i], result.ethanol[i]]
                .map(|value| format_number(value, config));
            writeln!(out, "{}", row.join(delimiter))?;
        }

        Ok(())
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export<P: AsRef<Path>>(
        &self,
        result: &SimulationResult,
        n_points: Option<usize>,
        path: P,
    ) -> Result<(), Self::Error> {
        let mut out = BufWriter::new(File::create(path.as_ref())?);
        self.write(result, n_points, &mut out)?;
        out.flush()?;

        log::info!("Exported {} to {}", result.solver, path.as_ref().display());
        Ok(())
    }
}

/// Export one run with an optional configuration (defaults if `None`)
///
/// ```rust,no_run
/// use ferment_rs::output::export::export_fermentation_csv;
/// use ferment_rs::simulation::{simulate, SimulationInputs};
///
/// let result = simulate(&SimulationInputs::default()).unwrap();
/// export_fermentation_csv(&result, "run.csv", None).unwrap();
/// ```
pub fn export_fermentation_csv<P: AsRef<Path>>(
    result: &SimulationResult,
    path: P,
    config: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    let exporter = CsvExporter::new(config.cloned().unwrap_or_default());
    exporter.export(result, None, path)
}

// =================================================================================================
// Tests
// =================================================================================================
