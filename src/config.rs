//! Run configuration files
//!
//! A run can be described by a TOML file with three optional sections:
//!
//! ```toml
//! [inputs]
//! S0 = 120.0          # or initial_substrate
//! V = 250.0           # or volume
//! X0 = 2.0            # or initial_biomass
//! N = 350.0           # or impeller_speed
//! t = 48.0            # or duration
//!
//! [kinetics]
//! Ks = 1.0            # any KineticParameters field
//!
//! [solver]
//! method = "euler"    # or "rk4"
//! points_per_hour = 10
//! ```
//!
//! Missing keys take their default values, so an empty file is the
//! reference run.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::FermentationError;
use crate::models::KineticParameters;
use crate::simulation::{SimulationInputs, Simulator};
use crate::solver::SolverType;

// =================================================================================================
// Errors
// =================================================================================================

/// Failures while loading or saving a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// =================================================================================================
// Solver section
// =================================================================================================

/// Default output resolution: 10 points per simulated hour
pub const DEFAULT_POINTS_PER_HOUR: usize = 10;

fn default_points_per_hour() -> usize {
    DEFAULT_POINTS_PER_HOUR
}

/// `[solver]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Integration method
    #[serde(default)]
    pub method: SolverType,

    /// Output resolution, points per simulated hour
    #[serde(default = "default_points_per_hour")]
    pub points_per_hour: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            method: SolverType::default(),
            points_per_hour: DEFAULT_POINTS_PER_HOUR,
        }
    }
}

// =================================================================================================
// Run configuration
// =================================================================================================

/// Complete description of one run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Process inputs
    pub inputs: SimulationInputs,

    /// Kinetic constants
    pub kinetics: KineticParameters,

    /// Numerical settings
    pub solver: SolverSettings,
}

impl RunConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to pretty TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("Loaded run configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load `path` if given, otherwise return the defaults
    ///
    /// Unlike a missing key, a missing file that was explicitly requested
    /// is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Write the configuration to `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Build the simulator described by the `[kinetics]` and `[solver]` sections
    pub fn simulator(&self) -> Simulator {
        Simulator::new(self.kinetics.clone())
            .with_method(self.solver.method)
            .with_points_per_hour(self.solver.points_per_hour)
    }
}

// =================================================================================================
// Documented operating ranges
// =================================================================================================

/// Operating envelope the kinetic constants were fitted for
///
/// The simulation itself accepts any positive input; this check is applied
/// by front ends that want to stay inside the validated envelope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRanges {
    /// S0 bounds [g/L]
    pub initial_substrate: (f64, f64),
    /// V bounds [L]
    pub volume: (f64, f64),
    /// X0 bounds [g/L]
    pub initial_biomass: (f64, f64),
    /// N bounds [rpm]
    pub impeller_speed: (f64, f64),
    /// t bounds [h]
    pub duration: (f64, f64),
}

impl Default for InputRanges {
    fn default() -> Self {
        Self {
            initial_substrate: (50.0, 200.0),
            volume: (1.0, 500.0),
            initial_biomass: (0.1, 15.0),
            impeller_speed: (100.0, 400.0),
            duration: (12.0, 120.0),
        }
    }
}

impl InputRanges {
    /// Reject the first input lying outside its bounds (inclusive)
    pub fn check(&self, inputs: &SimulationInputs) -> Result<(), FermentationError> {
        let bounds = [
            self.initial_substrate,
            self.volume,
            self.initial_biomass,
            self.impeller_speed,
            self.duration,
        ];

        for ((name, value), (min, max)) in inputs.named_values().into_iter().zip(bounds) {
            if !(min..=max).contains(&value) {
                return Err(FermentationError::OutOfRange { name, value, min, max });
            }
        }
        Ok(())
    }
}
