//! Crate error type
//!
//! The simulation core has a single failure mode, [`FermentationError::InvalidParameter`],
//! raised before any computation. Everything else here belongs to the outer
//! surfaces (range checks, configuration files, export, plotting).

use thiserror::Error;

use crate::config::ConfigError;
use crate::output::export::CsvError;

/// Errors raised by this crate
#[derive(Debug, Error)]
pub enum FermentationError {
    /// An input or constant is non-positive or not finite
    #[error("invalid parameter `{name}` = {value}: all input parameters must be greater than 0")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// An input lies outside the documented operating range
    #[error("`{name}` = {value} is outside the supported range [{min}, {max}]")]
    OutOfRange {
        /// Parameter name
        name: &'static str,
        /// Rejected value
        value: f64,
        /// Lower bound (inclusive)
        min: f64,
        /// Upper bound (inclusive)
        max: f64,
    },

    /// Numerical failure reported by a solver
    #[error("solver failure: {0}")]
    Solver(String),

    /// Configuration file could not be read or parsed
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Export failed
    #[error(transparent)]
    Export(#[from] CsvError),

    /// Plot rendering failed
    #[error("plotting failed: {0}")]
    Plot(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = FermentationError::InvalidParameter { name: "duration", value: 0.0 };
        let message = err.to_string();
        assert!(message.contains("duration"));
        assert!(message.contains("greater than 0"));
    }

    #[test]
    fn test_out_of_range_message() {
        let err = FermentationError::OutOfRange {
            name: "impeller_speed",
            value: 450.0,
            min: 100.0,
            max: 400.0,
        };
        assert_eq!(
            err.to_string(),
            "`impeller_speed` = 450 is outside the supported range [100, 400]"
        );
    }
}
