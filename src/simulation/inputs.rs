//! Run inputs

use serde::{Deserialize, Serialize};

use crate::error::FermentationError;

/// The five scalar inputs of one fermentation run
///
/// | Field               | Symbol | Unit  |
/// |---------------------|--------|-------|
/// | `initial_substrate` | S0     | g/L   |
/// | `volume`            | V      | L     |
/// | `initial_biomass`   | X0     | g/L   |
/// | `impeller_speed`    | N      | rpm   |
/// | `duration`          | t      | hours |
///
/// The default is the reference run: S0 = 50, V = 100, X0 = 1, N = 300, t = 72.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationInputs {
    /// Initial substrate concentration S0 [g/L]
    #[serde(alias = "S0")]
    pub initial_substrate: f64,

    /// Broth volume V [L]
    #[serde(alias = "V")]
    pub volume: f64,

    /// Initial biomass concentration X0 [g/L]
    #[serde(alias = "X0")]
    pub initial_biomass: f64,

    /// Impeller speed N [rpm]
    #[serde(alias = "N")]
    pub impeller_speed: f64,

    /// Fermentation time t [h]
    #[serde(alias = "t")]
    pub duration: f64,
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self {
            initial_substrate: 50.0,
            volume: 100.0,
            initial_biomass: 1.0,
            impeller_speed: 300.0,
            duration: 72.0,
        }
    }
}

impl SimulationInputs {
    /// Create from the five values in S0, V, X0, N, t order
    pub fn new(
        initial_substrate: f64,
        volume: f64,
        initial_biomass: f64,
        impeller_speed: f64,
        duration: f64,
    ) -> Self {
        Self {
            initial_substrate,
            volume,
            initial_biomass,
            impeller_speed,
            duration,
        }
    }

    /// Named values, in S0, V, X0, N, t order
    pub fn named_values(&self) -> [(&'static str, f64); 5] {
        [
            ("initial_substrate", self.initial_substrate),
            ("volume", self.volume),
            ("initial_biomass", self.initial_biomass),
            ("impeller_speed", self.impeller_speed),
            ("duration", self.duration),
        ]
    }

    /// Reject any input that is not a finite, strictly positive number,
    /// or whose initial total mass (concentration × volume) overflows
    pub fn validate(&self) -> Result<(), FermentationError> {
        for (name, value) in self.named_values() {
            if !value.is_finite() || value <= 0.0 {
                return Err(FermentationError::InvalidParameter { name, value });
            }
        }

        let totals = [
            ("initial_substrate", self.initial_substrate),
            ("initial_biomass", self.initial_biomass),
        ];
        for (name, value) in totals {
            if !(value * self.volume).is_finite() {
                return Err(FermentationError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}
