//! Kinetic and process parameters
//!
//! The literature constant set shared by every run. It is passed explicitly
//! to the model and the post-processing so that a different strain (or a
//! different cost basis) is a different value, not a code change.
//!
//! | Symbol        | Field                   | Default | Unit          |
//! |---------------|-------------------------|---------|---------------|
//! | Ks            | `half_saturation`       | 1.0     | g/L           |
//! | Ksi           | `substrate_inhibition`  | 50.0    | g/L           |
//! | Yxs           | `biomass_yield`         | 0.5     | g X / g S     |
//! | Yps           | `ethanol_yield`         | 0.48    | g P / g S     |
//! | μmax,base     | `mu_max_base`           | 0.4     | 1/h           |
//! | Pmax          | `max_ethanol`           | 90.0    | g/L           |
//! | ρ ethanol     | `ethanol_density`       | 0.789   | g/mL          |
//! | cost          | `cost_per_liter`        | 5.00    | currency / L  |
//! | N ref         | `reference_speed`       | 400.0   | rpm           |
//! | agitation exp | `agitation_exponent`    | 0.6     | -             |

use serde::{Deserialize, Serialize};

use crate::error::FermentationError;

/// Immutable kinetic constant set
///
/// # Example
///
/// ```rust
/// use ferment_rs::models::KineticParameters;
///
/// let params = KineticParameters::default();
/// // N = 400 rpm reproduces the literature base rate
/// assert_eq!(params.max_growth_rate(400.0), params.mu_max_base);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KineticParameters {
    /// Monod half-saturation constant Ks [g/L]
    #[serde(alias = "Ks")]
    pub half_saturation: f64,

    /// Substrate inhibition constant Ksi [g/L]
    #[serde(alias = "Ksi")]
    pub substrate_inhibition: f64,

    /// Biomass yield on substrate Yxs [g/g]
    #[serde(alias = "Yxs")]
    pub biomass_yield: f64,

    /// Ethanol yield on substrate Yps [g/g]
    #[serde(alias = "Yps")]
    pub ethanol_yield: f64,

    /// Maximum specific growth rate at the reference impeller speed [1/h]
    pub mu_max_base: f64,

    /// Ethanol concentration at which growth stops, Pmax [g/L]
    #[serde(alias = "P_max")]
    pub max_ethanol: f64,

    /// Ethanol density [g/mL]
    pub ethanol_density: f64,

    /// Cost per liter of ethanol produced
    pub cost_per_liter: f64,

    /// Impeller speed at which `mu_max_base` was measured [rpm]
    pub reference_speed: f64,

    /// Power-law exponent of the agitation correction
    pub agitation_exponent: f64,
}

impl Default for KineticParameters {
    fn default() -> Self {
        Self {
            half_saturation: 1.0,
            substrate_inhibition: 50.0,
            biomass_yield: 0.5,
            ethanol_yield: 0.48,
            mu_max_base: 0.4,
            max_ethanol: 90.0,
            ethanol_density: 0.789,
            cost_per_liter: 5.00,
            reference_speed: 400.0,
            agitation_exponent: 0.6,
        }
    }
}

impl KineticParameters {
    /// Check that every constant is finite and strictly positive
    ///
    /// The agitation exponent may be zero (no agitation effect).
    pub fn validate(&self) -> Result<(), FermentationError> {
        let positive = [
            ("half_saturation", self.half_saturation),
            ("substrate_inhibition", self.substrate_inhibition),
            ("biomass_yield", self.biomass_yield),
            ("ethanol_yield", self.ethanol_yield),
            ("mu_max_base", self.mu_max_base),
            ("max_ethanol", self.max_ethanol),
            ("ethanol_density", self.ethanol_density),
            ("cost_per_liter", self.cost_per_liter),
            ("reference_speed", self.reference_speed),
        ];

        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(FermentationError::InvalidParameter { name, value });
            }
        }

        if !self.agitation_exponent.is_finite() || self.agitation_exponent < 0.0 {
            return Err(FermentationError::InvalidParameter {
                name: "agitation_exponent",
                value: self.agitation_exponent,
            });
        }

        Ok(())
    }

    // ====================================== Kinetic terms ========================================

    /// Agitation-corrected maximum growth rate [1/h]
    ///
    /// ```text
    /// μmax = μmax,base · (N / N_ref)^a
    /// ```
    pub fn max_growth_rate(&self, impeller_speed: f64) -> f64 {
        self.mu_max_base * (impeller_speed / self.reference_speed).powf(self.agitation_exponent)
    }

    /// Monod saturation term S / (Ks + S), in [0, 1)
    pub fn monod(&self, substrate: f64) -> f64 {
        substrate / (self.half_saturation + substrate)
    }

    /// Substrate inhibition factor 1 / (1 + S/Ksi), in (0, 1]
    pub fn substrate_inhibition_factor(&self, substrate: f64) -> f64 {
        1.0 / (1.0 + substrate / self.substrate_inhibition)
    }

    /// Ethanol inhibition factor max(0, 1 - P/Pmax), in [0, 1]
    pub fn ethanol_inhibition_factor(&self, ethanol: f64) -> f64 {
        (1.0 - ethanol / self.max_ethanol).max(0.0)
    }

    /// Specific growth rate μ [1/h] from concentrations in g/L
    pub fn specific_growth_rate(&self, mu_max: f64, substrate: f64, ethanol: f64) -> f64 {
        mu_max
            * self.monod(substrate)
            * self.substrate_inhibition_factor(substrate)
            * self.ethanol_inhibition_factor(ethanol)
    }

    // ===================================== Unit conversions ======================================

    /// Volume [L] occupied by `mass` grams of ethanol
    pub fn ethanol_volume(&self, mass: f64) -> f64 {
        mass / (self.ethanol_density * 1000.0)
    }

    /// Cost of `volume` liters of ethanol
    pub fn ethanol_cost(&self, volume: f64) -> f64 {
        self.cost_per_liter * volume
    }
}
