//! Simulation scenario definition
//!
//! A scenario combines a physical model, its initial state and the boundary
//! corrections that keep the trajectory physical.
use crate::physics::{PhysicalModel, PhysicalState};
use crate::solver::boundary::BoundaryCorrection;

/// Simulation scenario
///
/// This is the "WHAT to solve" (not "HOW to solve"): the same scenario can
/// be integrated with Euler or RK4 and any time grid.
///
/// # Examples
///
/// ```rust
/// use ferment_rs::models::{BatchFermentation, KineticParameters, SimulationState};
/// use ferment_rs::solver::{NonNegative, Scenario, SubstrateExhaustion};
///
/// let parameters = KineticParameters::default();
/// let model = BatchFermentation::new(
///     parameters.clone(),
///     100.0,
///     300.0,
///     SimulationState::from_concentrations(1.0, 50.0, 0.0, 100.0),
/// );
///
/// let scenario = Scenario::new(Box::new(model))
///     .with_correction(Box::new(SubstrateExhaustion::from_parameters(&parameters)))
///     .with_correction(Box::new(NonNegative));
///
/// assert!(scenario.validate().is_ok());
/// assert_eq!(scenario.corrections().len(), 2);
/// ```
pub struct Scenario {
    /// Physical model (equations)
    pub model: Box<dyn PhysicalModel>,

    /// Initial condition
    pub initial_state: PhysicalState,

    corrections: Vec<Box<dyn BoundaryCorrection>>,
}

impl Scenario {

    /// Create a scenario starting from the model's own initial state
    pub fn new(model: Box<dyn PhysicalModel>) -> Self {
        let initial_state = model.setup_initial_state();
        Self {
            model,
            initial_state,
            corrections: Vec::new(),
        }
    }

    /// Replace the initial condition
    pub fn with_initial_state(mut self, initial_state: PhysicalState) -> Self {
        self.initial_state = initial_state;
        self
    }

    /// Append a boundary correction (applied in insertion order)
    pub fn with_correction(mut self, correction: Box<dyn BoundaryCorrection>) -> Self {
        self.corrections.push(correction);
        self
    }

    /// Registered corrections
    pub fn corrections(&self) -> &[Box<dyn BoundaryCorrection>] {
        &self.corrections
    }

    /// Run every `correct_rates` hook in order
    pub fn correct_rates(&self, state: &PhysicalState, rates: PhysicalState, dt: f64) -> PhysicalState {
        self.corrections
            .iter()
            .fold(rates, |rates, correction| correction.correct_rates(state, rates, dt))
    }

    /// Run every `project_state` hook in order
    pub fn project_state(&self, state: PhysicalState) -> PhysicalState {
        self.corrections
            .iter()
            .fold(state, |state, correction| correction.project_state(state))
    }

    /// Verifying scenario content
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_state.is_empty() {
            return Err(format!("Initial state of '{}' is empty", self.get_model_name()));
        }
        crate::solver::validate_state(&self.initial_state, 0)
    }

    /// Get model name
    pub fn get_model_name(&self) -> &str {
        self.model.name()
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let corrections: Vec<&str> = self.corrections.iter().map(|c| c.name()).collect();
        f.debug_struct("Scenario")
            .field("name", &self.get_model_name())
            .field("initial state", &self.initial_state)
            .field("corrections", &corrections)
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
