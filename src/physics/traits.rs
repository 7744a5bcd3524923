//! Physical models traits and types
//!
//! This module defines the core API for physical models:
//! - `PhysicalModel`: trait for all physical models
//! - `PhysicalState`: flexible state container
//! - `PhysicalQuantity`: type-safe quantity identifiers

use crate::physics::PhysicalData;
use std::collections::HashMap;
use std::fmt;

// =================================================================================================
// Physical quantities (Type-safe Identifiers)
// =================================================================================================

/// Known physical quantities (type-safe enum)
///
/// For the fermentation model every quantity holds a **total mass** in grams
/// (concentration × broth volume), not a concentration.
///
/// # Example
/// ```
/// use ferment_rs::physics::{PhysicalData, PhysicalQuantity, PhysicalState};
///
/// let glycerol = PhysicalQuantity::Custom("Glycerol");
/// let mut state = PhysicalState::empty();
/// state.set(glycerol, PhysicalData::Scalar(0.0));
/// assert!(state.get(glycerol).is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalQuantity {
    /// Biomass (cells)
    Biomass,

    /// Fermentable substrate (glucose)
    Substrate,

    /// Product (ethanol)
    Ethanol,

    /// Custom quantity (for use extension)
    Custom(&'static str),
}

impl fmt::Display for PhysicalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicalQuantity::Biomass => write!(f, "Biomass"),
            PhysicalQuantity::Substrate => write!(f, "Substrate"),
            PhysicalQuantity::Ethanol => write!(f, "Ethanol"),
            PhysicalQuantity::Custom(name) => write!(f, "{}", name),
        }
    }
}

// =================================================================================================
// Physical State (Flexible State Container)
// =================================================================================================

/// Physical state of the system
///
/// Contains all physical quantities at a given time step. Solvers only see
/// this container, never the model-specific structures behind it.
///
/// # Example
/// ```
/// use ferment_rs::physics::{PhysicalData, PhysicalQuantity, PhysicalState};
///
/// let mut state = PhysicalState::new(PhysicalQuantity::Biomass, PhysicalData::Scalar(100.0));
/// state.set(PhysicalQuantity::Substrate, PhysicalData::Scalar(5000.0));
/// assert_eq!(state.scalar(PhysicalQuantity::Substrate), Some(5000.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalState {
    /// Physical quantities stored in a dictionary
    pub(crate) quantities: HashMap<PhysicalQuantity, PhysicalData>,
}

impl PhysicalState {
    /// Create a new state with primary quantity
    pub fn new(quantity: PhysicalQuantity, value: PhysicalData) -> Self {
        let mut quantities = HashMap::new();
        quantities.insert(quantity, value);

        Self { quantities }
    }

    /// Create an empty state
    pub fn empty() -> Self {
        Self {
            quantities: HashMap::new(),
        }
    }

    /// Builder variant of [`set`](Self::set)
    pub fn with(mut self, quantity: PhysicalQuantity, value: PhysicalData) -> Self {
        self.set(quantity, value);
        self
    }

    /// Get a quantity by type
    pub fn get(&self, quantity: PhysicalQuantity) -> Option<&PhysicalData> {
        self.quantities.get(&quantity)
    }

    /// Get mutable reference to a quantity
    pub fn get_mut(&mut self, quantity: PhysicalQuantity) -> Option<&mut PhysicalData> {
        self.quantities.get_mut(&quantity)
    }

    /// Get a scalar quantity, `None` if missing or not scalar
    pub fn scalar(&self, quantity: PhysicalQuantity) -> Option<f64> {
        self.get(quantity).and_then(PhysicalData::try_as_scalar)
    }

    /// Set a quantity
    pub fn set(&mut self, quantity: PhysicalQuantity, value: PhysicalData) {
        self.quantities.insert(quantity, value);
    }

    /// List of available physical state quantities
    pub fn available_quantities(&self) -> Vec<PhysicalQuantity> {
        self.quantities.keys().cloned().collect()
    }

    /// Number of stored quantities
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    /// True when no quantity is stored
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Apply `f` to every element of every quantity
    pub fn apply<F>(&mut self, f: F)
    where
        F: Fn(f64) -> f64,
    {
        for data in self.quantities.values_mut() {
            data.apply(&f);
        }
    }
}

// Operator overloading for numerical operations

impl std::ops::Add for PhysicalState {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        for (quantity, value) in rhs.quantities {
            if let Some(existing_value) = self.quantities.remove(&quantity) {
                self.quantities.insert(quantity, existing_value + value);
            } else {
                self.quantities.insert(quantity, value);
            }
        }
        self
    }
}

impl std::ops::Mul<f64> for PhysicalState {
    type Output = Self;

    fn mul(mut self, scalar: f64) -> Self::Output {
        for data in self.quantities.values_mut() {
            *data = data.clone() * scalar;
        }
        self
    }
}

// =================================================================================================
// Physical Model Trait
// =================================================================================================

/// Trait for physical models
///
/// # Responsibility
/// Computes the right-hand side f(y) of dy/dt = f(y) at a given state.
/// Does NOT integrate it (that's the Solver's job).
///
/// Models must be pure: the same state always yields the same rates, and
/// nothing is mutated between calls. This is what makes independent runs
/// safe to execute in parallel.
pub trait PhysicalModel: Send + Sync {

    /// Computes the time derivatives at a given state
    ///
    /// The returned state holds, for every tracked quantity, its rate of
    /// change per unit time (hours for the fermentation model).
    fn compute_physics(&self, state: &PhysicalState) -> PhysicalState;

    /// Creates the initial state for this physical model
    fn setup_initial_state(&self) -> PhysicalState;

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;

    /// Description of the model (option)
    fn description(&self) -> Option<&str> {
        None
    }
}
