//! Physical data types
//!
//! This module provides a small container for physical quantities that can
//! be a single value (a well-mixed reactor total) or a vector of values
//! (several independent compartments integrated together).

use nalgebra::DVector;
use std::fmt;

/// Physical data container
///
/// # Storage Types
///
/// - **Scalar**: Single value (0D), e.g. total biomass in the broth
/// - **Vector**: 1D array, one value per compartment
///
/// # Examples
///
/// ```rust
/// use ferment_rs::physics::PhysicalData;
///
/// let biomass = PhysicalData::from_scalar(100.0);
/// let compartments = PhysicalData::uniform_vector(4, 0.5);
///
/// assert!(biomass.is_scalar());
/// assert_eq!(compartments.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicalData {
    /// Scalar value (0D)
    Scalar(f64),

    /// Vector (1D)
    Vector(DVector<f64>),
}

impl PhysicalData {

    // ======================================= constructors =======================================

    /// Create from scalar
    pub fn from_scalar(value: f64) -> Self {
        Self::Scalar(value)
    }

    /// Create from vector
    pub fn from_vec(vector: Vec<f64>) -> Self {
        Self::Vector(DVector::from_vec(vector))
    }

    /// Create uniform vector
    pub fn uniform_vector(size: usize, value: f64) -> Self {
        Self::Vector(DVector::from_element(size, value))
    }

    // ========================================== Queries ==========================================

    /// Check data is scalar
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Check data is a vector
    pub fn is_vector(&self) -> bool {
        matches!(self, Self::Vector(_))
    }

    /// Get length
    pub fn len(&self) -> usize {
        match self {
            PhysicalData::Scalar(_) => 1,
            PhysicalData::Vector(v) => v.len(),
        }
    }

    /// Check emptiness
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if any element is NaN or infinite
    pub fn has_non_finite(&self) -> bool {
        match self {
            PhysicalData::Scalar(x) => !x.is_finite(),
            PhysicalData::Vector(v) => v.iter().any(|x| !x.is_finite()),
        }
    }

    // ======================================== Extractions ========================================

    /// Try to extract as a scalar
    pub fn try_as_scalar(&self) -> Option<f64> {
        match self {
            PhysicalData::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    /// Try to extract as a DVector
    pub fn try_as_vector(&self) -> Option<&DVector<f64>> {
        match self {
            PhysicalData::Vector(value) => Some(value),
            _ => None,
        }
    }

    // ====================================== Apply functions ======================================

    /// Apply a function f to every element
    pub fn apply<F>(&mut self, f: F)
    where
        F: Fn(f64) -> f64,
    {
        match self {
            PhysicalData::Scalar(value) => *value = f(*value),
            PhysicalData::Vector(value) => value.iter_mut().for_each(|x| *x = f(*x)),
        }
    }
}

// ================================== Simple arithmetic functions ==================================

/// Element-wise sum of two values of the same shape
///
/// Shapes never mix inside a solve: rates are computed from the state they
/// are added to. A mismatch yields NaN data, which the solver's state check
/// reports as an error.
impl std::ops::Add for PhysicalData {
    type Output = PhysicalData;
    fn add(self, rhs: Self) -> Self::Output {
        use PhysicalData::*;
        match (self, rhs) {
            (Scalar(x), Scalar(y)) => Scalar(x + y),
            (Vector(x), Vector(y)) if x.len() == y.len() => Vector(x + y),
            (Vector(x), _) => Vector(x.map(|_| f64::NAN)),
            (Scalar(_), _) => Scalar(f64::NAN),
        }
    }
}

impl std::ops::Mul<f64> for PhysicalData {
    type Output = PhysicalData;
    fn mul(self, scalar: f64) -> Self::Output {
        match self {
            PhysicalData::Scalar(x) => PhysicalData::Scalar(x * scalar),
            PhysicalData::Vector(x) => PhysicalData::Vector(x * scalar),
        }
    }
}

impl std::ops::Mul<PhysicalData> for f64 {
    type Output = PhysicalData;
    fn mul(self, rhs: PhysicalData) -> Self::Output {
        rhs * self
    }
}

// ======================== Display ============================

impl fmt::Display for PhysicalData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicalData::Scalar(value) => write!(f, "Scalar ({})", value),
            PhysicalData::Vector(value) => write!(f, "Vector [{}]", value.len()),
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar() {
        let data = PhysicalData::Scalar(42.0);
        assert!(data.is_scalar());
        assert_eq!(data.len(), 1);
        assert_eq!(data.try_as_scalar(), Some(42.0));
        assert!(data.try_as_vector().is_none());
    }

    #[test]
    fn test_vector() {
        let data = PhysicalData::uniform_vector(100, 1.0);
        assert!(data.is_vector());
        assert_eq!(data.len(), 100);
        assert!(data.try_as_scalar().is_none());
    }

    #[test]
    fn test_addition() {
        let a = PhysicalData::Scalar(1.0);
        let b = PhysicalData::Scalar(2.0);
        assert_eq!((a + b).try_as_scalar(), Some(3.0));

        let v = PhysicalData::from_vec(vec![1.0, 2.0]);
        let sum = v + PhysicalData::from_vec(vec![0.5, 0.5]);
        assert_eq!(sum.try_as_vector().unwrap()[1], 2.5);
    }

    #[test]
    fn test_addition_shape_mismatch_is_non_finite() {
        let lengths = PhysicalData::uniform_vector(2, 1.0) + PhysicalData::uniform_vector(3, 1.0);
        assert_eq!(lengths.len(), 2);
        assert!(lengths.has_non_finite());

        let mixed = PhysicalData::Scalar(1.0) + PhysicalData::uniform_vector(2, 1.0);
        assert!(mixed.is_scalar());
        assert!(mixed.has_non_finite());

        let mixed = PhysicalData::uniform_vector(2, 1.0) + PhysicalData::Scalar(1.0);
        assert!(mixed.has_non_finite());
    }

    #[test]
    fn test_multiplication() {
        let data = PhysicalData::uniform_vector(10, 2.0);
        let result = data * 3.0;
        assert_eq!(result.try_as_vector().unwrap()[0], 6.0);

        let scaled = 0.5 * PhysicalData::Scalar(8.0);
        assert_eq!(scaled.try_as_scalar(), Some(4.0));
    }

    #[test]
    fn test_apply_and_non_finite() {
        let mut data = PhysicalData::from_vec(vec![-1.0, 2.0]);
        data.apply(|x| x.max(0.0));
        assert_eq!(data.try_as_vector().unwrap()[0], 0.0);
        assert!(!data.has_non_finite());

        let nan = PhysicalData::Scalar(f64::NAN);
        assert!(nan.has_non_finite());
    }

    #[test]
    fn test_display() {
        assert_eq!(PhysicalData::Scalar(1.5).to_string(), "Scalar (1.5)");
        assert_eq!(PhysicalData::uniform_vector(3, 0.0).to_string(), "Vector [3]");
    }
}
