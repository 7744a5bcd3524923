//! Mock physical models for testing
//!
//! These models have known analytical solutions, making them
//! ideal for validating numerical solver accuracy.

use ferment_rs::physics::{PhysicalData, PhysicalModel, PhysicalQuantity, PhysicalState};

/// Quantity used by every mock model
pub const Y: PhysicalQuantity = PhysicalQuantity::Custom("y");

// =================================================================================================
// Exponential Decay: dy/dt = -k*y
// =================================================================================================

/// Exponential decay model: dy/dt = -k*y
///
/// Analytical solution: y(t) = y₀ * exp(-k*t)
pub struct ExponentialDecay {
    pub decay_rate: f64,
}

impl ExponentialDecay {
    pub fn new(decay_rate: f64) -> Self {
        Self { decay_rate }
    }

    /// Compute analytical solution at time t
    pub fn analytical_solution(&self, t: f64, y0: f64) -> f64 {
        y0 * (-self.decay_rate * t).exp()
    }
}

impl PhysicalModel for ExponentialDecay {
    fn compute_physics(&self, state: &PhysicalState) -> PhysicalState {
        let mut result = state.clone();

        if let Some(y) = result.get_mut(Y) {
            y.apply(|y| -self.decay_rate * y);
        }

        result
    }

    fn setup_initial_state(&self) -> PhysicalState {
        PhysicalState::new(Y, PhysicalData::Scalar(1.0))
    }

    fn name(&self) -> &str {
        "Exponential Decay"
    }
}

// =================================================================================================
// Constant Growth: dy/dt = c
// =================================================================================================

/// Constant growth model: dy/dt = c
///
/// Analytical solution: y(t) = y₀ + c*t. Euler and RK4 are both exact.
pub struct ConstantGrowth {
    pub growth_rate: f64,
}

impl ConstantGrowth {
    pub fn new(growth_rate: f64) -> Self {
        Self { growth_rate }
    }

    pub fn analytical_solution(&self, t: f64, y0: f64) -> f64 {
        y0 + self.growth_rate * t
    }
}

impl PhysicalModel for ConstantGrowth {
    fn compute_physics(&self, _state: &PhysicalState) -> PhysicalState {
        PhysicalState::new(Y, PhysicalData::Scalar(self.growth_rate))
    }

    fn setup_initial_state(&self) -> PhysicalState {
        PhysicalState::new(Y, PhysicalData::Scalar(0.0))
    }

    fn name(&self) -> &str {
        "Constant Growth"
    }
}

// =================================================================================================
// Logistic Growth: dy/dt = r*y*(1 - y/K)
// =================================================================================================

/// Logistic growth model: dy/dt = r*y*(1 - y/K)
///
/// Analytical solution: y(t) = K / (1 + (K/y₀ - 1) * exp(-r*t)).
/// Same saturating shape as biomass under product inhibition.
pub struct LogisticGrowth {
    pub rate: f64,
    pub capacity: f64,
    pub initial: f64,
}

impl LogisticGrowth {
    pub fn new(rate: f64, capacity: f64, initial: f64) -> Self {
        Self { rate, capacity, initial }
    }

    pub fn analytical_solution(&self, t: f64) -> f64 {
        self.capacity / (1.0 + (self.capacity / self.initial - 1.0) * (-self.rate * t).exp())
    }
}

impl PhysicalModel for LogisticGrowth {
    fn compute_physics(&self, state: &PhysicalState) -> PhysicalState {
        let y = state.scalar(Y).unwrap_or(0.0);
        PhysicalState::new(Y, PhysicalData::Scalar(self.rate * y * (1.0 - y / self.capacity)))
    }

    fn setup_initial_state(&self) -> PhysicalState {
        PhysicalState::new(Y, PhysicalData::Scalar(self.initial))
    }

    fn name(&self) -> &str {
        "Logistic Growth"
    }
}

// =================================================================================================
// Tests for Mock Models
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_decay_analytical() {
        let model = ExponentialDecay::new(0.5);
        assert!((model.analytical_solution(0.0, 1.0) - 1.0).abs() < 1e-10);
        assert!((model.analytical_solution(1.0, 1.0) - 0.6065306597).abs() < 1e-6);
    }

    #[test]
    fn test_logistic_analytical_limits() {
        let model = LogisticGrowth::new(0.4, 26.0, 1.0);
        assert!((model.analytical_solution(0.0) - 1.0).abs() < 1e-12);
        assert!((model.analytical_solution(200.0) - 26.0).abs() < 1e-9);
    }
}
