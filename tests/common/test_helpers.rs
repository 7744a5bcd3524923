//! Helper functions for integration tests

use ferment_rs::physics::PhysicalModel;
use ferment_rs::simulation::SimulationInputs;
use ferment_rs::solver::Scenario;

/// Create a scenario from a model's own initial state, without corrections
pub fn create_simple_scenario(model: Box<dyn PhysicalModel>) -> Scenario {
    Scenario::new(model)
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// S0 = 50 g/L, V = 100 L, X0 = 1 g/L, N = 300 rpm, t = 72 h
pub fn reference_inputs() -> SimulationInputs {
    SimulationInputs::new(50.0, 100.0, 1.0, 300.0, 72.0)
}

/// Panic with the first index where `series` decreases
pub fn assert_non_decreasing(series: &[f64], name: &str) {
    for (i, pair) in series.windows(2).enumerate() {
        assert!(
            pair[1] >= pair[0],
            "{} decreases at step {}: {} -> {}",
            name, i + 1, pair[0], pair[1]
        );
    }
}

/// Panic with the first index where `series` increases
pub fn assert_non_increasing(series: &[f64], name: &str) {
    for (i, pair) in series.windows(2).enumerate() {
        assert!(
            pair[1] <= pair[0],
            "{} increases at step {}: {} -> {}",
            name, i + 1, pair[0], pair[1]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}
