//! Common utilities for integration tests
#![allow(dead_code)]

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_models::{ConstantGrowth, ExponentialDecay, LogisticGrowth, Y};
pub use test_helpers::{
    assert_non_decreasing,
    assert_non_increasing,
    create_simple_scenario,
    reference_inputs,
    relative_error,
};
