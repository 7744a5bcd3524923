//! Convergence tests for numerical solvers
//!
//! These tests verify that solvers exhibit the expected
//! convergence rates when refining the time step, first on a model with an
//! analytical solution, then on the fermentation model itself.

use ferment_rs::simulation::{SimulationInputs, Simulator};
use ferment_rs::solver::{EulerSolver, RK4Solver, Solver, SolverConfiguration, SolverType};

mod common;
use common::{create_simple_scenario, relative_error, ExponentialDecay, LogisticGrowth, Y};

#[test]
fn test_euler_first_order_convergence() {
    // Euler should have first-order convergence: error ~ O(dt)
    // When dt → dt/2, error should → error/2

    let decay_rate: f64 = 0.3;
    let total_time = 10.0;
    let exact = (-decay_rate * total_time).exp();

    let euler = EulerSolver::new();
    let mut errors = Vec::new();

    for steps in [100, 200, 400, 800] {
        let scenario = create_simple_scenario(Box::new(ExponentialDecay::new(decay_rate)));
        let config = SolverConfiguration::time_evolution(total_time, steps);
        let result = euler.solve(&scenario, &config).unwrap();

        let final_value = result.final_state.scalar(Y).unwrap();
        errors.push((final_value - exact).abs());
    }

    for i in 0..errors.len() - 1 {
        let ratio = errors[i] / errors[i + 1];
        println!("Euler convergence ratio {}->{}: {}", i, i + 1, ratio);

        assert!(
            ratio > 1.8 && ratio < 2.2,
            "Convergence ratio {} not first-order",
            ratio
        );
    }
}

#[test]
fn test_rk4_fourth_order_convergence() {
    // RK4 should have fourth-order convergence: error ~ O(dt^4)
    // When dt → dt/2, error should → error/16

    let decay_rate: f64 = 0.3;
    let total_time = 5.0;
    let exact = (-decay_rate * total_time).exp();

    let rk4 = RK4Solver::new();
    let mut errors = Vec::new();

    for steps in [10, 20, 40, 80] {
        let scenario = create_simple_scenario(Box::new(ExponentialDecay::new(decay_rate)));
        let config = SolverConfiguration::time_evolution(total_time, steps);
        let result = rk4.solve(&scenario, &config).unwrap();

        let final_value = result.final_state.scalar(Y).unwrap();
        errors.push((final_value - exact).abs());
    }

    for i in 0..errors.len() - 1 {
        let ratio = errors[i] / errors[i + 1];
        println!("RK4 convergence ratio {}->{}: {}", i, i + 1, ratio);

        assert!(
            ratio > 12.0 && ratio < 20.0,
            "Convergence ratio {} not fourth-order",
            ratio
        );
    }
}

#[test]
fn test_logistic_growth_accuracy() {
    // Saturating growth, the shape biomass follows under inhibition
    let model = LogisticGrowth::new(0.4, 26.0, 1.0);
    let exact = model.analytical_solution(24.0);

    let scenario = create_simple_scenario(Box::new(model));
    let config = SolverConfiguration::from_resolution(24.0, 10);

    let euler = EulerSolver::new().solve(&scenario, &config).unwrap();
    let rk4 = RK4Solver::new().solve(&scenario, &config).unwrap();

    let euler_error = relative_error(euler.final_state.scalar(Y).unwrap(), exact);
    let rk4_error = relative_error(rk4.final_state.scalar(Y).unwrap(), exact);

    assert!(euler_error < 1e-2, "Euler error {} too large", euler_error);
    assert!(rk4_error < 1e-7, "RK4 error {} too large", rk4_error);
}

#[test]
fn test_fermentation_euler_converges_to_rk4() {
    // 12 h: biomass still growing, exhaustion correction not yet active
    let inputs = SimulationInputs { duration: 12.0, ..SimulationInputs::default() };

    let reference = Simulator::default()
        .with_method(SolverType::Rk4)
        .with_points_per_hour(320)
        .run(&inputs)
        .unwrap();

    let mut errors = Vec::new();
    for points_per_hour in [10, 20, 40, 80] {
        let result = Simulator::default()
            .with_points_per_hour(points_per_hour)
            .run(&inputs)
            .unwrap();
        errors.push(relative_error(result.final_biomass, reference.final_biomass));
    }

    for i in 0..errors.len() - 1 {
        let ratio = errors[i] / errors[i + 1];
        println!("Fermentation Euler ratio {}->{}: {}", i, i + 1, ratio);
        assert!(ratio > 1.5 && ratio < 2.5, "Convergence ratio {} not first-order", ratio);
    }

    // Production resolution is within a few percent of the reference
    assert!(errors[0] < 0.05, "Euler at 10 points/h off by {}", errors[0]);
}

#[test]
fn test_fermentation_rk4_refinement_is_stable() {
    let inputs = SimulationInputs { duration: 12.0, ..SimulationInputs::default() };
    let rk4 = Simulator::default().with_method(SolverType::Rk4);

    let coarse = rk4.clone().with_points_per_hour(10).run(&inputs).unwrap();
    let fine = rk4.with_points_per_hour(40).run(&inputs).unwrap();

    assert!(relative_error(coarse.final_biomass, fine.final_biomass) < 1e-5);
    assert!(relative_error(coarse.final_ethanol, fine.final_ethanol) < 1e-5);
}
