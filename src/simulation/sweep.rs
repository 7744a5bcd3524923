//! Batch runs over many independent inputs
//!
//! Runs share nothing, so with the `parallel` feature they are spread over
//! the rayon thread pool. Results always come back in input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::FermentationError;
use crate::simulation::{SimulationInputs, SimulationResult, Simulator};

impl Simulator {
    /// Run every input; fails on the first invalid one
    pub fn run_batch(&self, inputs: &[SimulationInputs]) -> Result<Vec<SimulationResult>, FermentationError> {
        log::debug!("Batch of {} runs", inputs.len());

        #[cfg(feature = "parallel")]
        let results: Result<Vec<_>, _> = inputs.par_iter().map(|input| self.run(input)).collect();

        #[cfg(not(feature = "parallel"))]
        let results: Result<Vec<_>, _> = inputs.iter().map(|input| self.run(input)).collect();

        results
    }

    /// Run `base` once per impeller speed
    pub fn sweep_impeller_speeds(
        &self,
        base: &SimulationInputs,
        speeds: &[f64],
    ) -> Result<Vec<SimulationResult>, FermentationError> {
        let inputs: Vec<SimulationInputs> = speeds
            .iter()
            .map(|&impeller_speed| SimulationInputs { impeller_speed, ..*base })
            .collect();

        self.run_batch(&inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_matches_individual_runs() {
        let simulator = Simulator::default();
        let inputs = [
            SimulationInputs::default(),
            SimulationInputs::new(120.0, 10.0, 5.0, 200.0, 24.0),
            SimulationInputs::new(200.0, 500.0, 0.1, 400.0, 120.0),
        ];

        let batch = simulator.run_batch(&inputs).unwrap();
        assert_eq!(batch.len(), inputs.len());

        for (input, result) in inputs.iter().zip(&batch) {
            assert_eq!(result, &simulator.run(input).unwrap());
        }
    }

    #[test]
    fn test_batch_rejects_invalid_input() {
        let inputs = [
            SimulationInputs::default(),
            SimulationInputs { volume: 0.0, ..SimulationInputs::default() },
        ];
        assert!(Simulator::default().run_batch(&inputs).is_err());
    }

    #[test]
    fn test_impeller_sweep_is_monotonic_early() {
        let base = SimulationInputs { duration: 12.0, ..SimulationInputs::default() };
        let speeds = [100.0, 200.0, 300.0, 400.0];

        let results = Simulator::default().sweep_impeller_speeds(&base, &speeds).unwrap();

        for (result, &speed) in results.iter().zip(&speeds) {
            assert_eq!(result.inputs.impeller_speed, speed);
        }
        for pair in results.windows(2) {
            assert!(pair[1].biomass[10] > pair[0].biomass[10]);
        }
    }
}
