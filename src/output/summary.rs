//! Five-line run summary

use std::fmt;

use crate::simulation::SimulationResult;

/// Display adapter printing the headline figures of a run
///
/// ```rust
/// use ferment_rs::output::Summary;
/// use ferment_rs::simulation::{simulate, SimulationInputs};
///
/// let result = simulate(&SimulationInputs::default()).unwrap();
/// let text = Summary(&result).to_string();
/// assert!(text.starts_with("Final Biomass (X): "));
/// assert_eq!(text.lines().count(), 5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a>(pub &'a SimulationResult);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(f, "Final Biomass (X): {:.2} g/L", result.final_biomass)?;
        writeln!(f, "Final Substrate (S): {:.2} g/L", result.final_substrate)?;
        writeln!(f, "Ethanol Concentration (P): {:.2} g/L", result.final_ethanol)?;
        writeln!(f, "Total Ethanol Produced: {:.2} L", result.ethanol_volume)?;
        write!(f, "Total Cost: ${:.2}", result.total_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{simulate, SimulationInputs};

    #[test]
    fn test_summary_lines() {
        let result = simulate(&SimulationInputs::default()).unwrap();
        let text = Summary(&result).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], format!("Final Biomass (X): {:.2} g/L", result.final_biomass));
        assert!(lines[1].starts_with("Final Substrate (S): "));
        assert!(lines[2].ends_with(" g/L"));
        assert_eq!(lines[3], format!("Total Ethanol Produced: {:.2} L", result.ethanol_volume));
        assert_eq!(lines[4], format!("Total Cost: ${:.2}", result.total_cost));
    }
}
