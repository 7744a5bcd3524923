//! `ferment` command-line front end
//!
//! ```text
//! ferment --s0 120 --volume 250 --x0 2 --speed 350 --hours 48 --plot run.png --csv run.csv
//! ferment --config strain_b.toml --method rk4 -v
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use ferment_rs::config::{InputRanges, RunConfig};
use ferment_rs::error::FermentationError;
use ferment_rs::output::export::{CsvConfig, CsvExporter, CsvMetadata, Exporter};
use ferment_rs::output::{plot_fermentation, Summary};
use ferment_rs::simulation::{ConvergenceStudy, SimulationInputs};
use ferment_rs::solver::SolverType;

/// Batch bioethanol fermentation simulator
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Initial substrate concentration S0 [g/L]
    #[arg(long = "initial-substrate", visible_alias = "s0")]
    initial_substrate: Option<f64>,

    /// Broth volume V [L]
    #[arg(long, visible_alias = "vol")]
    volume: Option<f64>,

    /// Initial biomass concentration X0 [g/L]
    #[arg(long = "initial-biomass", visible_alias = "x0")]
    initial_biomass: Option<f64>,

    /// Impeller speed N [rpm]
    #[arg(long = "impeller-speed", visible_alias = "speed")]
    impeller_speed: Option<f64>,

    /// Fermentation time t [h]
    #[arg(long, visible_alias = "hours")]
    duration: Option<f64>,

    /// TOML run configuration; command-line inputs override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Integration method (euler, rk4)
    #[arg(short, long)]
    method: Option<SolverType>,

    /// Output resolution [points per hour]
    #[arg(long)]
    points_per_hour: Option<usize>,

    /// Accept inputs outside the documented operating ranges
    #[arg(long)]
    no_range_check: bool,

    /// Write the time series to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Keep only this many rows in the CSV file
    #[arg(long, requires = "csv")]
    csv_points: Option<usize>,

    /// Write the two-panel plot to this file (.png or .svg)
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Run a step-size convergence study after the simulation
    #[arg(long)]
    convergence: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn apply_overrides(&self, config: &mut RunConfig) {
        let inputs: &mut SimulationInputs = &mut config.inputs;
        if let Some(value) = self.initial_substrate {
            inputs.initial_substrate = value;
        }
        if let Some(value) = self.volume {
            inputs.volume = value;
        }
        if let Some(value) = self.initial_biomass {
            inputs.initial_biomass = value;
        }
        if let Some(value) = self.impeller_speed {
            inputs.impeller_speed = value;
        }
        if let Some(value) = self.duration {
            inputs.duration = value;
        }
        if let Some(method) = self.method {
            config.solver.method = method;
        }
        if let Some(points_per_hour) = self.points_per_hour {
            config.solver.points_per_hour = points_per_hour;
        }
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

fn run(cli: &Cli) -> Result<(), FermentationError> {
    let mut config = RunConfig::load_or_default(cli.config.as_ref())?;
    cli.apply_overrides(&mut config);

    let inputs = config.inputs;
    inputs.validate()?;
    if !cli.no_range_check {
        InputRanges::default().check(&inputs)?;
    }

    let simulator = config.simulator();
    let result = simulator.run(&inputs)?;

    println!("{}", Summary(&result));

    if let Some(path) = &cli.csv {
        let csv = CsvConfig::default().with_metadata(CsvMetadata::from_result(&result));
        CsvExporter::new(csv).export(&result, cli.csv_points, path)?;
        println!("Time series written to {}", path.display());
    }

    if let Some(path) = &cli.plot {
        plot_fermentation(&result, path, None)?;
        println!("Plot written to {}", path.display());
    }

    if cli.convergence {
        let study = ConvergenceStudy {
            base_points_per_hour: config.solver.points_per_hour,
            ..ConvergenceStudy::default()
        };
        let report = study.run(&simulator, &inputs)?;

        println!();
        println!("{:>8} {:>8} {:>12} {:>12} {:>12}", "pts/h", "steps", "X (g/L)", "S (g/L)", "P (g/L)");
        for level in &report.levels {
            println!(
                "{:>8} {:>8} {:>12.6} {:>12.6} {:>12.6}",
                level.points_per_hour,
                level.time_steps,
                level.final_biomass,
                level.final_substrate,
                level.final_ethanol
            );
        }
        if let Some(deviation) = report.reference_deviation() {
            println!("RK4 deviation at finest level: {:.3e}", deviation);
        }
        let verdict = if report.is_converged(1e-3) { "converged" } else { "NOT converged" };
        println!("Step size study: {} (tolerance 1e-3)", verdict);
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = TermLogger::init(cli.log_level(), Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("Logger initialisation failed: {}", e);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(FermentationError::InvalidParameter { name, value }) => {
            eprintln!("All input parameters must be greater than 0. (`{}` = {})", name, value);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
