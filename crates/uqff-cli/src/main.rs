//! uqff - command line driver for the UQFF term evaluation framework
//!
//! Runs time-series simulations and parameter sweeps over the built-in
//! term library and writes the results as CSV.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uqff_core::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "uqff")]
#[command(about = "Evaluate UQFF physics terms over time ranges and parameter sweeps")]
struct Cli {
    /// Catalogue id of the system to simulate (unknown ids fall back to
    /// a zeroed template)
    #[arg(long, default_value = "SGR1745")]
    system: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all registered terms with their categories
    List,
    /// List the built-in system catalogue
    Systems,
    /// Show the description of one term
    Info {
        /// Registry name of the term
        name: String,
    },
    /// Run a time-series simulation and export it as CSV
    Run {
        #[arg(long, default_value = "0.0")]
        t_start: f64,
        #[arg(long)]
        t_end: f64,
        #[arg(long)]
        dt: f64,
        /// Output CSV path
        #[arg(long, default_value = "uqff_run.csv")]
        out: PathBuf,
    },
    /// Sweep one parameter at a fixed evaluation time and export as CSV
    Sweep {
        /// Parameter map key to vary
        #[arg(long)]
        param: String,
        #[arg(long)]
        min: f64,
        #[arg(long)]
        max: f64,
        #[arg(long, default_value = "10")]
        steps: usize,
        /// Fixed evaluation time for every sweep point
        #[arg(long, default_value = "0.0")]
        t_eval: f64,
        /// Output CSV path
        #[arg(long, default_value = "uqff_sweep.csv")]
        out: PathBuf,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uqff=info,uqff_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut registry = TermRegistry::new();
    terms::register_all(&mut registry);

    let catalogue = SystemCatalogue::new();

    match cli.command {
        Command::List => {
            for name in registry.names() {
                let category = registry
                    .category_of(name)
                    .map(|c| format!("{c:?}"))
                    .unwrap_or_default();
                println!("{name:32} {category}");
            }
        }
        Command::Systems => {
            for id in catalogue.ids() {
                let record = catalogue.get(id);
                println!("{id:12} {} ({:?})", record.name, record.kind);
            }
        }
        Command::Info { name } => match registry.get(&name) {
            Some(term) => {
                println!("{}", term.name());
                println!("{}", term.description());
            }
            None => {
                error!(term = %name, "no such term");
                std::process::exit(1);
            }
        },
        Command::Run { t_start, t_end, dt, out } => {
            let mut driver = driver_for(&registry, &catalogue, &cli.system);

            if let Err(e) = driver.run_time_series(t_start, t_end, dt) {
                error!("invalid run configuration: {e}");
                std::process::exit(1);
            }
            let order: Vec<String> = driver.active_terms().to_vec();
            if let Err(e) = export::save_time_series(&out, driver.results(), &order) {
                error!("export failed: {e}");
                std::process::exit(1);
            }
            print_summary(&driver);
            info!(path = %out.display(), "wrote time series");
        }
        Command::Sweep { param, min, max, steps, t_eval, out } => {
            let mut driver = driver_for(&registry, &catalogue, &cli.system);

            if let Err(e) = driver.run_parameter_sweep(&param, min, max, steps, t_eval) {
                error!("invalid sweep configuration: {e}");
                std::process::exit(1);
            }
            if let Err(e) = export::save_sweep(&out, &param, driver.results()) {
                error!("export failed: {e}");
                std::process::exit(1);
            }
            print_summary(&driver);
            info!(path = %out.display(), "wrote sweep");
        }
    }
}

fn driver_for<'r>(
    registry: &'r TermRegistry,
    catalogue: &SystemCatalogue,
    system_id: &str,
) -> SimulationDriver<'r> {
    let record = catalogue.get(system_id);
    let mut system = AstrophysicalSystem::default();
    system.apply_record(&record);
    SimulationDriver::new(registry, system)
}

fn print_summary(driver: &SimulationDriver<'_>) {
    if let Some(summary) = driver.summary() {
        println!(
            "{} rounds over [{:.6e}, {:.6e}]",
            summary.rounds, summary.first_t, summary.last_t
        );
        println!(
            "final subtotals: gravity {:.6e}, resonance {:.6e}",
            summary.last_gravity, summary.last_resonance
        );
        println!("largest contributors at final step:");
        for (name, magnitude) in &summary.top_terms {
            println!("  {name:32} {magnitude:.6e}");
        }
    }
}
