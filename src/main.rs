//! CDMA Simulator (Command-Line Entry Point)
//!
//! Reads a station configuration from a file, runs one encode →
//! multiplex → decode pass, and prints the full run report: assigned
//! Walsh codes, the transmitted composite, the recovered bits, and the
//! decoded message per station.

use clap::Parser;
use cdma_sim::{simulator, SimConfig};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[clap(name = "cdma-sim", version)]
#[clap(about = "Simulate CDMA transmission over a shared channel.", long_about = None)]
struct CdmaCli {
    /// Configuration file (YAML or JSON) with `stations` and `bit_size`.
    #[arg(required_unless_present = "example_config")]
    config: Option<PathBuf>,

    /// Seed for the random code assignment, for reproducible runs.
    #[clap(short, long)]
    seed: Option<u64>,

    /// Print an example configuration file and exit.
    #[clap(long)]
    example_config: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = CdmaCli::parse();

    if cli.example_config {
        print!("{}", SimConfig::example_yaml());
        return ExitCode::SUCCESS;
    }

    let path = cli.config.expect("clap enforces the config argument");
    let report = SimConfig::load_from(&path).and_then(|config| simulator::run(&config, cli.seed));
    match report {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
