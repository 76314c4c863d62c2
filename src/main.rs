use clap::Parser as ClapParser;
use scc_build::driver::{BuildDriver, Cli};
use scc_build::logger;
use std::process::ExitCode;

/// The main entry point for the application.
///
/// Parses command-line arguments, runs one build and exits with its status.
fn main() -> ExitCode {
    let config = Cli::parse().into_config();
    logger::init(config.verbose);
    log::debug!("Verbose output enabled");

    BuildDriver::new(config).run_and_report()
}
