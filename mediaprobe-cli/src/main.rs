// mediaprobe-cli/src/main.rs
//
// Entry point for the `mediaprobe` binary.
//
// Responsibilities include:
// - Parsing command-line arguments.
// - Setting up env_logger on stderr.
// - Building the backend registry from environment configuration.
// - Dispatching to the command implementations in `commands`.
// - Mapping errors to process exit codes.

use clap::Parser;
use mediaprobe_cli::commands;
use mediaprobe_cli::error::{already_reported, exit_code_for};
use mediaprobe_cli::logging::init_logging;
use mediaprobe_cli::output::print_error;
use mediaprobe_cli::Cli;
use mediaprobe_core::{BackendRegistry, ProbeConfig};
use std::process;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ProbeConfig::from_env();
    log::debug!("Probe configuration: {:?}", config);
    let registry = BackendRegistry::with_defaults(&config);

    let code = match commands::run(cli.command, &registry) {
        Ok(code) => code,
        Err(e) => {
            log::debug!("Command failed: {:?}", e);
            if !already_reported(&e) {
                print_error(&e);
            }
            exit_code_for(&e)
        }
    };

    process::exit(code);
}
