//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command. Every
//! command returns the process exit code on success; errors are mapped to
//! exit codes by `crate::error::exit_code_for`.

use crate::cli::Commands;
use crate::error::CliResult;

use mediaprobe_core::BackendRegistry;

/// The `backends` command: lists registered probing backends.
pub mod backends;

/// The `info` command: probes media and prints metadata as JSON.
pub mod info;

/// The `is-portrait`, `is-landscape` and `orientation` commands.
pub mod orientation;

/// The `summary-by-type` command.
pub mod summary;

/// Runs a parsed command against the given backend registry.
pub fn run(command: Commands, registry: &BackendRegistry) -> CliResult<i32> {
    match command {
        Commands::Info(args) => info::run_info(&args, registry),
        Commands::IsPortrait(args) => {
            orientation::run_predicate(&args, registry, mediaprobe_core::Orientation::Portrait)
        }
        Commands::IsLandscape(args) => {
            orientation::run_predicate(&args, registry, mediaprobe_core::Orientation::Landscape)
        }
        Commands::Orientation(args) => orientation::run_orientation(&args, registry),
        Commands::SummaryByType(args) => summary::run_summary(&args),
        Commands::Backends => backends::run_backends(registry),
    }
}
