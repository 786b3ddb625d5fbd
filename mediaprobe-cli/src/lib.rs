// mediaprobe-cli/src/lib.rs
//
// Library portion of the mediaprobe CLI application.
// Contains argument definitions, command logic and output rendering.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands};
pub use error::{CliResult, exit_code_for};
