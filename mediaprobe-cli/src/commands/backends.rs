//! Implementation of the `backends` subcommand.

use crate::config::EXIT_SUCCESS;
use crate::error::CliResult;
use crate::output::print_line;

use mediaprobe_core::BackendRegistry;

/// One line per registered backend: name, default position, availability.
#[must_use]
pub fn describe_backends(registry: &BackendRegistry) -> Vec<String> {
    registry
        .names()
        .into_iter()
        .map(|name| {
            let default = registry
                .defaults()
                .iter()
                .position(|d| d == name)
                .map(|i| format!("default #{}", i + 1))
                .unwrap_or_else(|| "-".to_string());
            let available = match registry.get(name) {
                Some(backend) if backend.is_available() => "available",
                _ => "unavailable",
            };
            format!("{name:<12} {default:<12} {available}")
        })
        .collect()
}

pub fn run_backends(registry: &BackendRegistry) -> CliResult<i32> {
    for line in describe_backends(registry) {
        print_line(&line)?;
    }
    Ok(EXIT_SUCCESS)
}
