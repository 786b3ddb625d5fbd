// ============================================================================
// mediaprobe-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger initialisation for the mediaprobe binary
//
// The application uses the standard `log` facade with `env_logger` as the
// backend. All log output goes to stderr so stdout stays parseable.
//
// USAGE:
// - default: warnings and errors (per-item probe failures are errors)
// - --verbose: debug output, including spawned tool commands
// - RUST_LOG=...: overrides both

/// Log filter used when neither RUST_LOG nor --verbose is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter used with --verbose.
pub const VERBOSE_LOG_FILTER: &str = "debug";

/// Returns the default filter for the given verbosity.
#[must_use]
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    }
}

/// Initialises env_logger. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or(default_filter(verbose));
    let result = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(verbose)
        .try_init();

    if result.is_err() {
        log::debug!("Logger already initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "warn");
        assert_eq!(default_filter(true), "debug");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logging(false);
        init_logging(true);
    }
}
