// mediaprobe-cli/src/config.rs
//
// Exit codes and environment variable names for the `mediaprobe` binary.

/// Command succeeded, or the queried predicate holds.
pub const EXIT_SUCCESS: i32 = 0;

/// The queried predicate does not hold.
pub const EXIT_FALSE: i32 = 1;

/// Invalid arguments, including malformed or unknown backend names.
/// Matches clap's own usage error code.
pub const EXIT_USAGE: i32 = 2;

/// Orientation cannot be determined because dimensions are unavailable.
pub const EXIT_MISSING_DIMENSIONS: i32 = 3;

/// No requested media could be probed.
pub const EXIT_PROBE_FAILED: i32 = 4;

/// A file size lookup failed during summarization.
pub const EXIT_FILESYSTEM: i32 = 5;

/// Any other failure (output errors, tool plumbing). Kept apart from
/// `EXIT_FALSE` so predicate callers never mistake an error for "no".
pub const EXIT_FAILURE: i32 = 6;

/// Environment variable providing a default for `--backend`.
pub const ENV_BACKEND: &str = "MEDIAPROBE_BACKEND";
