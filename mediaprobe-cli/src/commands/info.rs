//! Implementation of the `info` subcommand.

use crate::cli::InfoArgs;
use crate::config::{EXIT_PROBE_FAILED, EXIT_SUCCESS};
use crate::error::CliResult;
use crate::output::{InfoOutput, print_json};

use mediaprobe_core::{BackendRegistry, get_info_with};

/// Probes every MEDIA and prints the successful results.
///
/// Failed items are reported on stderr by the core logger. The exit code is
/// non-zero only when nothing could be probed.
pub fn run_info(args: &InfoArgs, registry: &BackendRegistry) -> CliResult<i32> {
    let batch = get_info_with(registry, &args.media, args.backend.backend.as_deref())?;

    let requested = args.media.len();
    let any_succeeded = !batch.items.is_empty();

    if let Some(output) = InfoOutput::from_batch(requested, batch) {
        print_json(&output, args.compact)?;
    }

    if any_succeeded || requested == 0 {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_PROBE_FAILED)
    }
}
