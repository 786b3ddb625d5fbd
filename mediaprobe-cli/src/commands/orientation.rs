//! Implementation of the `is-portrait`, `is-landscape` and `orientation`
//! subcommands.
//!
//! These are thin adapters over `mediaprobe_core::classify_orientation`: they
//! probe a single reference, classify it, and turn the result into an exit
//! code and an optional sentence.

use crate::cli::{OrientationArgs, PredicateArgs};
use crate::config::{EXIT_FALSE, EXIT_SUCCESS};
use crate::error::{CliErrorContext, CliResult};
use crate::output::{print_json, print_line};

use mediaprobe_core::{
    BackendRegistry, CoreError, MediaMetadata, Orientation, OrientationReport,
    classify_orientation, get_info_with,
};
use serde::Serialize;

/// Probes exactly one reference, turning a per-item failure into an error.
pub fn probe_single(
    registry: &BackendRegistry,
    media: &str,
    backend: Option<&str>,
) -> CliResult<MediaMetadata> {
    let mut batch = get_info_with(registry, &[media], backend)?;
    if let Some(item) = batch.items.pop() {
        return Ok(item);
    }
    let failure = batch
        .failures
        .pop()
        .cli_context(format!("No result for {media}"))?;
    Err(CoreError::from(failure))
}

/// Sentence describing whether `media` has the queried orientation.
#[must_use]
pub fn predicate_sentence(media: &str, queried: Orientation, holds: bool) -> String {
    if holds {
        format!("{media} is {queried}")
    } else {
        format!("{media} is not {queried}")
    }
}

/// Exit code for a predicate result: 0 when it holds, 1 otherwise.
#[must_use]
pub fn predicate_exit_code(holds: bool) -> i32 {
    if holds { EXIT_SUCCESS } else { EXIT_FALSE }
}

/// Runs `is-portrait` (queried = Portrait) or `is-landscape`.
pub fn run_predicate(
    args: &PredicateArgs,
    registry: &BackendRegistry,
    queried: Orientation,
) -> CliResult<i32> {
    let metadata = probe_single(registry, &args.media, args.backend.backend.as_deref())?;
    let report = classify_orientation(&metadata)?;

    let holds = report.orientation == queried;
    log::debug!("{}: {:?}", args.media, report);

    if !args.quiet {
        print_line(&predicate_sentence(&args.media, queried, holds))?;
    }

    Ok(predicate_exit_code(holds))
}

#[derive(Debug, Serialize)]
struct MediaOrientation<'a> {
    media: &'a str,
    #[serde(flatten)]
    report: OrientationReport,
}

/// Runs `orientation`: prints the orientation name or the full report.
pub fn run_orientation(args: &OrientationArgs, registry: &BackendRegistry) -> CliResult<i32> {
    let metadata = probe_single(registry, &args.media, args.backend.backend.as_deref())?;
    let report = classify_orientation(&metadata)?;

    if args.json {
        print_json(
            &MediaOrientation {
                media: &args.media,
                report,
            },
            false,
        )?;
    } else {
        print_line(report.orientation.as_str())?;
    }

    Ok(EXIT_SUCCESS)
}
