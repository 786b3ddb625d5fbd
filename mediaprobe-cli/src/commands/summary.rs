//! Implementation of the `summary-by-type` subcommand.

use crate::cli::SummaryArgs;
use crate::config::EXIT_SUCCESS;
use crate::error::CliResult;
use crate::output::{print_json, print_summary_table};

use mediaprobe_core::{StdFsMetadataProvider, SummaryPolicy, summarize_by_type};

/// Maps the `--skip-missing` flag onto a summary policy.
#[must_use]
pub fn policy_for(args: &SummaryArgs) -> SummaryPolicy {
    if args.skip_missing {
        SummaryPolicy::SkipInaccessible
    } else {
        SummaryPolicy::Abort
    }
}

/// Summarizes MEDIA by type and prints a table or JSON rows.
pub fn run_summary(args: &SummaryArgs) -> CliResult<i32> {
    let rows = summarize_by_type(&args.media, &StdFsMetadataProvider, policy_for(args))?;

    if args.json {
        print_json(&rows, false)?;
    } else {
        print_summary_table(&rows)?;
    }

    Ok(EXIT_SUCCESS)
}
