//! Output rendering for the CLI.
//!
//! JSON goes to stdout; the summary table uses `console` styling, which is
//! dropped automatically when stdout is not a terminal.

use crate::error::{CliErrorContext, CliResult};

use console::style;
use mediaprobe_core::{BatchResult, CoreError, MediaMetadata, TypeSummaryRow, format_bytes};
use serde::Serialize;
use std::io::{self, Write};

/// Shape of `info` output: one object when one reference was requested, an
/// array otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InfoOutput {
    Single(MediaMetadata),
    Many(Vec<MediaMetadata>),
}

impl InfoOutput {
    /// Shapes a batch for display. Returns `None` when a single reference was
    /// requested and it could not be probed.
    pub fn from_batch(requested: usize, batch: BatchResult) -> Option<Self> {
        let mut items = batch.items;
        if requested == 1 {
            items.pop().map(InfoOutput::Single)
        } else {
            Some(InfoOutput::Many(items))
        }
    }
}

/// Writes a value as JSON to stdout.
pub fn print_json<T: Serialize>(value: &T, compact: bool) -> CliResult<()> {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .map_err(|e| CoreError::OperationFailed(format!("Failed to serialize output: {e}")))?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}").cli_context("Failed to write output")
}

/// Writes one line to stdout.
pub fn print_line(line: &str) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{line}").cli_context("Failed to write output")
}

/// Renders summary rows as an aligned table.
#[must_use]
pub fn render_summary_table(rows: &[TypeSummaryRow]) -> Vec<String> {
    let label_width = rows
        .iter()
        .map(|r| r.label.len())
        .chain(std::iter::once("TYPE".len()))
        .max()
        .unwrap_or_default();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format!(
        "{}",
        style(format!("{:<label_width$}  {:>6}  {:>12}", "TYPE", "COUNT", "SIZE")).bold()
    ));
    for row in rows {
        lines.push(format!(
            "{:<label_width$}  {:>6}  {:>12}",
            row.label,
            row.count,
            format_bytes(row.total_size)
        ));
    }
    lines
}

/// Prints summary rows as a table.
pub fn print_summary_table(rows: &[TypeSummaryRow]) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    for line in render_summary_table(rows) {
        writeln!(stdout, "{line}").cli_context("Failed to write output")?;
    }
    Ok(())
}

/// Prints a fatal error to stderr.
pub fn print_error(err: &CoreError) {
    eprintln!("{} {}", style("Error:").red().bold().for_stderr(), err);
}
