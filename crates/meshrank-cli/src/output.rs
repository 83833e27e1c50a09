//! Shared output layer for human/JSON parity across all CLI commands.
//!
//! Every command handler receives an [`OutputMode`] and formats its
//! payload accordingly: a human-readable report, or stable JSON for
//! scripted callers. Floating metric values render with 6 decimal
//! places in human mode; JSON carries full precision.

use std::io::{self, Write};

use meshrank_core::NodeId;
use serde::Serialize;

/// The two output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable report.
    Human,
    /// Machine-readable JSON.
    Json,
}

impl OutputMode {
    /// Resolve from the global `--json` flag.
    pub const fn from_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Human }
    }
}

/// Render a serializable payload to stdout in the requested format.
///
/// In JSON mode the payload is serialized with `serde_json`; in human
/// mode the provided closure renders the report.
pub fn render<T: Serialize>(
    mode: OutputMode,
    value: &T,
    human_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut out, value)?;
            writeln!(out)?;
        }
        OutputMode::Human => {
            human_fn(value, &mut out)?;
        }
    }
    Ok(())
}

/// A structured error for the CLI boundary.
#[derive(Debug, Serialize)]
pub struct CliError {
    /// Human-readable error message.
    pub message: String,
}

impl CliError {
    /// Create an error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Render an error to stderr in the requested format.
pub fn render_error(mode: OutputMode, error: &CliError) -> anyhow::Result<()> {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    match mode {
        OutputMode::Json => {
            let wrapper = serde_json::json!({ "error": error });
            serde_json::to_writer_pretty(&mut out, &wrapper)?;
            writeln!(out)?;
        }
        OutputMode::Human => {
            writeln!(out, "error: {}", error.message)?;
        }
    }
    Ok(())
}

/// Write a ranked top-N list of float-valued nodes, 6 decimal places.
pub fn write_ranked_floats(
    w: &mut dyn Write,
    heading: &str,
    entries: &[(NodeId, f64)],
) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    if entries.is_empty() {
        writeln!(w, "  (no nodes)")?;
        return Ok(());
    }
    for (position, (node, value)) in entries.iter().enumerate() {
        writeln!(w, "  {:>3}. node {node:<12} {value:.6}", position + 1)?;
    }
    Ok(())
}

/// Write a ranked top-N list of integer-valued nodes.
pub fn write_ranked_counts(
    w: &mut dyn Write,
    heading: &str,
    entries: &[(NodeId, usize)],
) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    if entries.is_empty() {
        writeln!(w, "  (no nodes)")?;
        return Ok(());
    }
    for (position, (node, value)) in entries.iter().enumerate() {
        writeln!(w, "  {:>3}. node {node:<12} {value}", position + 1)?;
    }
    Ok(())
}
