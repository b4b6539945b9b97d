//! JSON-lines intent processing.
//!
//! Each non-blank input line is one [`Command`]. Each produces exactly one
//! output line: the serialized [`Outcome`], or `{"error": "..."}` when the
//! line does not parse or the session rejects it.

use crate::command::{Command, Outcome};
use crate::error::TrackerResult;
use crate::tracker::Tracker;
use mediatrack_storage::BlobBackend;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing::debug;

#[derive(Serialize)]
#[serde(untagged)]
enum Reply {
    Done(Outcome),
    Failed { line: usize, error: String },
}

/// Counts from one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub applied: usize,
    pub failed: usize,
}

/// Feeds every intent in `input` to `tracker`, writing one reply per line.
///
/// Only I/O failures on `input` or `output` abort the run.
pub fn run_batch<B, R, W>(
    tracker: &mut Tracker<B>,
    input: R,
    mut output: W,
) -> TrackerResult<BatchSummary>
where
    B: BlobBackend,
    R: BufRead,
    W: Write,
{
    let mut summary = BatchSummary::default();
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = index + 1;
        let reply = match serde_json::from_str::<Command>(&line) {
            Ok(command) => match tracker.dispatch(command) {
                Ok(outcome) => Reply::Done(outcome),
                Err(e) => Reply::Failed { line: line_no, error: e.to_string() },
            },
            Err(e) => Reply::Failed {
                line: line_no,
                error: format!("invalid intent: {e}"),
            },
        };
        match reply {
            Reply::Done(_) => summary.applied += 1,
            Reply::Failed { .. } => summary.failed += 1,
        }
        serde_json::to_writer(&mut output, &reply).map_err(io::Error::from)?;
        writeln!(output)?;
    }
    output.flush()?;
    debug!(
        applied = summary.applied,
        failed = summary.failed,
        items = tracker.store().len(),
        "Batch complete"
    );
    Ok(summary)
}
