//! Merge execution - effectful operations
//!
//! Takes a `MergePlan` and produces the output document. Per-entry problems
//! are turned into placeholder blocks here; only failures on the output side
//! abort the run.

use crate::error::{Error, Result};
use crate::merge::plan::{MergePlan, PlannedEntry};
use crate::merge::progress::ProgressCallback;
use crate::merge::render::{render_error, render_merged, render_missing};
use crate::text::normalize_newlines;
use crate::types::{EntryOutcome, MergeReport, ResolvedEntry};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Whether a planned entry points at a regular file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// Regular file, would be read
    Present,
    /// Missing or not a regular file
    Missing,
}

/// Check an entry without reading it (used for dry runs)
pub fn inspect_entry(entry: &PlannedEntry) -> EntryStatus {
    if entry.absolute.is_file() {
        EntryStatus::Present
    } else {
        EntryStatus::Missing
    }
}

/// Read a single entry's content as text
///
/// Line endings are normalized to `\n`. Returns `Ok(None)` when the path
/// does not exist or is not a regular file, and `Err` when it exists but
/// reading fails (permissions, invalid UTF-8).
pub fn load_entry(entry: &PlannedEntry) -> io::Result<Option<String>> {
    match fs::metadata(&entry.absolute) {
        Ok(meta) if meta.is_file() => fs::read_to_string(&entry.absolute)
            .map(|content| Some(normalize_newlines(content))),
        _ => Ok(None),
    }
}

/// Write every planned entry to `out`, in plan order
///
/// Returns the resolved entries. Errors are write errors on `out` only.
pub fn write_document<W: Write>(
    plan: &MergePlan,
    out: &mut W,
    progress: &dyn ProgressCallback,
) -> io::Result<Vec<ResolvedEntry>> {
    progress.on_start(plan);

    let mut resolved = Vec::with_capacity(plan.len());
    for entry in &plan.entries {
        let outcome = match load_entry(entry) {
            Ok(Some(content)) => {
                out.write_all(render_merged(&entry.relative, &content).as_bytes())?;
                debug!(path = %entry.relative, bytes = content.len(), "merged file");
                EntryOutcome::Merged {
                    bytes: content.len(),
                }
            }
            Ok(None) => {
                out.write_all(render_missing(&entry.relative).as_bytes())?;
                warn!(path = %entry.relative, "file missing");
                EntryOutcome::Missing
            }
            Err(e) => {
                let message = e.to_string();
                out.write_all(render_error(&entry.relative, &message).as_bytes())?;
                warn!(path = %entry.relative, error = %message, "failed to read file");
                EntryOutcome::ReadError { message }
            }
        };

        let resolved_entry = ResolvedEntry {
            relative: entry.relative.clone(),
            absolute: entry.absolute.clone(),
            outcome,
        };
        progress.on_entry(&resolved_entry);
        resolved.push(resolved_entry);
    }

    Ok(resolved)
}

/// Execute the merge plan (EFFECTFUL)
///
/// Creates (or truncates) `output_path`, writes one block per entry and
/// flushes the file before returning.
pub fn execute_merge(
    plan: &MergePlan,
    output_path: &Path,
    progress: &dyn ProgressCallback,
) -> Result<MergeReport> {
    let file = File::create(output_path).map_err(|source| Error::OutputOpen {
        path: output_path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let write_error = |source| Error::OutputWrite {
        path: output_path.to_path_buf(),
        source,
    };

    let entries = write_document(plan, &mut writer, progress).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    let report = MergeReport {
        output_path: output_path.to_path_buf(),
        entries,
    };
    info!(
        output = %output_path.display(),
        merged = report.merged_count(),
        missing = report.missing_count(),
        errors = report.error_count(),
        "merge complete"
    );
    progress.on_finish(&report);

    Ok(report)
}
