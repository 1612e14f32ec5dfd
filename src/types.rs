//! Core types for file-merger

use serde::Serialize;
use std::path::PathBuf;

/// Terminal state of a single manifest entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntryOutcome {
    /// File content was appended to the output document
    Merged {
        /// Number of content bytes written (excluding header and trailing newline)
        bytes: usize,
    },
    /// Path does not exist or is not a regular file
    Missing,
    /// Path exists but reading it failed
    ReadError {
        /// Human-readable error description
        message: String,
    },
}

impl EntryOutcome {
    /// Whether the entry's content made it into the output
    #[must_use]
    pub const fn is_merged(&self) -> bool {
        matches!(self, Self::Merged { .. })
    }
}

impl std::fmt::Display for EntryOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merged { .. } => write!(f, "merged"),
            Self::Missing => write!(f, "missing"),
            Self::ReadError { message } => write!(f, "error: {message}"),
        }
    }
}

/// A manifest line after resolution and processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    /// Path exactly as written in the manifest (trimmed)
    pub relative: String,
    /// Project root joined with `relative`
    pub absolute: PathBuf,
    /// What happened to this entry
    pub outcome: EntryOutcome,
}

/// Summary of a completed merge run
#[derive(Debug, Clone, Default, Serialize)]
pub struct MergeReport {
    /// Where the output document was written
    pub output_path: PathBuf,
    /// Entries in manifest order
    pub entries: Vec<ResolvedEntry>,
}

impl MergeReport {
    /// Number of entries whose content was merged
    #[must_use]
    pub fn merged_count(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_merged()).count()
    }

    /// Number of entries marked missing
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.outcome == EntryOutcome::Missing)
            .count()
    }

    /// Number of entries that failed to read
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, EntryOutcome::ReadError { .. }))
            .count()
    }

    /// Whether every entry was merged
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|e| e.outcome.is_merged())
    }
}
