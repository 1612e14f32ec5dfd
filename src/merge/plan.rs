//! Merge planning - pure functions for creating merge plans
//!
//! No I/O happens here: entries are only joined onto the project root.
//! Whether a path exists is decided later, by the executor.

use crate::manifest::Manifest;
use std::path::{Path, PathBuf};

/// A manifest entry with its resolved location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    /// Path as written in the manifest
    pub relative: String,
    /// Project root joined with `relative`
    pub absolute: PathBuf,
}

/// Merge plan - ordered entries to process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergePlan {
    /// Root every entry was resolved against
    pub project_root: PathBuf,
    /// Entries in manifest order
    pub entries: Vec<PlannedEntry>,
}

impl MergePlan {
    /// Number of planned entries
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there is nothing to merge
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Create a merge plan from a manifest (PURE)
pub fn create_merge_plan(manifest: &Manifest, project_root: &Path) -> MergePlan {
    let entries = manifest
        .into_iter()
        .map(|relative| PlannedEntry {
            relative: relative.clone(),
            absolute: project_root.join(relative),
        })
        .collect();

    MergePlan {
        project_root: project_root.to_path_buf(),
        entries,
    }
}
