//! Merge engine
//!
//! Three-phase pattern:
//! 1. Plan - resolve manifest entries against the project root (pure)
//! 2. Render - format merged and placeholder blocks (pure)
//! 3. Execute - read sources and write the output document (effectful)

mod execute;
mod plan;
mod progress;
mod render;

pub use execute::{EntryStatus, execute_merge, inspect_entry, load_entry, write_document};
pub use plan::{MergePlan, PlannedEntry, create_merge_plan};
pub use progress::{NoopProgress, ProgressCallback};
pub use render::{SEPARATOR, SEPARATOR_WIDTH, render_error, render_merged, render_missing};

use crate::error::Result;
use crate::manifest::read_manifest;
use crate::paths::MergeLayout;
use crate::types::MergeReport;

/// Read the manifest, plan and execute in one go
///
/// The manifest is read before the output is opened, so a missing manifest
/// leaves any existing output untouched.
pub fn merge_layout(layout: &MergeLayout, progress: &dyn ProgressCallback) -> Result<MergeReport> {
    let manifest = read_manifest(&layout.manifest_path)?;
    let plan = create_merge_plan(&manifest, &layout.project_root);
    execute_merge(&plan, &layout.output_path, progress)
}
