//! Shared command context
//!
//! Holds the resolved layout and the loaded manifest. Building it is the only
//! step that can abort a run before the output file is touched.

use file_merger::error::Result;
use file_merger::manifest::{Manifest, read_manifest};
use file_merger::merge::{MergePlan, create_merge_plan};
use file_merger::paths::MergeLayout;

/// Everything a merge command needs before it starts writing
pub struct CommandContext {
    /// Resolved paths for this run
    pub layout: MergeLayout,
    /// Entries to merge, in order
    pub manifest: Manifest,
}

impl CommandContext {
    /// Load the manifest named by `layout`
    ///
    /// Fails with `ManifestNotFound` or `ManifestRead`; no output is created
    /// in either case.
    pub fn load(layout: MergeLayout) -> Result<Self> {
        let manifest = read_manifest(&layout.manifest_path)?;
        Ok(Self { layout, manifest })
    }

    /// Plan the merge against the project root
    pub fn plan(&self) -> MergePlan {
        create_merge_plan(&self.manifest, &self.layout.project_root)
    }
}
