//! Progress reporting hooks

use crate::merge::plan::MergePlan;
use crate::types::{MergeReport, ResolvedEntry};

/// Progress callback for merge execution
///
/// The library never prints; front ends implement this to show progress.
pub trait ProgressCallback {
    /// Called once before the first entry is processed
    fn on_start(&self, _plan: &MergePlan) {}

    /// Called after each entry reaches its terminal state
    fn on_entry(&self, entry: &ResolvedEntry);

    /// Called after the output document has been flushed
    fn on_finish(&self, _report: &MergeReport) {}
}

/// Progress callback that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry(&self, _entry: &ResolvedEntry) {}
}
