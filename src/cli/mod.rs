//! Command-line front end for the `merger` binary

pub mod context;
pub mod merge;
pub mod style;

pub use merge::{MergeOptions, run_merge};

use anstream::println;
use file_merger::merge::{MergePlan, ProgressCallback};
use file_merger::types::{EntryOutcome, MergeReport, ResolvedEntry};
use indicatif::ProgressBar;
use style::{Stylize, check, cross, warning};

/// Console progress: a bar on stderr plus one line per entry on stdout
///
/// The bar hides itself when stderr isn't a terminal; the per-entry lines are
/// always printed.
pub struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    /// Create a progress reporter with an empty bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(style::bar_style());
        Self { bar }
    }
}

impl Default for CliProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressCallback for CliProgress {
    fn on_start(&self, plan: &MergePlan) {
        self.bar.set_length(plan.len() as u64);
    }

    fn on_entry(&self, entry: &ResolvedEntry) {
        self.bar.suspend(|| print_entry(entry));
        self.bar.set_message(entry.relative.clone());
        self.bar.inc(1);
    }

    fn on_finish(&self, _report: &MergeReport) {
        self.bar.finish_and_clear();
    }
}

fn print_entry(entry: &ResolvedEntry) {
    match &entry.outcome {
        EntryOutcome::Merged { .. } => {
            println!("  {} Processed: {}", check(), entry.relative.accent());
        }
        EntryOutcome::Missing => {
            println!(
                "  {} {} {}",
                warning(),
                "[skipped] file not found:".warn(),
                entry.relative.accent()
            );
        }
        EntryOutcome::ReadError { message } => {
            println!(
                "  {} {} {}: {}",
                cross(),
                "[error] failed to read".error(),
                entry.relative.accent(),
                message.muted()
            );
        }
    }
}
