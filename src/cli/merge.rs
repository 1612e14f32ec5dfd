//! Merge command - concatenate the manifest's files into the output document

use crate::cli::CliProgress;
use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, check, cross, warning};
use anstream::println;
use file_merger::config::MergeConfig;
use file_merger::error::{Error, Result};
use file_merger::merge::{EntryStatus, MergePlan, NoopProgress, execute_merge, inspect_entry};
use file_merger::paths::MergeLayout;
use file_merger::types::MergeReport;
use serde::Serialize;
use std::path::PathBuf;

/// Width of the rule printed around progress output
const RULE_WIDTH: usize = 30;

/// Options for the merge command
#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    /// Show what would be merged without writing the output
    pub dry_run: bool,
    /// Print a JSON report instead of human-readable progress
    pub json: bool,
}

/// Run the merge command
pub fn run_merge(config: &MergeConfig, options: &MergeOptions) -> Result<()> {
    let layout = config.layout()?;

    if !options.json {
        print_layout(&layout);
    }

    let ctx = CommandContext::load(layout)?;
    let plan = ctx.plan();

    if options.dry_run {
        if options.json {
            print_json(&dry_run_report(&plan))?;
        } else {
            report_merge_dry_run(&plan, &ctx.layout);
        }
        return Ok(());
    }

    let report = if options.json {
        execute_merge(&plan, &ctx.layout.output_path, &NoopProgress)?
    } else {
        println!(
            "{}",
            format!("Merging {} file(s)...", plan.len()).emphasis()
        );
        execute_merge(&plan, &ctx.layout.output_path, &CliProgress::new())?
    };

    if options.json {
        print_json(&report)?;
    } else {
        print_merge_summary(&report);
    }

    Ok(())
}

/// Print where everything lives before starting
fn print_layout(layout: &MergeLayout) {
    println!("Base directory: {}", layout.base_dir.display().accent());
    println!("Project root:   {}", layout.project_root.display().accent());
    println!("{}", "-".repeat(RULE_WIDTH).muted());
}

/// Print merge summary
fn print_merge_summary(report: &MergeReport) {
    println!("{}", "-".repeat(RULE_WIDTH).muted());
    if report.is_complete() {
        println!("{} Merge complete!", check());
    } else {
        println!("{} Merge complete with problems", warning());
    }

    println!(
        "   {} merged, {} missing, {} unreadable",
        report.merged_count().success(),
        report.missing_count().warn(),
        report.error_count().error()
    );
    println!(
        "   Output file: {}",
        report.output_path.display().accent()
    );
}

/// Report what would be merged (dry run)
fn report_merge_dry_run(plan: &MergePlan, layout: &MergeLayout) {
    println!("{}:", "Merge plan".emphasis());
    println!();

    if plan.is_empty() {
        println!("  {}", "No files listed in manifest".muted());
        println!();
        return;
    }

    for entry in &plan.entries {
        match inspect_entry(entry) {
            EntryStatus::Present => {
                println!("  {} {}", format!("{} Would merge", check()).success(), entry.relative);
            }
            EntryStatus::Missing => {
                println!(
                    "  {} {}",
                    format!("{} Would mark missing", cross()).warn(),
                    entry.relative
                );
            }
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "Run without --dry-run to write {}.",
            layout.output_path.display()
        )
        .muted()
    );
}

/// One planned entry in a JSON dry-run report
#[derive(Debug, Serialize)]
struct DryRunEntry<'a> {
    relative: &'a str,
    absolute: &'a PathBuf,
    status: &'static str,
}

/// JSON dry-run report
#[derive(Debug, Serialize)]
struct DryRunReport<'a> {
    dry_run: bool,
    project_root: &'a PathBuf,
    entries: Vec<DryRunEntry<'a>>,
}

fn dry_run_report(plan: &MergePlan) -> DryRunReport<'_> {
    let entries = plan
        .entries
        .iter()
        .map(|entry| DryRunEntry {
            relative: &entry.relative,
            absolute: &entry.absolute,
            status: match inspect_entry(entry) {
                EntryStatus::Present => "present",
                EntryStatus::Missing => "missing",
            },
        })
        .collect();

    DryRunReport {
        dry_run: true,
        project_root: &plan.project_root,
        entries,
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Error::Internal(format!("failed to serialize report: {e}")))?;
    println!("{json}");
    Ok(())
}
