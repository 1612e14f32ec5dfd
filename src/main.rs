//! merger - concatenate manifest-listed files into one document
//!
//! Reads `file_list.txt` next to the executable, resolves each line against
//! the directory one level up, and writes `merged_output.txt` next to the
//! executable. Every location can be overridden from the command line.

mod cli;

use anstream::eprintln;
use anyhow::Context;
use clap::{ArgAction, Parser};
use cli::style::Stylize;
use cli::{MergeOptions, run_merge};
use file_merger::config::MergeConfig;
use file_merger::logging;
use file_merger::paths::DEFAULT_ASCENT;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "merger")]
#[command(about = "Concatenate the files listed in a manifest into a single document", version)]
struct Cli {
    /// Directory holding file_list.txt and merged_output.txt (default: the executable's directory)
    #[arg(long, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// Number of levels from the base directory up to the project root
    #[arg(long, value_name = "N", default_value_t = DEFAULT_ASCENT)]
    ascend: usize,

    /// Project root to resolve manifest entries against (overrides --ascend)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Manifest file (default: <base-dir>/file_list.txt)
    #[arg(long, value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Output file (default: <base-dir>/merged_output.txt)
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Show what would be merged without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Print a JSON report instead of progress output
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn config(&self) -> MergeConfig {
        MergeConfig {
            base_dir: self.base_dir.clone(),
            ascent: self.ascend,
            project_root: self.root.clone(),
            manifest_path: self.manifest.clone(),
            output_path: self.output.clone(),
        }
    }

    const fn options(&self) -> MergeOptions {
        MergeOptions {
            dry_run: self.dry_run,
            json: self.json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".error());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    run_merge(&cli.config(), &cli.options()).context("merge aborted")?;
    Ok(())
}
