//! file-merger - concatenate manifest-listed files into one document
//!
//! A manifest (`file_list.txt`) names project-relative paths, one per line.
//! Each listed file is appended to `merged_output.txt` under a header; files
//! that are missing or unreadable leave a placeholder line instead, and the
//! run carries on.
//!
//! ```no_run
//! use file_merger::config::MergeConfig;
//! use file_merger::manifest::read_manifest;
//! use file_merger::merge::{NoopProgress, create_merge_plan, execute_merge};
//!
//! # fn main() -> file_merger::error::Result<()> {
//! let layout = MergeConfig::default().layout()?;
//! let manifest = read_manifest(&layout.manifest_path)?;
//! let plan = create_merge_plan(&manifest, &layout.project_root);
//! let report = execute_merge(&plan, &layout.output_path, &NoopProgress)?;
//! println!("merged {} file(s)", report.merged_count());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod merge;
pub mod paths;
pub mod text;
pub mod types;

pub use config::MergeConfig;
pub use error::{Error, Result};
pub use manifest::{Manifest, parse_manifest, read_manifest};
pub use merge::{MergePlan, create_merge_plan, execute_merge, merge_layout};
pub use paths::MergeLayout;
pub use types::{EntryOutcome, MergeReport, ResolvedEntry};
