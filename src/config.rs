//! Run configuration
//!
//! Every input of a run is carried here explicitly instead of being read from
//! the working directory or process state deep inside the merge code.

use crate::error::{Error, Result};
use crate::paths::{DEFAULT_ASCENT, MergeLayout};
use std::path::{Path, PathBuf};

/// Explicit configuration for a merge run
///
/// With every field left at its default the layout is derived from the
/// location of the running program, one level below the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConfig {
    /// Directory holding the manifest and output (default: the program's directory)
    pub base_dir: Option<PathBuf>,
    /// Levels from `base_dir` up to the project root
    pub ascent: usize,
    /// Explicit project root, takes precedence over `ascent`
    pub project_root: Option<PathBuf>,
    /// Explicit manifest path
    pub manifest_path: Option<PathBuf>,
    /// Explicit output path
    pub output_path: Option<PathBuf>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            ascent: DEFAULT_ASCENT,
            project_root: None,
            manifest_path: None,
            output_path: None,
        }
    }
}

impl MergeConfig {
    /// Resolve the layout, using `program` when no base directory is set.
    pub fn layout_for(&self, program: &Path) -> Result<MergeLayout> {
        let layout = match &self.base_dir {
            Some(dir) => MergeLayout::from_base_dir(dir, self.ascent)?,
            None => MergeLayout::from_program(program, self.ascent)?,
        };
        Ok(self.apply_overrides(layout))
    }

    /// Resolve the layout against the currently running executable.
    pub fn layout(&self) -> Result<MergeLayout> {
        if let Some(dir) = &self.base_dir {
            let layout = MergeLayout::from_base_dir(dir, self.ascent)?;
            return Ok(self.apply_overrides(layout));
        }
        let program = std::env::current_exe().map_err(Error::ProgramLocation)?;
        self.layout_for(&program)
    }

    fn apply_overrides(&self, mut layout: MergeLayout) -> MergeLayout {
        if let Some(root) = &self.project_root {
            layout = layout.with_project_root(root.clone());
        }
        if let Some(manifest) = &self.manifest_path {
            layout = layout.with_manifest_path(manifest.clone());
        }
        if let Some(output) = &self.output_path {
            layout = layout.with_output_path(output.clone());
        }
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_follows_program() {
        let config = MergeConfig::default();
        let layout = config.layout_for(Path::new("/project/scripts/merger")).unwrap();

        assert_eq!(layout.base_dir, PathBuf::from("/project/scripts"));
        assert_eq!(layout.project_root, PathBuf::from("/project"));
    }

    #[test]
    fn test_base_dir_ignores_program_location() {
        let config = MergeConfig {
            base_dir: Some(PathBuf::from("/work/tools")),
            ..MergeConfig::default()
        };
        let layout = config.layout().unwrap();

        assert_eq!(layout.base_dir, PathBuf::from("/work/tools"));
        assert_eq!(layout.project_root, PathBuf::from("/work"));
        assert_eq!(layout.output_path, PathBuf::from("/work/tools/merged_output.txt"));
    }

    #[test]
    fn test_relative_base_dir_is_taken_from_current_dir() {
        let cwd = std::env::current_dir().unwrap();
        let config = MergeConfig {
            base_dir: Some(PathBuf::from(".")),
            ..MergeConfig::default()
        };
        let layout = config.layout().unwrap();

        assert_eq!(layout.base_dir, cwd);
        assert_eq!(layout.project_root, cwd.parent().unwrap());
    }

    #[test]
    fn test_project_root_beats_ascent() {
        let config = MergeConfig {
            base_dir: Some(PathBuf::from("/work/tools")),
            ascent: 3,
            project_root: Some(PathBuf::from("/src")),
            ..MergeConfig::default()
        };
        let layout = config.layout().unwrap();
        assert_eq!(layout.project_root, PathBuf::from("/src"));
    }

    #[test]
    fn test_manifest_and_output_overrides() {
        let config = MergeConfig {
            manifest_path: Some(PathBuf::from("/lists/review.txt")),
            output_path: Some(PathBuf::from("/out/review.txt")),
            ..MergeConfig::default()
        };
        let layout = config.layout_for(Path::new("/project/scripts/merger")).unwrap();

        assert_eq!(layout.manifest_path, PathBuf::from("/lists/review.txt"));
        assert_eq!(layout.output_path, PathBuf::from("/out/review.txt"));
        assert_eq!(layout.project_root, PathBuf::from("/project"));
    }
}
