//! Path resolution for a merge run
//!
//! By default everything is derived from where the program itself lives:
//! the manifest and output sit next to the executable, and the project root
//! is one directory above it.

use crate::error::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Filename of the manifest inside the base directory.
pub const MANIFEST_FILENAME: &str = "file_list.txt";

/// Filename of the merged document inside the base directory.
pub const OUTPUT_FILENAME: &str = "merged_output.txt";

/// Levels between the base directory and the project root.
pub const DEFAULT_ASCENT: usize = 1;

/// Resolved locations for one merge run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeLayout {
    /// Directory holding the manifest and the output document
    pub base_dir: PathBuf,
    /// Directory manifest entries are resolved against
    pub project_root: PathBuf,
    /// Manifest location
    pub manifest_path: PathBuf,
    /// Output document location
    pub output_path: PathBuf,
}

impl MergeLayout {
    /// Derive a layout from a base directory.
    ///
    /// A relative `base_dir` is taken against the current directory, so the
    /// project root is always a real ancestor of it.
    pub fn from_base_dir(base_dir: impl AsRef<Path>, ascent: usize) -> Result<Self> {
        let base_dir = absolutize(base_dir.as_ref())?;
        Ok(Self {
            project_root: ascend(&base_dir, ascent),
            manifest_path: base_dir.join(MANIFEST_FILENAME),
            output_path: base_dir.join(OUTPUT_FILENAME),
            base_dir,
        })
    }

    /// Derive a layout from the path of the running program.
    ///
    /// The base directory is the directory containing `program`.
    pub fn from_program(program: &Path, ascent: usize) -> Result<Self> {
        let base_dir = match program.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        Self::from_base_dir(base_dir, ascent)
    }

    /// Replace the project root.
    #[must_use]
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = root.into();
        self
    }

    /// Replace the manifest path.
    #[must_use]
    pub fn with_manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = path.into();
        self
    }

    /// Replace the output path.
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}

/// Make `path` absolute and fold `.` and `..` components lexically.
///
/// Symlinks are not resolved.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path).map_err(Error::WorkingDirectory)?;
    Ok(normalize(&absolute))
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `pop` is a no-op at the root, matching `/..` == `/`
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Walk `levels` parent directories up from `dir`.
///
/// Stops at the topmost ancestor when `dir` has fewer than `levels` parents.
pub fn ascend(dir: &Path, levels: usize) -> PathBuf {
    dir.ancestors()
        .nth(levels)
        .or_else(|| dir.ancestors().last())
        .unwrap_or(dir)
        .to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_from_program() {
        let layout = MergeLayout::from_program(Path::new("/project/scripts/merger"), 1).unwrap();

        assert_eq!(layout.base_dir, PathBuf::from("/project/scripts"));
        assert_eq!(layout.project_root, PathBuf::from("/project"));
        assert_eq!(
            layout.manifest_path,
            PathBuf::from("/project/scripts/file_list.txt")
        );
        assert_eq!(
            layout.output_path,
            PathBuf::from("/project/scripts/merged_output.txt")
        );
    }

    #[test]
    fn test_layout_deeper_ascent() {
        let layout = MergeLayout::from_base_dir("/project/tools/build", 2).unwrap();
        assert_eq!(layout.project_root, PathBuf::from("/project"));
        assert_eq!(
            layout.manifest_path,
            PathBuf::from("/project/tools/build/file_list.txt")
        );
    }

    #[test]
    fn test_zero_ascent_uses_base_dir() {
        let layout = MergeLayout::from_base_dir("/project/scripts", 0).unwrap();
        assert_eq!(layout.project_root, PathBuf::from("/project/scripts"));
    }

    #[test]
    fn test_current_dir_base_ascends_to_parent() {
        let cwd = std::env::current_dir().unwrap();
        let layout = MergeLayout::from_base_dir(".", 1).unwrap();

        assert_eq!(layout.base_dir, cwd);
        assert_eq!(layout.project_root, cwd.parent().unwrap());
        assert_eq!(layout.manifest_path, cwd.join(MANIFEST_FILENAME));
    }

    #[test]
    fn test_relative_base_ascends_past_current_dir() {
        let cwd = std::env::current_dir().unwrap();
        let layout = MergeLayout::from_base_dir("scripts", 2).unwrap();

        assert_eq!(layout.base_dir, cwd.join("scripts"));
        assert_eq!(layout.project_root, cwd.parent().unwrap());
    }

    #[test]
    fn test_parent_components_are_folded() {
        let layout = MergeLayout::from_base_dir("/project/scripts/../tools/./build", 1).unwrap();
        assert_eq!(layout.base_dir, PathBuf::from("/project/tools/build"));
        assert_eq!(layout.project_root, PathBuf::from("/project/tools"));
    }

    #[test]
    fn test_bare_program_name_uses_current_dir() {
        let cwd = std::env::current_dir().unwrap();
        let layout = MergeLayout::from_program(Path::new("merger"), 1).unwrap();
        assert_eq!(layout.base_dir, cwd);
    }

    #[test]
    fn test_ascend_stops_at_root() {
        assert_eq!(ascend(Path::new("/a"), 5), PathBuf::from("/"));
    }

    #[test]
    fn test_normalize_parent_of_root() {
        assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
    }

    #[test]
    fn test_overrides_replace_single_fields() {
        let layout = MergeLayout::from_base_dir("/project/scripts", 1)
            .unwrap()
            .with_project_root("/elsewhere")
            .with_output_path("/tmp/out.txt");

        assert_eq!(layout.project_root, PathBuf::from("/elsewhere"));
        assert_eq!(layout.output_path, PathBuf::from("/tmp/out.txt"));
        assert_eq!(
            layout.manifest_path,
            PathBuf::from("/project/scripts/file_list.txt")
        );
    }
}
