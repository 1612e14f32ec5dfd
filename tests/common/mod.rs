//! Shared fixtures for file-merger tests
//!
//! Not every helper is used by every test binary.

#![allow(dead_code)]

use file_merger::paths::MergeLayout;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Directory under the project root that plays the role of the program's directory
pub const BASE_DIR_NAME: &str = "scripts";

/// A throwaway project tree:
///
/// ```text
/// <root>/
///   scripts/          base dir: manifest and output live here
///     file_list.txt
///   ...               files named by the manifest
/// ```
pub struct TempProject {
    dir: TempDir,
}

impl TempProject {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(BASE_DIR_NAME)).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn base_dir(&self) -> PathBuf {
        self.root().join(BASE_DIR_NAME)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.base_dir().join("file_list.txt")
    }

    pub fn output_path(&self) -> PathBuf {
        self.base_dir().join("merged_output.txt")
    }

    pub fn layout(&self) -> MergeLayout {
        MergeLayout::from_base_dir(self.base_dir(), 1).unwrap()
    }

    /// Write a file relative to the project root, creating parent directories
    pub fn write_file(&self, relative: &str, content: impl AsRef<[u8]>) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn write_manifest(&self, content: &str) {
        fs::write(self.manifest_path(), content).unwrap();
    }

    pub fn read_output(&self) -> String {
        fs::read_to_string(self.output_path()).unwrap()
    }
}

/// Expected bytes for a merged block
pub fn merged_block(relative: &str, content: &str) -> String {
    let rule = "=".repeat(50);
    format!("\n{rule}\nFile: {relative}\n{rule}\n\n{content}\n")
}

/// Expected bytes for a missing-file placeholder
pub fn missing_block(relative: &str) -> String {
    format!("\n!! [MISSING FILE] {relative} !!\n")
}

/// The manifest from the documented example scenario
pub const SCENARIO_MANIFEST: &str = "a.txt\n\n# comment\nb.txt\nc.txt\n";

/// Project for the example scenario: `a.txt` and `c.txt` exist, `b.txt` doesn't
pub fn scenario_project() -> TempProject {
    let project = TempProject::new();
    project.write_file("a.txt", "first file\n");
    project.write_file("c.txt", "third file");
    project.write_manifest(SCENARIO_MANIFEST);
    project
}

/// Expected output of the example scenario
pub fn scenario_output() -> String {
    format!(
        "{}{}{}",
        merged_block("a.txt", "first file\n"),
        missing_block("b.txt"),
        merged_block("c.txt", "third file")
    )
}
