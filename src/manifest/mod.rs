//! Manifest loading
//!
//! A manifest is a plain UTF-8 file with one project-relative path per line.
//! Blank lines and lines whose first non-whitespace character is `#` are
//! ignored. Order is preserved and duplicates are kept.

use crate::error::{Error, Result};
use crate::text::normalize_newlines;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Comment marker for manifest lines.
const COMMENT_PREFIX: char = '#';

/// Ordered list of relative paths to merge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<String>,
}

impl Manifest {
    /// Entries in file order.
    pub const fn entries(&self) -> &[String] {
        self.entries.as_slice()
    }

    /// Number of entries.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest lists nothing.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Filter manifest text into entries.
///
/// `\r\n`, `\n` and a lone `\r` all end a line.
pub fn parse_manifest(content: &str) -> Manifest {
    let entries = content
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
        .map(String::from)
        .collect();
    Manifest { entries }
}

/// Load the manifest at `path`.
///
/// Fails with [`Error::ManifestNotFound`] when the file doesn't exist, so the
/// caller can abort before any output is created.
pub fn read_manifest(path: &Path) -> Result<Manifest> {
    if !path.exists() {
        return Err(Error::ManifestNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| Error::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    let manifest = parse_manifest(&normalize_newlines(content));
    debug!(path = %path.display(), entries = manifest.len(), "loaded manifest");
    Ok(manifest)
}
