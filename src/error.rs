//! Error types for file-merger

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a whole merge run
///
/// Problems with individual manifest entries are never reported through this
/// type; they become [`EntryOutcome`](crate::types::EntryOutcome) values and
/// placeholder lines in the output document.
#[derive(Debug, Error)]
pub enum Error {
    /// The manifest file does not exist
    #[error("manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    /// The manifest exists but could not be read as UTF-8 text
    #[error("failed to read manifest {}: {source}", path.display())]
    ManifestRead {
        /// Manifest path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The output document could not be opened for writing
    #[error("failed to open output file {}: {source}", path.display())]
    OutputOpen {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing to an already opened output document failed
    #[error("failed to write output file {}: {source}", path.display())]
    OutputWrite {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The running executable could not be located
    #[error("failed to locate the running program: {0}")]
    ProgramLocation(#[source] io::Error),

    /// The current directory was needed to resolve a relative path but is unavailable
    #[error("failed to resolve the current directory: {0}")]
    WorkingDirectory(#[source] io::Error),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for file-merger operations
pub type Result<T> = std::result::Result<T, Error>;
