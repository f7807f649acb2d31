//! Error types for the conversion pipeline.

use std::io;
use std::path::PathBuf;

/// Result type defaulting to [`ConvertError`].
pub type Result<T, E = ConvertError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The first line of an entry file matched none of the known header
    /// shapes. Carries the offending line for diagnostics.
    #[error("unrecognized header in {path}: {line:?}")]
    UnmatchedHeader { path: PathBuf, line: String },

    /// An entry file could not be read.
    #[error("failed to read {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output sink rejected a write.
    #[error("failed to write output")]
    WriteOutput(#[from] io::Error),
}
