//! Crate-specific error types for chunked-io.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for chunked-io operations.
pub type Result<T> = std::result::Result<T, ChunkedIoError>;

/// A single failed chunk read, carrying enough context for callers to know
/// which byte range of the file could not be read.
#[derive(Debug)]
pub struct ChunkFailure {
    /// Ordinal of the chunk within the read plan.
    pub index: usize,
    /// Byte offset at which the chunk starts.
    pub offset: u64,
    /// The underlying I/O error reported by the read task.
    pub source: io::Error,
}

impl fmt::Display for ChunkFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "chunk {} at offset {}: {}",
            self.index, self.offset, self.source
        )
    }
}

/// Error type covering path validation, existence, concurrent reads,
/// reassembly, and mutation issues.
#[derive(Debug, Error)]
pub enum ChunkedIoError {
    /// Wrapper for `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Path failed syntax validation (empty, or ends with a separator).
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// File was required to exist but does not. Distinguished so callers can
    /// treat "nothing there yet" as a recoverable condition.
    #[error("file does not exist: {0}")]
    FileNotFound(PathBuf),

    /// Read produced zero lines and the caller opted in to treating that as
    /// an error via `return_error_on_empty_file`.
    #[error("file empty")]
    FileEmpty,

    /// Unrecognized write mode string. Only `APPEND` and `OVERWRITE` are
    /// supported.
    #[error("unsupported write mode: {0} (only APPEND and OVERWRITE are supported)")]
    InvalidMode(String),

    /// Parent directory creation failed.
    #[error("cannot create directory at {0}")]
    CreateDir(PathBuf),

    /// One or more chunk reads failed. All planned reads run to completion
    /// before this is reported, so every failed range is listed.
    #[error("parallel read failed: {}", format_failures(.failures))]
    ChunkReads {
        /// Per-chunk failures, in chunk-index order.
        failures: Vec<ChunkFailure>,
    },

    /// Assembled length differs from the file size observed at planning time.
    /// The file changed size mid-read or a read undercounted bytes.
    #[error("file size error: expected [{expected}], got [{actual}] bytes")]
    SizeMismatch {
        /// File size observed when the read was planned.
        expected: u64,
        /// Total bytes actually assembled.
        actual: u64,
    },

    /// Write offset lies beyond the current end of file. Sparse gaps with
    /// undefined content are refused.
    #[error("gap not allowed: offset {offset} is beyond end of file ({file_size} bytes)")]
    Gap {
        /// Requested write offset.
        offset: u64,
        /// Current file size in bytes.
        file_size: u64,
    },
}

fn format_failures(failures: &[ChunkFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
