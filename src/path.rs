//! Path validation and file handle resolution.
//!
//! Two modes of validation exist: syntax-only (for files about to be
//! created) and syntax plus existence (for files about to be read). The
//! existence check doubles as the size observation used to plan a
//! parallel read.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::str::FromStr;

use crate::errors::{ChunkedIoError, Result};

/// Open mode for the write helpers. Exactly two modes are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Append to the end of the file, creating it if absent.
    Append,
    /// Truncate the file (or create it) and write from the start.
    Overwrite,
}

impl FromStr for WriteMode {
    type Err = ChunkedIoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "APPEND" => Ok(WriteMode::Append),
            "OVERWRITE" => Ok(WriteMode::Overwrite),
            other => Err(ChunkedIoError::InvalidMode(other.to_string())),
        }
    }
}

/// Validate a path's syntax and, optionally, that the file exists.
///
/// A path must be non-empty and must not end with a separator (it has to
/// name a file, not a directory). When `must_exist` is set, the file's
/// metadata is queried and its size returned; a missing file surfaces as
/// the distinguished [`ChunkedIoError::FileNotFound`] sentinel.
///
/// Returns the file size in bytes when `must_exist` is set, `0` otherwise.
///
/// # Errors
///
/// Returns `ChunkedIoError::InvalidPath` on syntax failures and
/// `ChunkedIoError::FileNotFound` when a required file is absent.
pub fn validate_path<P: AsRef<Path>>(path: P, must_exist: bool) -> Result<u64> {
    let path_ref = path.as_ref();
    let raw = path_ref.to_string_lossy();

    if raw.is_empty() {
        return Err(ChunkedIoError::InvalidPath("path cannot be empty".into()));
    }
    if raw.ends_with('/') || raw.ends_with(std::path::MAIN_SEPARATOR) {
        return Err(ChunkedIoError::InvalidPath(format!(
            "path {raw:?} cannot end with a separator, it should end with a file name"
        )));
    }

    if must_exist {
        match fs::metadata(path_ref) {
            Ok(meta) => Ok(meta.len()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ChunkedIoError::FileNotFound(path_ref.to_path_buf()))
            }
            Err(e) => Err(e.into()),
        }
    } else {
        Ok(0)
    }
}

/// Open a file for writing in the requested mode, optionally creating
/// missing parent directories first.
///
/// # Errors
///
/// Returns `ChunkedIoError::CreateDir` if directory creation fails and
/// `ChunkedIoError::Io` if the open itself fails.
pub fn create_at_path<P: AsRef<Path>>(
    path: P,
    mode: WriteMode,
    create_dirs: bool,
) -> Result<File> {
    let path_ref = path.as_ref();

    if create_dirs {
        if let Some(parent) = path_ref.parent() {
            if !parent.as_os_str().is_empty() && fs::create_dir_all(parent).is_err() {
                return Err(ChunkedIoError::CreateDir(parent.to_path_buf()));
            }
        }
    }

    let file = match mode {
        WriteMode::Append => OpenOptions::new()
            .append(true)
            .create(true)
            .open(path_ref)?,
        WriteMode::Overwrite => OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path_ref)?,
    };
    Ok(file)
}

/// Open an existing file read-only.
///
/// # Errors
///
/// Returns `ChunkedIoError::Io` if the open fails.
pub fn open_for_read<P: AsRef<Path>>(path: P) -> Result<File> {
    Ok(OpenOptions::new().read(true).open(path)?)
}
