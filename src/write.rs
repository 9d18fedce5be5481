//! Whole-file write helpers and the buffered sequential writer.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::{ChunkedIoError, Result};
use crate::path::{create_at_path, validate_path, WriteMode};

/// Write `data` to `path` in one call, appending or overwriting per `mode`.
/// With `create_dirs`, missing parent directories are created first.
///
/// # Errors
///
/// Returns `InvalidPath`, `CreateDir`, or `Io` errors from resolution and
/// the write itself.
pub fn put_contents<P: AsRef<Path>>(
    path: P,
    data: &str,
    mode: WriteMode,
    create_dirs: bool,
) -> Result<()> {
    validate_path(&path, false)?;
    let mut file = create_at_path(&path, mode, create_dirs)?;
    file.write_all(data.as_bytes())?;
    Ok(())
}

/// Read the whole file at `path` as a string.
///
/// # Errors
///
/// Returns `FileNotFound` when the file is absent, `InvalidPath` on syntax
/// failures, and `Io` otherwise.
pub fn read_contents<P: AsRef<Path>>(path: P) -> Result<String> {
    validate_path(&path, true)?;
    Ok(fs::read_to_string(path)?)
}

/// Buffered sequential writer for producing a file from many small writes.
///
/// Writes accumulate in an internal buffer and reach the file when the
/// buffer fills or on [`BufferedWriter::finish`]. Dropping the writer
/// without calling `finish` still flushes on a best-effort basis, but any
/// flush error is lost; call `finish` to observe it.
#[derive(Debug)]
pub struct BufferedWriter {
    inner: BufWriter<fs::File>,
}

impl BufferedWriter {
    /// Open `path` for buffered writing in the given mode.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath`, `CreateDir`, or `Io` errors from resolution.
    pub fn create<P: AsRef<Path>>(path: P, mode: WriteMode, create_dirs: bool) -> Result<Self> {
        validate_path(&path, false)?;
        let file = create_at_path(&path, mode, create_dirs)?;
        Ok(Self {
            inner: BufWriter::new(file),
        })
    }

    /// Append `data` to the buffer.
    ///
    /// # Errors
    ///
    /// Returns `Io` if flushing a full buffer to the file fails.
    pub fn write(&mut self, data: &str) -> Result<()> {
        self.inner.write_all(data.as_bytes())?;
        Ok(())
    }

    /// Flush any buffered bytes and close the file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the final flush fails.
    pub fn finish(mut self) -> Result<()> {
        self.inner.flush().map_err(ChunkedIoError::from)
    }
}
