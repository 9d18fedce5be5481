//! Byte-level mutators: surgical overwrite and insert on existing files.
//!
//! Both operations open the file directly for random-access I/O with no
//! buffering, and both refuse offsets beyond the current end of file:
//! sparse files with undefined gap content are never created.
//! Neither operation guards against concurrent use of the same file;
//! callers must serialize access externally.

use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use log::debug;

use crate::errors::{ChunkedIoError, Result};
use crate::path::validate_path;

fn checked_offset<P: AsRef<Path>>(path: P, from_byte: u64) -> Result<u64> {
    let file_size = validate_path(path, true)?;
    if from_byte > file_size {
        return Err(ChunkedIoError::Gap {
            offset: from_byte,
            file_size,
        });
    }
    Ok(file_size)
}

/// Overwrite bytes in `path` starting at `from_byte` (destructive).
///
/// `from_byte == file size` behaves exactly like an append. Bytes beyond
/// the overwritten range are unaffected; if `replacement` extends past the
/// old end of file, the file grows.
///
/// # Errors
///
/// Returns `ChunkedIoError::Gap` when `from_byte` lies beyond the current
/// end of file (the file is left unchanged), `FileNotFound`/`InvalidPath`
/// from validation, and `Io` on write failures.
pub fn overwrite_at<P: AsRef<Path>>(path: P, from_byte: u64, replacement: &[u8]) -> Result<()> {
    let path_ref = path.as_ref();
    checked_offset(path_ref, from_byte)?;

    let mut file = OpenOptions::new().write(true).open(path_ref)?;
    file.seek(SeekFrom::Start(from_byte))?;
    file.write_all(replacement)?;
    Ok(())
}

/// Insert bytes into `path` at `from_byte`, shifting the tail (non-destructive).
///
/// The remainder of the file from `from_byte` is read into memory, then the
/// insertion and the remainder are written back in sequence. Cost is
/// proportional to `file size − from_byte`: cheap near the end of the file,
/// expensive near the start. Callers needing frequent inserts at small
/// offsets in large files should batch them or use a different structure.
///
/// # Errors
///
/// Same error surface as [`overwrite_at`].
pub fn insert_at<P: AsRef<Path>>(path: P, from_byte: u64, insertion: &[u8]) -> Result<()> {
    let path_ref = path.as_ref();
    let file_size = checked_offset(path_ref, from_byte)?;

    // Pass 1: capture everything from the insertion point to end of file.
    let mut remainder = Vec::with_capacity((file_size - from_byte) as usize);
    {
        let mut reader = OpenOptions::new().read(true).open(path_ref)?;
        reader.seek(SeekFrom::Start(from_byte))?;
        reader.read_to_end(&mut remainder)?;
    }

    debug!(
        "inserting {} byte(s) at offset {}, rewriting {} byte tail",
        insertion.len(),
        from_byte,
        remainder.len()
    );

    // Pass 2: write the insertion, then the captured tail right behind it.
    let mut writer = OpenOptions::new().write(true).open(path_ref)?;
    writer.seek(SeekFrom::Start(from_byte))?;
    writer.write_all(insertion)?;
    writer.write_all(&remainder)?;
    Ok(())
}
