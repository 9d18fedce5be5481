//! Parallel chunk reading and in-order reassembly.
//!
//! Each planned chunk is read by its own task using a positioned read: the
//! offset travels with the call, so concurrent readers never share or move
//! a file cursor. Fan-in is a scoped join sized exactly to the number of
//! chunks; a failing read never cancels its siblings, and all failures are
//! collected into one structured aggregate error after every task has
//! reported.

use std::fs::File;
use std::io::{self, ErrorKind};
use std::thread;

use log::{debug, warn};

use crate::errors::{ChunkFailure, ChunkedIoError, Result};
use crate::plan::ChunkSpec;

/// Outcome of one chunk read task. Immutable once produced.
#[derive(Debug)]
pub struct ChunkResult {
    /// The chunk this result answers.
    pub spec: ChunkSpec,
    /// Bytes actually read. May be less than `spec.len` only when end of
    /// file was reached mid-chunk.
    pub bytes_read: u64,
    /// The bytes read, truncated to `bytes_read`.
    pub content: Vec<u8>,
    /// The I/O error, if the read for this chunk failed.
    pub error: Option<io::Error>,
}

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        fn read_at(file: &File, buf: &mut [u8], offset: u64) -> io::Result<usize> {
            use std::os::unix::fs::FileExt;
            file.read_at(buf, offset)
        }
    } else if #[cfg(windows)] {
        fn read_at(file: &File, buf: &mut [u8], offset: u64) -> io::Result<usize> {
            // seek_read takes an explicit offset per call, so concurrent
            // callers on a shared handle do not depend on the cursor.
            use std::os::windows::fs::FileExt;
            file.seek_read(buf, offset)
        }
    } else {
        compile_error!("chunked-io requires a platform with positioned reads");
    }
}

/// Fill `buf` from `offset`, looping on short reads. Returns the number of
/// bytes read; stops early only at end of file.
fn read_full_at(file: &File, mut buf: &mut [u8], mut offset: u64) -> io::Result<usize> {
    let mut total = 0usize;
    while !buf.is_empty() {
        match read_at(file, buf, offset) {
            Ok(0) => break, // EOF
            Ok(n) => {
                total += n;
                offset += n as u64;
                buf = &mut buf[n..];
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}

#[allow(clippy::cast_possible_truncation)]
fn read_chunk(file: &File, spec: ChunkSpec) -> ChunkResult {
    // Chunk lengths are bounded by the file size, which must fit in memory.
    let mut content = vec![0u8; spec.len as usize];
    match read_full_at(file, &mut content, spec.offset) {
        Ok(n) => {
            content.truncate(n);
            ChunkResult {
                spec,
                bytes_read: n as u64,
                content,
                error: None,
            }
        }
        Err(e) => ChunkResult {
            spec,
            bytes_read: 0,
            content: Vec::new(),
            error: Some(e),
        },
    }
}

/// Read every chunk of `plan` concurrently from a shared handle.
///
/// One scoped thread is spawned per chunk; the scope itself is the join
/// barrier, so this returns only once every planned chunk has reported.
/// Individual failures are recorded on their result rather than raised, and
/// no task is cancelled because a sibling failed.
#[must_use]
pub fn read_chunks(file: &File, plan: &[ChunkSpec]) -> Vec<ChunkResult> {
    debug!("reading {} chunk(s) concurrently", plan.len());

    thread::scope(|scope| {
        let handles: Vec<_> = plan
            .iter()
            .map(|spec| {
                let spec = *spec;
                scope.spawn(move || read_chunk(file, spec))
            })
            .collect();

        handles
            .into_iter()
            .zip(plan)
            .map(|(handle, spec)| match handle.join() {
                Ok(result) => result,
                Err(_) => ChunkResult {
                    spec: *spec,
                    bytes_read: 0,
                    content: Vec::new(),
                    error: Some(io::Error::other("chunk read task panicked")),
                },
            })
            .collect()
    })
}

/// Reassemble chunk results into one contiguous buffer.
///
/// Results are ordered by chunk index (completion order is irrelevant). If
/// any result carries an error, every failure is reported together as
/// [`ChunkedIoError::ChunkReads`]. A successful concatenation whose length
/// differs from `expected_size` means the file changed size between planning
/// and completion, or a read undercounted; that is a hard
/// [`ChunkedIoError::SizeMismatch`], never silently tolerated.
///
/// # Errors
///
/// Returns `ChunkReads` or `SizeMismatch` as described above.
pub fn assemble(mut results: Vec<ChunkResult>, expected_size: u64) -> Result<Vec<u8>> {
    results.sort_by_key(|r| r.spec.index);

    let failures: Vec<ChunkFailure> = results
        .iter_mut()
        .filter(|r| r.error.is_some())
        .map(|r| {
            let source = r.error.take().unwrap_or_else(|| io::Error::other("unknown"));
            warn!("chunk {} at offset {} failed: {}", r.spec.index, r.spec.offset, source);
            ChunkFailure {
                index: r.spec.index,
                offset: r.spec.offset,
                source,
            }
        })
        .collect();
    if !failures.is_empty() {
        return Err(ChunkedIoError::ChunkReads { failures });
    }

    #[allow(clippy::cast_possible_truncation)]
    let mut assembled = Vec::with_capacity(expected_size as usize);
    for result in &results {
        assembled.extend_from_slice(&result.content);
    }

    if assembled.len() as u64 != expected_size {
        return Err(ChunkedIoError::SizeMismatch {
            expected: expected_size,
            actual: assembled.len() as u64,
        });
    }

    Ok(assembled)
}
