//! High-level API for loading files through the parallel read pipeline.
//!
//! These functions wire the path resolver, chunk planner, parallel reader,
//! assembler, and line splitter together. Either every chunk succeeds and
//! the assembled size is verified, or the whole operation fails; there is
//! no partial-success reporting.

use std::path::Path;

use log::debug;

use crate::errors::{ChunkedIoError, Result};
use crate::lines::split_lines;
use crate::path::{open_for_read, validate_path};
use crate::plan::ReadPolicy;
use crate::read::{assemble, read_chunks};

/// Read the whole file at `path` via the parallel chunked pipeline, using
/// the default [`ReadPolicy`].
///
/// # Errors
///
/// Returns `InvalidPath`, `FileNotFound`, `ChunkReads`, `SizeMismatch`, or
/// `Io` errors from the pipeline stages.
pub fn parallel_read<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    parallel_read_with_policy(path, &ReadPolicy::default())
}

/// Same as [`parallel_read`], with an explicit worker-count policy.
///
/// # Errors
///
/// Same error surface as [`parallel_read`].
pub fn parallel_read_with_policy<P: AsRef<Path>>(
    path: P,
    policy: &ReadPolicy,
) -> Result<Vec<u8>> {
    let file_size = validate_path(&path, true)?;
    let file = open_for_read(&path)?;

    let plan = policy.plan(file_size);
    debug!(
        "parallel read of {} bytes planned as {} chunk(s)",
        file_size,
        plan.len()
    );

    let results = read_chunks(&file, &plan);
    assemble(results, file_size)
}

/// Load a text file as a sequence of trimmed lines, reading it in parallel.
///
/// Line-feed bytes delimit lines; each line is trimmed of surrounding
/// whitespace (including a trailing carriage return). With
/// `allow_empty_lines` unset, lines empty after trimming are dropped. With
/// `return_error_on_empty_file` set, a zero-line result becomes the
/// distinguished [`ChunkedIoError::FileEmpty`] error, so "nothing to load
/// yet" stays a checkable condition alongside
/// [`ChunkedIoError::FileNotFound`].
///
/// # Errors
///
/// Returns `FileEmpty` as described above, plus every error
/// [`parallel_read`] can produce.
pub fn fast_load_lines<P: AsRef<Path>>(
    path: P,
    allow_empty_lines: bool,
    return_error_on_empty_file: bool,
) -> Result<Vec<String>> {
    let assembled = parallel_read(path)?;
    let lines = split_lines(&assembled, allow_empty_lines);

    if return_error_on_empty_file && lines.is_empty() {
        return Err(ChunkedIoError::FileEmpty);
    }
    Ok(lines)
}

#[cfg(feature = "async")]
pub mod r#async {
    //! Async helpers (Tokio) for running the pipeline without blocking the
    //! current thread. The parallel read itself stays on blocking threads;
    //! these wrappers move the whole call off the async runtime.

    use std::path::PathBuf;

    use tokio::fs as tfs;
    use tokio::task;

    use crate::errors::Result;
    use crate::path::{validate_path, WriteMode};
    use crate::plan::ReadPolicy;

    async fn run_blocking<T, F>(job: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        task::spawn_blocking(job)
            .await
            .map_err(std::io::Error::other)?
    }

    /// Async variant of [`crate::parallel_read`].
    ///
    /// # Errors
    ///
    /// Same error surface as the sync call.
    pub async fn parallel_read_async<P: Into<PathBuf>>(path: P) -> Result<Vec<u8>> {
        let path = path.into();
        run_blocking(move || super::parallel_read(path)).await
    }

    /// Async variant of [`crate::fast_load_lines`].
    ///
    /// # Errors
    ///
    /// Same error surface as the sync call.
    pub async fn fast_load_lines_async<P: Into<PathBuf>>(
        path: P,
        allow_empty_lines: bool,
        return_error_on_empty_file: bool,
    ) -> Result<Vec<String>> {
        let path = path.into();
        run_blocking(move || {
            super::fast_load_lines(path, allow_empty_lines, return_error_on_empty_file)
        })
        .await
    }

    /// Async variant of [`crate::put_contents`]. Overwrite mode writes via
    /// `tokio::fs`; append mode falls back to the blocking helper.
    ///
    /// # Errors
    ///
    /// Same error surface as the sync call.
    pub async fn put_contents_async<P: Into<PathBuf>>(
        path: P,
        data: String,
        mode: WriteMode,
        create_dirs: bool,
    ) -> Result<()> {
        let path = path.into();
        match mode {
            WriteMode::Overwrite => {
                validate_path(&path, false)?;
                if create_dirs {
                    if let Some(parent) = path.parent() {
                        if !parent.as_os_str().is_empty() {
                            tfs::create_dir_all(parent).await.map_err(|_| {
                                crate::errors::ChunkedIoError::CreateDir(parent.to_path_buf())
                            })?;
                        }
                    }
                }
                tfs::write(&path, data.as_bytes()).await?;
                Ok(())
            }
            WriteMode::Append => {
                run_blocking(move || crate::write::put_contents(path, &data, mode, create_dirs))
                    .await
            }
        }
    }

    /// Async variant of [`crate::read_contents`].
    ///
    /// # Errors
    ///
    /// Same error surface as the sync call.
    pub async fn read_contents_async<P: Into<PathBuf>>(path: P) -> Result<String> {
        let path = path.into();
        run_blocking(move || crate::write::read_contents(path)).await
    }

    /// Async variant of [`crate::parallel_read_with_policy`].
    ///
    /// # Errors
    ///
    /// Same error surface as the sync call.
    pub async fn parallel_read_with_policy_async<P: Into<PathBuf>>(
        path: P,
        policy: ReadPolicy,
    ) -> Result<Vec<u8>> {
        let path = path.into();
        run_blocking(move || super::parallel_read_with_policy(path, &policy)).await
    }
}
