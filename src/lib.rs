//! # chunked-io: fast bulk file reads and surgical byte-level edits
//!
//! This crate provides low-level file access primitives for programs that
//! need fast bulk reads of large text files and random-access byte edits
//! without rewriting the whole file.
//!
//! ## Features
//!
//! - **Parallel chunked reads**: large files are partitioned into balanced
//!   byte ranges and read concurrently via positioned reads
//! - **Line reconstruction**: assembled buffers split into trimmed lines
//!   with pre-sized allocation
//! - **Byte-level mutators**: overwrite-at-offset and insert-at-offset on
//!   existing files, without rewriting untouched content
//! - **Checkable sentinels**: "file does not exist" and "file empty" are
//!   distinguished error values callers can match on
//! - **Async support**: optional Tokio wrappers for the whole pipeline
//!
//! ## Quick Start
//!
//! ```no_run
//! use chunked_io::{fast_load_lines, overwrite_at};
//!
//! // Load a large log file as trimmed lines, dropping blanks.
//! let lines = fast_load_lines("huge.log", false, false)?;
//!
//! // Patch four bytes in place at offset 128.
//! overwrite_at("data.bin", 128, b"PTCH")?;
//! # Ok::<(), chunked_io::ChunkedIoError>(())
//! ```
//!
//! ## Modules
//!
//! - [`errors`]: Error types for all operations
//! - [`path`]: Path validation and file handle resolution
//! - [`plan`]: Worker-count policy and chunk planning
//! - [`read`]: Parallel chunk reader and assembler
//! - [`lines`]: Line splitting over assembled buffers
//! - [`mutate`]: Overwrite and insert mutators
//! - [`write`]: Whole-file helpers and the buffered writer
//! - [`manager`]: High-level convenience functions
//!
//! ## Feature Flags
//!
//! - `async`: Enables Tokio-based async wrappers

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(missing_docs)]
#![doc(html_root_url = "https://docs.rs/chunked-io")]

pub mod errors;
pub mod path;
pub mod plan;
pub mod read;
pub mod lines;
pub mod mutate;
pub mod write;
pub mod manager;

pub use errors::{ChunkFailure, ChunkedIoError};
pub use lines::split_lines;
pub use manager::{fast_load_lines, parallel_read, parallel_read_with_policy};
pub use mutate::{insert_at, overwrite_at};
pub use path::WriteMode;
pub use plan::{ChunkSpec, ReadPolicy};
pub use write::{put_contents, read_contents, BufferedWriter};
