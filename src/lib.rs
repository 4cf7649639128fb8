//! Buffered stream copying and recursive file and directory operations,
//! built on top of [`std::io`] and [`std::fs`] with improved error handling.
//!
//!
//! # Main features
//! - copy, skip, consume and compare byte or char streams through a fixed-size
//!   transfer buffer (either allocated per call, or supplied and reused by the caller),
//! - decode and encode char streams with an explicitly chosen [`Charset`],
//! - copy, move, compare, checksum and remove single files,
//! - copy (optionally filtered), clean, delete, move, list and size whole directory trees.
//!
//! <br>
//!
//! Visit the [`stream`], [`charset`], [`file`][mod@file], [`directory`]
//! and [`remove`] modules for more information and a list of available functions.
//!
//!
//! <br>
//!
//! # Feature flags
//! The following feature flags enable optional functionality:
//! - `dunce` (*enabled by default*): enables the optional [`dunce`](../dunce/index.html) support:
//!   This automatically strips Windows' UNC paths if they can be represented
//!   using the usual type of path (e.g. `\\?\C:\foo -> C:\foo`) when canonicalizing paths
//!   (e.g. for the same-path and nested-destination checks of directory copies and moves).
//!   This crate only has an effect when compiling for Windows targets.
//! - `fs-err` (*disabled by default*): enables the optional [`fs-err`](../fs_err/index.html) support.
//!   While `io-more` already provides quite extensive [error types](crate::error),
//!   this does enable more helpful error messages for underlying IO errors.
//! - `miette` (*disabled by default*): derives `miette::Diagnostic` on all error types.
//!
//!
//! <br>
//!
//! # Examples
//!
//! Copying a stream through a reusable buffer:
//! ```
//! # use io_more::error::StreamError;
//! # use io_more::stream::TransferBuffer;
//! # fn main() -> Result<(), StreamError> {
//! let mut buffer = TransferBuffer::<u8>::new(4)?;
//!
//! let mut source: &[u8] = b"hello world";
//! let mut sink: Vec<u8> = Vec::new();
//!
//! let bytes_copied = io_more::stream::copy_with_buffer(&mut source, &mut sink, &mut buffer)?;
//!
//! assert_eq!(bytes_copied, 11);
//! assert_eq!(sink, b"hello world");
//! # Ok(())
//! # }
//! ```
//!
//! Copying a directory, skipping hidden entries:
//! ```no_run
//! # use std::path::Path;
//! # use io_more::error::CopyDirectoryError;
//! # use io_more::directory::CopyDirectoryOptions;
//! # fn main() -> Result<(), CopyDirectoryError> {
//! let skip_hidden = |path: &Path| {
//!     !path
//!         .file_name()
//!         .map(|name| name.to_string_lossy().starts_with('.'))
//!         .unwrap_or(false)
//! };
//!
//! let finished = io_more::directory::copy_directory(
//!     "./source-directory",
//!     "./target-directory",
//!     CopyDirectoryOptions {
//!         filter: Some(&skip_hidden),
//!         ..Default::default()
//!     },
//! )?;
//!
//! println!(
//!     "Copied {} bytes ({} files, {} new directories).",
//!     finished.total_bytes_copied,
//!     finished.files_copied,
//!     finished.directories_created
//! );
//! # Ok(())
//! # }
//! ```
//!
//! [`Charset`]: crate::charset::Charset

#![warn(missing_docs)]


/// 8 Ki units (bytes or chars).
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 8;

/// 2 Ki units (bytes or chars).
pub const SKIP_BUFFER_SIZE: usize = 1024 * 2;

/// 64 KiB
pub const DEFAULT_FILE_COPY_BUFFER_SIZE: usize = 1024 * 64;

/// Returned by [`stream::copy_i32`] when more than [`i32::MAX`] units were copied.
pub const LARGE_COPY_SENTINEL: i32 = -1;



pub mod charset;
pub mod directory;
pub mod error;
pub mod file;
mod macros;
pub mod remove;
pub mod stream;
