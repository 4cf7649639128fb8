//! File copying, moving, comparison, checksumming, sizing and removal operations.
//!
//! <br>
//!
//! ##### Feature Overview
//!
//! | | <span style="font-weight:normal"><i>configured by</i></span> | <span style="font-weight:normal"><i>returns</i></span>
//! |-----------------------------|---------------------------|:--------------------:|
//! | [`copy_file`]               | [`CopyFileOptions`]       | [`u64`] <br><sup style="text-align: right">(or [`FileError`])</sup> |
//! | [`copy_file_to_directory`]  | [`CopyFileOptions`]       | [`u64`] <br><sup style="text-align: right">(or [`FileError`])</sup> |
//! | [`move_file`]               |                           | [`u64`] <br><sup style="text-align: right">(or [`FileError`])</sup> |
//! | [`move_file_to_directory`]  | *individual arguments*    | [`u64`] <br><sup style="text-align: right">(or [`FileError`])</sup> |
//! | [`content_equals`]          |                           | [`bool`] <br><sup style="text-align: right">(or [`FileError`])</sup> |
//! | [`checksum`] / [`crc32`]    | *any [`Hasher`]*          | [`u64`] / [`u32`] <br><sup style="text-align: right">(or [`FileError`])</sup> |
//! | [`touch`]                   |                           | <br><sup style="text-align: right">(or [`FileError`])</sup> |
//! | [`remove_file`]             |                           | <br><sup style="text-align: right">(or [`FileRemoveError`])</sup> |
//! | [`file_size_in_bytes`]      |                           | [`u64`] <br><sup style="text-align: right">(or [`FileSizeError`])</sup> |
//!
//! File contents always pass through the [`stream`](crate::stream) copy engine.
//!
//!
//! [`FileError`]: crate::error::FileError
//! [`FileRemoveError`]: crate::error::FileRemoveError
//! [`FileSizeError`]: crate::error::FileSizeError
//! [`Hasher`]: std::hash::Hasher

use std::{fs::Metadata, path::Path};

use crate::{error::FileError, use_enabled_fs_module};

mod checksum;
mod compare;
mod copy;
mod r#move;
mod remove;
mod size;
mod touch;

pub use checksum::*;
pub use compare::*;
pub use copy::*;
pub use r#move::*;
pub use remove::*;
pub use size::*;
pub use touch::*;

use_enabled_fs_module!();


/// Given a `&Path`, validate that it exists and is a file (or a symbolic link to one).
fn validate_source_file_path(source_file_path: &Path) -> Result<(), FileError> {
    // We use `try_exists` instead of `exists` to catch permission and other IO errors
    // as distinct from the `FileError::SourceFileNotFound` error.
    match source_file_path.try_exists() {
        Ok(true) => {}
        Ok(false) => {
            return Err(FileError::SourceFileNotFound {
                path: source_file_path.to_path_buf(),
            });
        }
        Err(error) => {
            return Err(FileError::UnableToAccessSourceFile {
                path: source_file_path.to_path_buf(),
                error,
            });
        }
    }

    let source_metadata =
        fs::metadata(source_file_path).map_err(|error| FileError::UnableToAccessSourceFile {
            path: source_file_path.to_path_buf(),
            error,
        })?;

    if !source_metadata.is_file() {
        return Err(FileError::SourcePathNotAFile {
            path: source_file_path.to_path_buf(),
        });
    }

    Ok(())
}


cfg_if::cfg_if! {
    if #[cfg(unix)] {
        /// Returns `true` if both metadata describe the same file on disk,
        /// e.g. two hard links to one file.
        pub(crate) fn is_same_file(first: &Metadata, second: &Metadata) -> bool {
            use std::os::unix::fs::MetadataExt;

            first.dev() == second.dev() && first.ino() == second.ino()
        }
    } else {
        /// Returns `true` if both metadata describe the same file on disk.
        ///
        /// File identity is only available on Unix; elsewhere, callers rely on
        /// comparing canonical paths.
        pub(crate) fn is_same_file(_first: &Metadata, _second: &Metadata) -> bool {
            false
        }
    }
}
