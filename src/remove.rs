//! Removal of anything that exists at a path: files, symbolic links and whole directory trees.
//!
//! | | <span style="font-weight:normal"><i>nothing at the path</i></span> | <span style="font-weight:normal"><i>on failure</i></span> |
//! |----------------------------------|---------------------------|-----------------------------|
//! | [`remove_existing`]              | [`RemoveError::NotFound`] | [`RemoveError`]             |
//! | [`remove_quietly`]               | `false`                   | `false`                     |
//! | [`ensure_directory_absent`]      | `Ok(())`                  | [`RemoveError`]             |
//!
//! Symbolic links are never followed: the link itself is removed.
//!
//!
//! [`ensure_directory_absent`]: crate::directory::ensure_directory_absent

use std::{fs::Metadata, io, path::Path};

use crate::{directory::ensure_directory_absent, error::RemoveError, use_enabled_fs_module};

use_enabled_fs_module!();


/// Removes whatever exists at `path` (a file, a symbolic link or a directory tree).
///
/// Directories are removed with [`ensure_directory_absent`]: their contents
/// are removed first, and the directory itself is kept if any of them could not be removed.
///
///
/// # Errors
/// - [`RemoveError::NotFound`] if nothing exists at `path`.
/// - [`RemoveError::UnableToAccess`] if the path cannot be inspected.
/// - [`RemoveError::UnableToRemove`] if the filesystem refuses to remove the entry.
/// - [`RemoveError::UnableToClean`] if a directory's contents could not all be removed.
pub fn remove_existing<P>(path: P) -> Result<(), RemoveError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            return Err(RemoveError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(error) => {
            return Err(RemoveError::UnableToAccess {
                path: path.to_path_buf(),
                error,
            });
        }
    };

    if metadata.is_dir() {
        ensure_directory_absent(path)
    } else {
        remove_non_directory(path, &metadata)
    }
}


/// Removes whatever exists at `path` without ever returning an error.
///
/// Returns `true` if something existed at `path` and has been removed.
/// Returns `false` if nothing existed, or if removal failed (even partially, in which case
/// as much as possible has been removed). Failures are logged at debug level.
pub fn remove_quietly<P>(path: P) -> bool
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    match remove_existing(path) {
        Ok(()) => true,
        Err(RemoveError::NotFound { .. }) => false,
        Err(error) => {
            tracing::debug!(path = %path.display(), %error, "ignoring failed removal");
            false
        }
    }
}


/// Removes a file or symbolic link (a symbolic link to a directory included) at `path`.
pub(crate) fn remove_non_directory(path: &Path, metadata: &Metadata) -> Result<(), RemoveError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        // Windows represents symbolic links to directories as directories.
        Err(_) if cfg!(windows) && metadata.is_symlink() => {
            fs::remove_dir(path).map_err(|error| RemoveError::UnableToRemove {
                path: path.to_path_buf(),
                error,
            })
        }
        Err(error) => Err(RemoveError::UnableToRemove {
            path: path.to_path_buf(),
            error,
        }),
    }
}
