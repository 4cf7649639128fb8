use std::{io, path::Path};

use super::clean_directory;
use crate::{error::RemoveError, remove::remove_non_directory, use_enabled_fs_module};

use_enabled_fs_module!();


/// Ensures no directory exists at `directory_path`, removing it and all of its contents.
///
/// - If nothing exists at the path, this is a successful no-op (so calling it twice
///   succeeds both times).
/// - If the path is a symbolic link, the link itself is removed; the directory
///   it points to is never traversed.
/// - Otherwise the directory is [cleaned](clean_directory) first, then removed.
///   If cleaning fails for any of the entries, the (partially cleaned) directory is kept
///   and [`RemoveError::UnableToClean`] is returned with every failure.
///
///
/// # Errors
/// - [`RemoveError::NotADirectory`] if something other than a directory exists at the path.
/// - [`RemoveError::UnableToAccess`] if the path cannot be inspected.
/// - [`RemoveError::UnableToClean`] if the directory's contents could not all be removed.
/// - [`RemoveError::UnableToRemove`] if the emptied directory itself could not be removed.
pub fn ensure_directory_absent<P>(directory_path: P) -> Result<(), RemoveError>
where
    P: AsRef<Path>,
{
    let directory_path = directory_path.as_ref();

    let metadata = match fs::symlink_metadata(directory_path) {
        Ok(metadata) => metadata,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            tracing::trace!(path = %directory_path.display(), "directory already absent");
            return Ok(());
        }
        Err(error) => {
            return Err(RemoveError::UnableToAccess {
                path: directory_path.to_path_buf(),
                error,
            });
        }
    };

    if metadata.is_symlink() {
        return remove_non_directory(directory_path, &metadata);
    }

    if !metadata.is_dir() {
        return Err(RemoveError::NotADirectory {
            path: directory_path.to_path_buf(),
        });
    }


    clean_directory(directory_path).map_err(|error| RemoveError::UnableToClean {
        error: Box::new(error),
    })?;

    fs::remove_dir(directory_path).map_err(|error| RemoveError::UnableToRemove {
        path: directory_path.to_path_buf(),
        error,
    })
}
