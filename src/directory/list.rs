use std::{
    io,
    path::{Path, PathBuf},
};

use super::{list_filtered_children, PathFilter};
use crate::{error::ListDirectoryError, use_enabled_fs_module};

use_enabled_fs_module!();


/// Lists the regular files inside `directory_path` that `filter` accepts
/// (all of them if no filter is given).
///
/// When `recursive` is `true`, sub-directories accepted by the filter are descended into
/// as well. A rejected directory hides its entire subtree. Symbolic links are neither
/// listed nor followed.
///
/// The returned paths start with `directory_path` and are sorted.
///
///
/// # Errors
/// - [`ListDirectoryError::NotFound`] if nothing exists at `directory_path`.
/// - [`ListDirectoryError::NotADirectory`] if the path is not a directory.
/// - [`ListDirectoryError::UnableToReadDirectory`] if the root, or any directory descended
///   into, cannot be listed.
pub fn list_files<P>(
    directory_path: P,
    filter: Option<&dyn PathFilter>,
    recursive: bool,
) -> Result<Vec<PathBuf>, ListDirectoryError>
where
    P: AsRef<Path>,
{
    let directory_path = directory_path.as_ref();

    match fs::metadata(directory_path) {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => {
            return Err(ListDirectoryError::NotADirectory {
                path: directory_path.to_path_buf(),
            });
        }
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            return Err(ListDirectoryError::NotFound {
                directory_path: directory_path.to_path_buf(),
            });
        }
        Err(error) => {
            return Err(ListDirectoryError::UnableToReadDirectory {
                directory_path: directory_path.to_path_buf(),
                error,
            });
        }
    }

    let mut files = Vec::new();
    collect_files(directory_path, filter, recursive, &mut files)?;

    files.sort();

    Ok(files)
}


fn collect_files(
    directory_path: &Path,
    filter: Option<&dyn PathFilter>,
    recursive: bool,
    files: &mut Vec<PathBuf>,
) -> Result<(), ListDirectoryError> {
    let children = list_filtered_children(directory_path, filter).map_err(|error| {
        ListDirectoryError::UnableToReadDirectory {
            directory_path: directory_path.to_path_buf(),
            error,
        }
    })?;

    for child_path in children {
        let Ok(metadata) = fs::symlink_metadata(&child_path) else {
            continue;
        };

        if metadata.is_file() {
            files.push(child_path);
        } else if metadata.is_dir() && recursive {
            collect_files(&child_path, filter, recursive, files)?;
        }
    }

    Ok(())
}
