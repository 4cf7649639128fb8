use std::{io, path::Path};

use super::list_filtered_children;
use crate::{
    error::{CleanDirectoryError, RemoveError},
    remove::remove_existing,
    use_enabled_fs_module,
};

use_enabled_fs_module!();


/// Removes every entry inside a directory, keeping the directory itself.
///
/// Every direct child is removed with [`remove_existing`]: files and symbolic links directly,
/// sub-directories recursively. A failure to remove one child does not stop the removal
/// of its siblings; all failures are collected and returned together as
/// [`CleanDirectoryError::PartiallyCleaned`]. Children that disappear in the meantime
/// are not considered failures.
///
/// If `directory_path` is a symbolic link to a directory, the contents of the directory
/// it points to are removed.
///
///
/// # Errors
/// - [`CleanDirectoryError::NotFound`] if nothing exists at `directory_path`.
/// - [`CleanDirectoryError::NotADirectory`] if the path is not a directory.
/// - [`CleanDirectoryError::UnableToReadDirectory`] if the directory cannot be listed.
/// - [`CleanDirectoryError::PartiallyCleaned`] if some children could not be removed.
pub fn clean_directory<P>(directory_path: P) -> Result<(), CleanDirectoryError>
where
    P: AsRef<Path>,
{
    let directory_path = directory_path.as_ref();

    match fs::metadata(directory_path) {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => {
            return Err(CleanDirectoryError::NotADirectory {
                directory_path: directory_path.to_path_buf(),
            });
        }
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            return Err(CleanDirectoryError::NotFound {
                directory_path: directory_path.to_path_buf(),
            });
        }
        Err(error) => {
            return Err(CleanDirectoryError::UnableToReadDirectory {
                directory_path: directory_path.to_path_buf(),
                error,
            });
        }
    }


    clean_directory_with(directory_path, |child_path| remove_existing(child_path))
}


/// Removes every child of `directory_path` with `remove_child`, collecting the failures.
fn clean_directory_with<R>(
    directory_path: &Path,
    mut remove_child: R,
) -> Result<(), CleanDirectoryError>
where
    R: FnMut(&Path) -> Result<(), RemoveError>,
{
    let children = list_filtered_children(directory_path, None).map_err(|error| {
        CleanDirectoryError::UnableToReadDirectory {
            directory_path: directory_path.to_path_buf(),
            error,
        }
    })?;

    let mut failures = Vec::new();

    for child_path in children {
        match remove_child(&child_path) {
            Ok(()) => {}
            Err(RemoveError::NotFound { .. }) => {
                tracing::trace!(path = %child_path.display(), "entry disappeared before removal");
            }
            Err(error) => {
                tracing::debug!(path = %child_path.display(), %error, "unable to remove entry");
                failures.push(error);
            }
        }
    }

    if !failures.is_empty() {
        return Err(CleanDirectoryError::PartiallyCleaned {
            directory_path: directory_path.to_path_buf(),
            failures,
        });
    }

    Ok(())
}
