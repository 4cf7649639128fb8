use std::{io, path::Path};

use super::{
    canonicalize_path,
    copy_directory,
    ensure_directory_absent,
    is_same_or_inside,
    try_exists_without_follow,
    CopyDirectoryFinished,
    CopyDirectoryOptions,
};
use crate::{
    error::{MoveDirectoryError, RemoveError},
    remove::remove_quietly,
    use_enabled_fs_module,
};

use_enabled_fs_module!();


/// Describes how a directory move was accomplished.
///
/// See also: [`move_directory`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveDirectoryFinished {
    /// The source directory was renamed to the destination.
    ///
    /// This is highly performant on most file systems.
    Renamed,

    /// The source directory was copied to the destination (preserving modification times),
    /// and removed afterwards.
    ///
    /// This is used if renaming is impossible, e.g. when moving across filesystems.
    CopiedAndDeleted(CopyDirectoryFinished),
}


/// Moves a directory tree from `source_directory_path` to `destination_directory_path`.
///
/// The destination must not exist; missing parent directories are created.
///
///
/// # Rename, then copy-and-delete
/// The move is first attempted with a rename. If that fails, the tree is copied with
/// [`copy_directory`] (preserving modification times, without a filter),
/// and the source is removed with [`ensure_directory_absent`] afterwards.
///
/// If the copy fails, the partial destination is removed again.
/// If the source cannot be removed after a complete copy, the destination is removed
/// again only if the source is still complete (otherwise some entries would exist only
/// in the destination, and removing it would lose them). Which of the two happened is reported
/// in [`MoveDirectoryError::UnableToRemoveSourceAfterCopy`].
///
///
/// # Errors
/// - [`SourceDirectoryNotFound`] / [`SourceNotADirectory`] if the source is missing or not a directory.
/// - [`DestinationAlreadyExists`] if anything exists at the destination.
/// - [`DestinationInsideSource`] if the destination is the source or lies inside of it.
///   This is checked before anything is modified.
/// - [`CopyFailed`] / [`UnableToRemoveSourceAfterCopy`] as described above.
///
///
/// [`SourceDirectoryNotFound`]: MoveDirectoryError::SourceDirectoryNotFound
/// [`SourceNotADirectory`]: MoveDirectoryError::SourceNotADirectory
/// [`DestinationAlreadyExists`]: MoveDirectoryError::DestinationAlreadyExists
/// [`DestinationInsideSource`]: MoveDirectoryError::DestinationInsideSource
/// [`CopyFailed`]: MoveDirectoryError::CopyFailed
/// [`UnableToRemoveSourceAfterCopy`]: MoveDirectoryError::UnableToRemoveSourceAfterCopy
pub fn move_directory<S, D>(
    source_directory_path: S,
    destination_directory_path: D,
) -> Result<MoveDirectoryFinished, MoveDirectoryError>
where
    S: AsRef<Path>,
    D: AsRef<Path>,
{
    let source_directory_path = source_directory_path.as_ref();
    let destination_directory_path = destination_directory_path.as_ref();

    validate_source_directory_path(source_directory_path)?;
    validate_destination_directory_path(source_directory_path, destination_directory_path)?;


    if let Some(parent_directory) = destination_directory_path.parent() {
        if !parent_directory.as_os_str().is_empty() {
            fs::create_dir_all(parent_directory).map_err(|error| {
                MoveDirectoryError::UnableToAccess {
                    path: parent_directory.to_path_buf(),
                    error,
                }
            })?;
        }
    }


    match fs::rename(source_directory_path, destination_directory_path) {
        Ok(()) => return Ok(MoveDirectoryFinished::Renamed),
        Err(error) => {
            tracing::debug!(
                source = %source_directory_path.display(),
                destination = %destination_directory_path.display(),
                %error,
                "unable to rename directory, falling back to copy-and-delete"
            );
        }
    }


    move_directory_by_copy(
        source_directory_path,
        destination_directory_path,
        |path| ensure_directory_absent(path),
    )
}


/// Copies the tree to the destination (preserving modification times), then removes
/// the source with `remove_source`.
///
/// A partial destination is removed if the copy fails. If the source cannot be removed,
/// the destination is removed again only if the source still holds every copied file.
fn move_directory_by_copy<R>(
    source_directory_path: &Path,
    destination_directory_path: &Path,
    remove_source: R,
) -> Result<MoveDirectoryFinished, MoveDirectoryError>
where
    R: FnOnce(&Path) -> Result<(), RemoveError>,
{
    let copied = match copy_directory(
        source_directory_path,
        destination_directory_path,
        CopyDirectoryOptions::default(),
    ) {
        Ok(copied) => copied,
        Err(error) => {
            remove_quietly(destination_directory_path);
            return Err(MoveDirectoryError::CopyFailed { error });
        }
    };


    if let Err(error) = remove_source(source_directory_path) {
        let source_is_complete = count_copyable_files(source_directory_path) == copied.files_copied;

        let destination_rolled_back =
            source_is_complete && remove_quietly(destination_directory_path);

        tracing::warn!(
            source = %source_directory_path.display(),
            destination = %destination_directory_path.display(),
            destination_rolled_back,
            "unable to remove source directory after copying it"
        );

        return Err(MoveDirectoryError::UnableToRemoveSourceAfterCopy {
            source_directory_path: source_directory_path.to_path_buf(),
            destination_directory_path: destination_directory_path.to_path_buf(),
            destination_rolled_back,
            error,
        });
    }

    Ok(MoveDirectoryFinished::CopiedAndDeleted(copied))
}


/// Moves a directory tree into `destination_parent_directory_path`, keeping its name
/// (i.e. to `destination_parent_directory_path/<source directory name>`).
///
/// If the parent directory does not exist, it is created when `create_parent` is `true`;
/// otherwise [`MoveDirectoryError::DestinationDirectoryNotFound`] is returned.
/// See [`move_directory`] for details and other errors.
pub fn move_directory_to_directory<S, D>(
    source_directory_path: S,
    destination_parent_directory_path: D,
    create_parent: bool,
) -> Result<MoveDirectoryFinished, MoveDirectoryError>
where
    S: AsRef<Path>,
    D: AsRef<Path>,
{
    let source_directory_path = source_directory_path.as_ref();
    let destination_parent_directory_path = destination_parent_directory_path.as_ref();

    validate_source_directory_path(source_directory_path)?;

    let canonical_source_path = canonicalize_path(source_directory_path).map_err(|error| {
        MoveDirectoryError::UnableToAccess {
            path: source_directory_path.to_path_buf(),
            error,
        }
    })?;

    // Only a filesystem root has no name, and every destination lies inside of it.
    let Some(directory_name) = canonical_source_path.file_name() else {
        return Err(MoveDirectoryError::DestinationInsideSource {
            source_directory_path: source_directory_path.to_path_buf(),
            destination_directory_path: destination_parent_directory_path.to_path_buf(),
        });
    };

    let destination_directory_path = destination_parent_directory_path.join(directory_name);

    // Checked before the parent is created, so a rejected move leaves no trace.
    validate_destination_directory_path(source_directory_path, &destination_directory_path)?;


    match fs::metadata(destination_parent_directory_path) {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => {
            return Err(MoveDirectoryError::DestinationDirectoryNotFound {
                directory_path: destination_parent_directory_path.to_path_buf(),
            });
        }
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            if !create_parent {
                return Err(MoveDirectoryError::DestinationDirectoryNotFound {
                    directory_path: destination_parent_directory_path.to_path_buf(),
                });
            }

            fs::create_dir_all(destination_parent_directory_path).map_err(|error| {
                MoveDirectoryError::UnableToAccess {
                    path: destination_parent_directory_path.to_path_buf(),
                    error,
                }
            })?;
        }
        Err(error) => {
            return Err(MoveDirectoryError::UnableToAccess {
                path: destination_parent_directory_path.to_path_buf(),
                error,
            });
        }
    }

    move_directory(source_directory_path, destination_directory_path)
}


fn validate_source_directory_path(source_directory_path: &Path) -> Result<(), MoveDirectoryError> {
    match fs::metadata(source_directory_path) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(MoveDirectoryError::SourceNotADirectory {
            path: source_directory_path.to_path_buf(),
        }),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            Err(MoveDirectoryError::SourceDirectoryNotFound {
                directory_path: source_directory_path.to_path_buf(),
            })
        }
        Err(error) => Err(MoveDirectoryError::UnableToAccess {
            path: source_directory_path.to_path_buf(),
            error,
        }),
    }
}


/// Ensures nothing exists at the destination, and that it does not lie inside the source.
fn validate_destination_directory_path(
    source_directory_path: &Path,
    destination_directory_path: &Path,
) -> Result<(), MoveDirectoryError> {
    let is_nested =
        is_same_or_inside(source_directory_path, destination_directory_path).map_err(|error| {
            MoveDirectoryError::UnableToAccess {
                path: destination_directory_path.to_path_buf(),
                error,
            }
        })?;

    if is_nested {
        return Err(MoveDirectoryError::DestinationInsideSource {
            source_directory_path: source_directory_path.to_path_buf(),
            destination_directory_path: destination_directory_path.to_path_buf(),
        });
    }

    let destination_exists = try_exists_without_follow(destination_directory_path).map_err(
        |error| MoveDirectoryError::UnableToAccess {
            path: destination_directory_path.to_path_buf(),
            error,
        },
    )?;

    if destination_exists {
        return Err(MoveDirectoryError::DestinationAlreadyExists {
            path: destination_directory_path.to_path_buf(),
        });
    }

    Ok(())
}


/// Counts the entries [`copy_directory`] would copy as files:
/// regular files and symbolic links to files. Unreadable entries are not counted.
fn count_copyable_files(directory_path: &Path) -> usize {
    let Ok(entries) = fs::read_dir(directory_path) else {
        return 0;
    };

    let mut file_count = 0;

    for entry in entries.flatten() {
        let entry_path = entry.path();

        let Ok(metadata) = fs::symlink_metadata(&entry_path) else {
            continue;
        };

        if metadata.is_dir() {
            file_count += count_copyable_files(&entry_path);
        } else if metadata.is_file() {
            file_count += 1;
        } else if metadata.is_symlink() {
            if fs::metadata(&entry_path)
                .map(|target_metadata| target_metadata.is_file())
                .unwrap_or(false)
            {
                file_count += 1;
            }
        }
    }

    file_count
}
