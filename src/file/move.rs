use std::path::Path;

use super::{copy::copy_file_unchecked, remove_file, validate_source_file_path};
use crate::{
    directory::{canonicalize_path, try_exists_without_follow},
    error::{FileError, FileRemoveError},
    remove::remove_quietly,
    stream::TransferBuffer,
    use_enabled_fs_module,
    DEFAULT_FILE_COPY_BUFFER_SIZE,
};

use_enabled_fs_module!();


/// Moves a single file from `source_file_path` to `destination_file_path`.
///
/// The destination path must be a *file* path that does not exist yet;
/// missing parent directories are created. Returns the size of the moved file in bytes.
///
///
/// # Rename, then copy-and-delete
/// The move is first attempted with a rename, which is instantaneous on most filesystems.
/// If that fails (e.g. because the paths are on different mount points or drives),
/// the file is copied (preserving its modification time) and the source is removed afterwards.
///
/// If the source cannot be removed after copying, the destination copy is removed again
/// and [`FileError::UnableToRemoveSourceAfterCopy`] is returned, so the file only ever exists
/// in one place. If the copy itself fails, the partial destination is removed as well.
///
///
/// # Symbolic links
/// If `source_file_path` is a symbolic link to a file and renaming succeeds, the *link* is moved.
/// If the copy-and-delete fallback is used, the destination becomes a regular file with the
/// contents of the link target, and the link itself is removed (the target is left untouched).
///
///
/// # Errors
/// - [`SourceFileNotFound`] / [`SourcePathNotAFile`] if the source is missing or not a file.
/// - [`SourceAndDestinationAreTheSame`] if both paths resolve to the same file.
/// - [`DestinationPathAlreadyExists`] if anything exists at the destination.
/// - Any error [`copy_file`] can return, when falling back to copying.
/// - [`UnableToRemoveSourceAfterCopy`] as described above.
///
///
/// [`SourceFileNotFound`]: FileError::SourceFileNotFound
/// [`SourcePathNotAFile`]: FileError::SourcePathNotAFile
/// [`SourceAndDestinationAreTheSame`]: FileError::SourceAndDestinationAreTheSame
/// [`DestinationPathAlreadyExists`]: FileError::DestinationPathAlreadyExists
/// [`UnableToRemoveSourceAfterCopy`]: FileError::UnableToRemoveSourceAfterCopy
/// [`copy_file`]: super::copy_file
pub fn move_file<S, D>(source_file_path: S, destination_file_path: D) -> Result<u64, FileError>
where
    S: AsRef<Path>,
    D: AsRef<Path>,
{
    let source_file_path = source_file_path.as_ref();
    let destination_file_path = destination_file_path.as_ref();

    validate_source_file_path(source_file_path)?;
    ensure_destination_is_free(source_file_path, destination_file_path)?;


    if let Some(parent_directory) = destination_file_path.parent() {
        if !parent_directory.as_os_str().is_empty() {
            fs::create_dir_all(parent_directory).map_err(|error| {
                FileError::UnableToAccessDestinationFile {
                    path: parent_directory.to_path_buf(),
                    error,
                }
            })?;
        }
    }


    match fs::rename(source_file_path, destination_file_path) {
        Ok(()) => {
            let moved_file_size = fs::metadata(destination_file_path)
                .map_err(|error| FileError::UnableToAccessDestinationFile {
                    path: destination_file_path.to_path_buf(),
                    error,
                })?
                .len();

            return Ok(moved_file_size);
        }
        Err(error) => {
            tracing::debug!(
                source = %source_file_path.display(),
                destination = %destination_file_path.display(),
                %error,
                "unable to rename file, falling back to copy-and-delete"
            );
        }
    }


    move_file_by_copy(source_file_path, destination_file_path, |path| remove_file(path))
}


/// Copies the file to the destination (preserving its modification time), then removes
/// the source with `remove_source`.
///
/// A partial destination is removed if the copy fails. If the source cannot be removed,
/// the destination is removed again, so the file only ever exists in one place.
fn move_file_by_copy<R>(
    source_file_path: &Path,
    destination_file_path: &Path,
    remove_source: R,
) -> Result<u64, FileError>
where
    R: FnOnce(&Path) -> Result<(), FileRemoveError>,
{
    let mut buffer = TransferBuffer::<u8>::new(DEFAULT_FILE_COPY_BUFFER_SIZE).map_err(|error| {
        FileError::CopyFailed {
            source_path: source_file_path.to_path_buf(),
            destination_path: destination_file_path.to_path_buf(),
            error,
        }
    })?;

    let bytes_copied =
        match copy_file_unchecked(source_file_path, destination_file_path, true, &mut buffer) {
            Ok(bytes_copied) => bytes_copied,
            Err(error) => {
                remove_quietly(destination_file_path);
                return Err(error);
            }
        };


    if let Err(error) = remove_source(source_file_path) {
        let destination_removed = remove_quietly(destination_file_path);

        tracing::warn!(
            source = %source_file_path.display(),
            destination = %destination_file_path.display(),
            destination_removed,
            "unable to remove source file after copying it"
        );

        return Err(FileError::UnableToRemoveSourceAfterCopy {
            path: source_file_path.to_path_buf(),
            destination_path: destination_file_path.to_path_buf(),
            error,
        });
    }

    Ok(bytes_copied)
}


/// Moves a single file into `destination_directory_path`, keeping its file name.
///
/// If the destination directory does not exist, it is created when `create_directory`
/// is `true`; otherwise [`FileError::DestinationDirectoryNotFound`] is returned.
/// If it exists but is not a directory, [`FileError::DestinationPathNotADirectory`] is returned.
/// See [`move_file`] for details and other errors.
pub fn move_file_to_directory<S, D>(
    source_file_path: S,
    destination_directory_path: D,
    create_directory: bool,
) -> Result<u64, FileError>
where
    S: AsRef<Path>,
    D: AsRef<Path>,
{
    let source_file_path = source_file_path.as_ref();
    let destination_directory_path = destination_directory_path.as_ref();

    validate_source_file_path(source_file_path)?;

    let Some(file_name) = source_file_path.file_name() else {
        return Err(FileError::SourcePathNotAFile {
            path: source_file_path.to_path_buf(),
        });
    };


    match fs::metadata(destination_directory_path) {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => {
            return Err(FileError::DestinationPathNotADirectory {
                path: destination_directory_path.to_path_buf(),
            });
        }
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            if !create_directory {
                return Err(FileError::DestinationDirectoryNotFound {
                    path: destination_directory_path.to_path_buf(),
                });
            }

            fs::create_dir_all(destination_directory_path).map_err(|error| {
                FileError::UnableToAccessDestinationFile {
                    path: destination_directory_path.to_path_buf(),
                    error,
                }
            })?;
        }
        Err(error) => {
            return Err(FileError::UnableToAccessDestinationFile {
                path: destination_directory_path.to_path_buf(),
                error,
            });
        }
    }

    move_file(source_file_path, destination_directory_path.join(file_name))
}


/// Ensures nothing exists at the destination path, reporting a destination that is
/// the source file itself separately.
fn ensure_destination_is_free(
    source_file_path: &Path,
    destination_file_path: &Path,
) -> Result<(), FileError> {
    let destination_exists = try_exists_without_follow(destination_file_path).map_err(|error| {
        FileError::UnableToAccessDestinationFile {
            path: destination_file_path.to_path_buf(),
            error,
        }
    })?;

    if !destination_exists {
        return Ok(());
    }

    let canonical_source_path =
        canonicalize_path(source_file_path).map_err(|error| FileError::UnableToAccessSourceFile {
            path: source_file_path.to_path_buf(),
            error,
        })?;

    // A broken symbolic link at the destination cannot be canonicalized, but it still occupies the path.
    if let Ok(canonical_destination_path) = canonicalize_path(destination_file_path) {
        if canonical_source_path == canonical_destination_path {
            return Err(FileError::SourceAndDestinationAreTheSame {
                path: canonical_source_path,
            });
        }
    }

    Err(FileError::DestinationPathAlreadyExists {
        path: destination_file_path.to_path_buf(),
    })
}
