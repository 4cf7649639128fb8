use std::{io, path::Path};

use filetime::FileTime;

use super::{is_same_file, validate_source_file_path};
use crate::{
    directory::canonicalize_path,
    error::FileError,
    stream::{self, TransferBuffer},
    use_enabled_fs_module,
    DEFAULT_FILE_COPY_BUFFER_SIZE,
};

use_enabled_fs_module!();


/// Options that influence the [`copy_file`] function.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CopyFileOptions {
    /// Whether to set the destination file's modification time
    /// to the source file's modification time after copying.
    ///
    /// Defaults to `true`.
    pub preserve_modified_time: bool,

    /// Size of the transfer buffer used for copying the contents, in bytes.
    ///
    /// Must not be zero. Defaults to [`DEFAULT_FILE_COPY_BUFFER_SIZE`] (64 KiB).
    ///
    ///
    /// [`DEFAULT_FILE_COPY_BUFFER_SIZE`]: crate::DEFAULT_FILE_COPY_BUFFER_SIZE
    pub buffer_size: usize,
}

impl Default for CopyFileOptions {
    fn default() -> Self {
        Self {
            preserve_modified_time: true,
            buffer_size: DEFAULT_FILE_COPY_BUFFER_SIZE,
        }
    }
}


/// Copies a single file from `source_file_path` to `destination_file_path`.
///
/// The destination path must be the actual destination *file* path, not a directory.
/// Missing parent directories of the destination are created, and an existing
/// destination file is replaced. Returns the number of bytes copied.
///
/// After the copy, the length of the destination file is compared to the length of
/// the source file; a difference is reported as [`FileError::LengthMismatch`].
///
///
/// # Symbolic links
/// If `source_file_path` is a symbolic link to a file, the contents of the file
/// it points to are copied. The destination is always a regular file: a symbolic link
/// at the destination is replaced, and the file it points to is left untouched.
///
///
/// # Errors
/// - [`SourceFileNotFound`] / [`SourcePathNotAFile`] if the source is missing or not a file.
/// - [`SourceAndDestinationAreTheSame`] if both paths resolve to the same file,
///   including two hard links to one file (detected on Unix).
/// - [`DestinationPathIsADirectory`] if the destination is an existing directory.
/// - [`CopyFailed`] if the contents could not be transferred, or if `options.buffer_size` is zero
///   (before anything is created).
/// - [`LengthMismatch`] if the destination does not have the same length as the source after copying.
/// - [`UnableToSetModifiedTime`] if the modification time could not be preserved.
///
///
/// [`SourceFileNotFound`]: FileError::SourceFileNotFound
/// [`SourcePathNotAFile`]: FileError::SourcePathNotAFile
/// [`SourceAndDestinationAreTheSame`]: FileError::SourceAndDestinationAreTheSame
/// [`DestinationPathIsADirectory`]: FileError::DestinationPathIsADirectory
/// [`CopyFailed`]: FileError::CopyFailed
/// [`LengthMismatch`]: FileError::LengthMismatch
/// [`UnableToSetModifiedTime`]: FileError::UnableToSetModifiedTime
pub fn copy_file<S, D>(
    source_file_path: S,
    destination_file_path: D,
    options: CopyFileOptions,
) -> Result<u64, FileError>
where
    S: AsRef<Path>,
    D: AsRef<Path>,
{
    let source_file_path = source_file_path.as_ref();
    let destination_file_path = destination_file_path.as_ref();

    validate_source_file_path(source_file_path)?;
    validate_destination_file_path(source_file_path, destination_file_path)?;

    let mut buffer = TransferBuffer::<u8>::new(options.buffer_size).map_err(|error| {
        FileError::CopyFailed {
            source_path: source_file_path.to_path_buf(),
            destination_path: destination_file_path.to_path_buf(),
            error,
        }
    })?;

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

    copy_file_unchecked(
        source_file_path,
        destination_file_path,
        options.preserve_modified_time,
        &mut buffer,
    )
}


/// Copies a single file into `destination_directory_path`, keeping its file name.
///
/// The destination directory is created if it does not exist.
/// See [`copy_file`] for details and errors.
pub fn copy_file_to_directory<S, D>(
    source_file_path: S,
    destination_directory_path: D,
    options: CopyFileOptions,
) -> Result<u64, FileError>
where
    S: AsRef<Path>,
    D: AsRef<Path>,
{
    let source_file_path = source_file_path.as_ref();

    validate_source_file_path(source_file_path)?;

    let Some(file_name) = source_file_path.file_name() else {
        return Err(FileError::SourcePathNotAFile {
            path: source_file_path.to_path_buf(),
        });
    };

    copy_file(
        source_file_path,
        destination_directory_path.as_ref().join(file_name),
        options,
    )
}


/// Ensures that the destination is not a directory and not the source file itself.
pub(super) fn validate_destination_file_path(
    source_file_path: &Path,
    destination_file_path: &Path,
) -> Result<(), FileError> {
    let destination_exists =
        destination_file_path
            .try_exists()
            .map_err(|error| FileError::UnableToAccessDestinationFile {
                path: destination_file_path.to_path_buf(),
                error,
            })?;

    if !destination_exists {
        return Ok(());
    }

    if destination_file_path.is_dir() {
        return Err(FileError::DestinationPathIsADirectory {
            path: destination_file_path.to_path_buf(),
        });
    }

    let canonical_source_path =
        canonicalize_path(source_file_path).map_err(|error| FileError::UnableToAccessSourceFile {
            path: source_file_path.to_path_buf(),
            error,
        })?;

    let canonical_destination_path = canonicalize_path(destination_file_path).map_err(|error| {
        FileError::UnableToAccessDestinationFile {
            path: destination_file_path.to_path_buf(),
            error,
        }
    })?;

    if canonical_source_path == canonical_destination_path {
        return Err(FileError::SourceAndDestinationAreTheSame {
            path: canonical_source_path,
        });
    }

    // Hard links to one file have different canonical paths.
    let source_metadata =
        fs::metadata(source_file_path).map_err(|error| FileError::UnableToAccessSourceFile {
            path: source_file_path.to_path_buf(),
            error,
        })?;

    let destination_metadata = fs::metadata(destination_file_path).map_err(|error| {
        FileError::UnableToAccessDestinationFile {
            path: destination_file_path.to_path_buf(),
            error,
        }
    })?;

    if is_same_file(&source_metadata, &destination_metadata) {
        return Err(FileError::SourceAndDestinationAreTheSame {
            path: canonical_destination_path,
        });
    }

    Ok(())
}


/// Copies the contents of `source_file_path` to `destination_file_path` through `buffer`,
/// checks the resulting length and optionally preserves the modification time.
///
/// An existing file or symbolic link at the destination is removed before the new file
/// is created, so the contents are never written through a link (or a hard link) into
/// another file, the source included.
///
/// *Warning:* apart from the length check, no validation is done
/// (e.g. whether the source is a file, or whether the destination's parent exists).
pub(crate) fn copy_file_unchecked(
    source_file_path: &Path,
    destination_file_path: &Path,
    preserve_modified_time: bool,
    buffer: &mut [u8],
) -> Result<u64, FileError> {
    let source_metadata =
        fs::metadata(source_file_path).map_err(|error| FileError::UnableToAccessSourceFile {
            path: source_file_path.to_path_buf(),
            error,
        })?;


    // Both files are closed at the end of this block, before the length check.
    let bytes_copied = {
        let mut source_file =
            fs::File::open(source_file_path).map_err(|error| FileError::UnableToAccessSourceFile {
                path: source_file_path.to_path_buf(),
                error,
            })?;

        remove_existing_destination_file(destination_file_path)?;

        let mut destination_file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(destination_file_path)
            .map_err(|error| FileError::UnableToAccessDestinationFile {
                path: destination_file_path.to_path_buf(),
                error,
            })?;

        stream::copy_with_buffer(&mut source_file, &mut destination_file, buffer).map_err(
            |error| FileError::CopyFailed {
                source_path: source_file_path.to_path_buf(),
                destination_path: destination_file_path.to_path_buf(),
                error,
            },
        )?
    };


    let destination_length = fs::metadata(destination_file_path)
        .map_err(|error| FileError::UnableToAccessDestinationFile {
            path: destination_file_path.to_path_buf(),
            error,
        })?
        .len();

    if destination_length != source_metadata.len() {
        return Err(FileError::LengthMismatch {
            source_path: source_file_path.to_path_buf(),
            source_length: source_metadata.len(),
            destination_path: destination_file_path.to_path_buf(),
            destination_length,
        });
    }


    if preserve_modified_time {
        let source_modified_time = FileTime::from_last_modification_time(&source_metadata);

        filetime::set_file_mtime(destination_file_path, source_modified_time).map_err(|error| {
            FileError::UnableToSetModifiedTime {
                path: destination_file_path.to_path_buf(),
                error,
            }
        })?;
    }

    tracing::trace!(
        source = %source_file_path.display(),
        destination = %destination_file_path.display(),
        bytes_copied,
        "copied file"
    );

    Ok(bytes_copied)
}


/// Removes the file or symbolic link at `destination_file_path`, if there is one.
fn remove_existing_destination_file(destination_file_path: &Path) -> Result<(), FileError> {
    match fs::symlink_metadata(destination_file_path) {
        Ok(metadata) if metadata.is_dir() => Err(FileError::DestinationPathIsADirectory {
            path: destination_file_path.to_path_buf(),
        }),
        Ok(_) => fs::remove_file(destination_file_path).map_err(|error| {
            FileError::UnableToAccessDestinationFile {
                path: destination_file_path.to_path_buf(),
                error,
            }
        }),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(FileError::UnableToAccessDestinationFile {
            path: destination_file_path.to_path_buf(),
            error,
        }),
    }
}
