use std::{
    fmt,
    io,
    path::{Path, PathBuf},
};

use filetime::FileTime;

use super::{
    canonicalize_lenient,
    canonicalize_path,
    list_filtered_children,
    try_exists_without_follow,
    PathFilter,
};
use crate::{
    error::CopyDirectoryError,
    file::copy_file_unchecked,
    stream::TransferBuffer,
    use_enabled_fs_module,
    DEFAULT_FILE_COPY_BUFFER_SIZE,
};

use_enabled_fs_module!();


/// Options that influence the [`copy_directory`] function.
#[derive(Clone, Copy)]
pub struct CopyDirectoryOptions<'f> {
    /// Decides which files and sub-directories are copied.
    ///
    /// Every entry of every visited directory is passed to the filter;
    /// a rejected sub-directory is not recursed into at all.
    /// `None` (the default) copies everything.
    pub filter: Option<&'f dyn PathFilter>,

    /// Whether to set the modification time of every copied file and directory
    /// to the modification time of its source counterpart.
    ///
    /// Defaults to `true`.
    pub preserve_modified_time: bool,

    /// Size of the transfer buffer used for copying file contents, in bytes.
    /// A single buffer is reused for all files of one copy.
    ///
    /// Must not be zero. Defaults to [`DEFAULT_FILE_COPY_BUFFER_SIZE`] (64 KiB).
    ///
    ///
    /// [`DEFAULT_FILE_COPY_BUFFER_SIZE`]: crate::DEFAULT_FILE_COPY_BUFFER_SIZE
    pub buffer_size: usize,
}

impl<'f> Default for CopyDirectoryOptions<'f> {
    fn default() -> Self {
        Self {
            filter: None,
            preserve_modified_time: true,
            buffer_size: DEFAULT_FILE_COPY_BUFFER_SIZE,
        }
    }
}

impl<'f> fmt::Debug for CopyDirectoryOptions<'f> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CopyDirectoryOptions")
            .field("filter", &self.filter.map(|_| "<filter>"))
            .field("preserve_modified_time", &self.preserve_modified_time)
            .field("buffer_size", &self.buffer_size)
            .finish()
    }
}


/// Describes a successful directory copy.
///
/// See also: [`copy_directory`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CopyDirectoryFinished {
    /// Total number of bytes copied.
    pub total_bytes_copied: u64,

    /// Number of files copied.
    pub files_copied: usize,

    /// Number of directories created, including the destination root
    /// and any of its missing ancestors.
    pub directories_created: usize,
}


struct CopyContext<'f> {
    filter: Option<&'f dyn PathFilter>,
    preserve_modified_time: bool,
    buffer: TransferBuffer<u8>,

    /// Canonical paths that must never be copied: the destination root and the would-be
    /// copies of the source root's children (non-empty only when the destination is inside the source).
    excluded_paths: Vec<PathBuf>,

    finished: CopyDirectoryFinished,
}


/// Copies a directory tree from `source_directory_path` to `destination_directory_path`.
///
/// The destination does not need to exist. If it does, it must be a writable directory,
/// and the copy is a *merge*: files and directories that exist only in the destination are
/// left untouched, while files with the same relative path as a source file are overwritten.
///
/// After a directory's contents have been copied, its modification time is set to
/// the source directory's (if `options.preserve_modified_time` is `true`, the default);
/// the same goes for every file.
///
///
/// # Filtering
/// With `options.filter`, the filter decides for each entry of each visited source directory
/// whether it is copied. Directories that the filter rejects are not recursed into.
///
///
/// # Copying a directory into itself
/// The destination may lie inside the source. In that case, the entries of the source
/// are listed *before* anything is created, and the destination counterparts of those
/// entries are excluded from being copied, so the copy never recurses into its own output.
///
///
/// # Symbolic links
/// Symbolic links inside the tree are never recursed into. A symbolic link to a file
/// is copied as a regular file with the contents of the file it points to.
/// Symbolic links to directories, broken symbolic links and other special files are skipped
/// (and logged at debug level).
///
///
/// # Errors
/// Validation errors (see [`CopyDirectoryError`]) are returned before the destination is touched.
/// Errors while copying abort the copy immediately, leaving the already copied entries in place.
pub fn copy_directory<S, D>(
    source_directory_path: S,
    destination_directory_path: D,
    options: CopyDirectoryOptions,
) -> Result<CopyDirectoryFinished, CopyDirectoryError>
where
    S: AsRef<Path>,
    D: AsRef<Path>,
{
    let source_directory_path = source_directory_path.as_ref();
    let destination_directory_path = destination_directory_path.as_ref();

    let canonical_source_path = validate_source_directory_path(source_directory_path)?;
    let canonical_destination_path =
        validate_destination_directory_path(destination_directory_path)?;

    if canonical_source_path == canonical_destination_path {
        return Err(CopyDirectoryError::SourceAndDestinationAreTheSame {
            directory_path: canonical_source_path,
        });
    }

    let buffer = TransferBuffer::<u8>::new(options.buffer_size)
        .map_err(|_| CopyDirectoryError::ZeroLengthBuffer)?;


    let excluded_paths = if canonical_destination_path.starts_with(&canonical_source_path) {
        tracing::debug!(
            source = %canonical_source_path.display(),
            destination = %canonical_destination_path.display(),
            "destination is inside source, excluding its copies"
        );

        let mut excluded_paths = build_exclusion_list(
            source_directory_path,
            destination_directory_path,
            options.filter,
        )?;
        excluded_paths.push(canonical_destination_path);

        excluded_paths
    } else {
        Vec::new()
    };


    let mut context = CopyContext {
        filter: options.filter,
        preserve_modified_time: options.preserve_modified_time,
        buffer,
        excluded_paths,
        finished: CopyDirectoryFinished::default(),
    };

    copy_directory_recursive(
        source_directory_path,
        destination_directory_path,
        &mut context,
    )?;

    tracing::debug!(
        source = %source_directory_path.display(),
        destination = %destination_directory_path.display(),
        files_copied = context.finished.files_copied,
        total_bytes_copied = context.finished.total_bytes_copied,
        "copied directory"
    );

    Ok(context.finished)
}


/// Copies a directory tree into `destination_parent_directory_path`, keeping its name
/// (i.e. into `destination_parent_directory_path/<source directory name>`).
///
/// The parent directory is created if it does not exist.
/// See [`copy_directory`] for details and errors.
pub fn copy_directory_to_directory<S, D>(
    source_directory_path: S,
    destination_parent_directory_path: D,
    options: CopyDirectoryOptions,
) -> Result<CopyDirectoryFinished, CopyDirectoryError>
where
    S: AsRef<Path>,
    D: AsRef<Path>,
{
    let source_directory_path = source_directory_path.as_ref();
    let destination_parent_directory_path = destination_parent_directory_path.as_ref();

    let canonical_source_path = validate_source_directory_path(source_directory_path)?;

    match fs::metadata(destination_parent_directory_path) {
        Ok(metadata) if !metadata.is_dir() => {
            return Err(CopyDirectoryError::DestinationNotADirectory {
                path: destination_parent_directory_path.to_path_buf(),
            });
        }
        Ok(_) => {}
        Err(error) if error.kind() == io::ErrorKind::NotFound => {}
        Err(error) => {
            return Err(CopyDirectoryError::UnableToAccessDestination {
                directory_path: destination_parent_directory_path.to_path_buf(),
                error,
            });
        }
    }

    // The name is taken from the canonical path, so that e.g. "." is copied under its real name.
    let destination_directory_path = match canonical_source_path.file_name() {
        Some(directory_name) => destination_parent_directory_path.join(directory_name),
        None => destination_parent_directory_path.to_path_buf(),
    };

    copy_directory(
        source_directory_path,
        destination_directory_path,
        options,
    )
}


/// Ensures the source exists and is a directory, and returns its canonical path.
fn validate_source_directory_path(
    source_directory_path: &Path,
) -> Result<PathBuf, CopyDirectoryError> {
    match fs::metadata(source_directory_path) {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => {
            return Err(CopyDirectoryError::SourceNotADirectory {
                path: source_directory_path.to_path_buf(),
            });
        }
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            return Err(CopyDirectoryError::SourceDirectoryNotFound {
                directory_path: source_directory_path.to_path_buf(),
            });
        }
        Err(error) => {
            return Err(CopyDirectoryError::UnableToAccessSource {
                directory_path: source_directory_path.to_path_buf(),
                error,
            });
        }
    }

    canonicalize_path(source_directory_path).map_err(|error| {
        CopyDirectoryError::UnableToAccessSource {
            directory_path: source_directory_path.to_path_buf(),
            error,
        }
    })
}


/// Ensures the destination, if it exists, is a writable directory,
/// and returns its (leniently) canonical path.
fn validate_destination_directory_path(
    destination_directory_path: &Path,
) -> Result<PathBuf, CopyDirectoryError> {
    match fs::metadata(destination_directory_path) {
        Ok(metadata) => {
            if !metadata.is_dir() {
                return Err(CopyDirectoryError::DestinationNotADirectory {
                    path: destination_directory_path.to_path_buf(),
                });
            }

            if metadata.permissions().readonly() {
                return Err(CopyDirectoryError::DestinationNotWritable {
                    directory_path: destination_directory_path.to_path_buf(),
                });
            }
        }
        Err(error) if error.kind() == io::ErrorKind::NotFound => {}
        Err(error) => {
            return Err(CopyDirectoryError::UnableToAccessDestination {
                directory_path: destination_directory_path.to_path_buf(),
                error,
            });
        }
    }

    canonicalize_lenient(destination_directory_path).map_err(|error| {
        CopyDirectoryError::UnableToAccessDestination {
            directory_path: destination_directory_path.to_path_buf(),
            error,
        }
    })
}


/// Lists the (filtered) children of the source root and maps each of them
/// to the canonical path its copy would have.
fn build_exclusion_list(
    source_directory_path: &Path,
    destination_directory_path: &Path,
    filter: Option<&dyn PathFilter>,
) -> Result<Vec<PathBuf>, CopyDirectoryError> {
    let source_children = list_filtered_children(source_directory_path, filter).map_err(|error| {
        CopyDirectoryError::UnableToReadDirectory {
            directory_path: source_directory_path.to_path_buf(),
            error,
        }
    })?;

    let mut excluded_paths = Vec::with_capacity(source_children.len());

    for source_child_path in source_children {
        let Some(child_name) = source_child_path.file_name() else {
            continue;
        };

        let would_be_destination_path = destination_directory_path.join(child_name);

        let canonical_path = canonicalize_lenient(&would_be_destination_path).map_err(|error| {
            CopyDirectoryError::UnableToAccessDestination {
                directory_path: would_be_destination_path.clone(),
                error,
            }
        })?;

        excluded_paths.push(canonical_path);
    }

    Ok(excluded_paths)
}


fn copy_directory_recursive(
    source_directory_path: &Path,
    destination_directory_path: &Path,
    context: &mut CopyContext,
) -> Result<(), CopyDirectoryError> {
    // The listing is taken before the destination is created,
    // so a destination inside the source never lists itself.
    let source_children =
        list_filtered_children(source_directory_path, context.filter).map_err(|error| {
            CopyDirectoryError::UnableToReadDirectory {
                directory_path: source_directory_path.to_path_buf(),
                error,
            }
        })?;

    ensure_destination_directory_exists(destination_directory_path, context)?;


    for source_child_path in source_children {
        if is_excluded(&source_child_path, &context.excluded_paths) {
            tracing::debug!(
                path = %source_child_path.display(),
                "skipping path, it is a copy made by this operation"
            );
            continue;
        }

        let Some(child_name) = source_child_path.file_name() else {
            continue;
        };
        let destination_child_path = destination_directory_path.join(child_name);

        let child_metadata = fs::symlink_metadata(&source_child_path).map_err(|error| {
            CopyDirectoryError::UnableToAccessSource {
                directory_path: source_child_path.clone(),
                error,
            }
        })?;

        if child_metadata.is_dir() {
            copy_directory_recursive(&source_child_path, &destination_child_path, context)?;
            continue;
        }

        let is_file_or_link_to_file = if child_metadata.is_symlink() {
            match fs::metadata(&source_child_path) {
                Ok(target_metadata) if target_metadata.is_file() => true,
                Ok(_) => {
                    tracing::debug!(
                        path = %source_child_path.display(),
                        "skipping symbolic link to a directory"
                    );
                    false
                }
                Err(error) => {
                    tracing::debug!(
                        path = %source_child_path.display(),
                        %error,
                        "skipping broken symbolic link"
                    );
                    false
                }
            }
        } else if child_metadata.is_file() {
            true
        } else {
            tracing::debug!(path = %source_child_path.display(), "skipping special file");
            false
        };

        if !is_file_or_link_to_file {
            continue;
        }

        let bytes_copied = copy_file_unchecked(
            &source_child_path,
            &destination_child_path,
            context.preserve_modified_time,
            &mut context.buffer,
        )
        .map_err(|error| CopyDirectoryError::FileCopyFailed {
            file_path: source_child_path.clone(),
            error,
        })?;

        context.finished.files_copied += 1;
        context.finished.total_bytes_copied += bytes_copied;
    }


    if context.preserve_modified_time {
        let source_metadata = fs::metadata(source_directory_path).map_err(|error| {
            CopyDirectoryError::UnableToAccessSource {
                directory_path: source_directory_path.to_path_buf(),
                error,
            }
        })?;

        filetime::set_file_mtime(
            destination_directory_path,
            FileTime::from_last_modification_time(&source_metadata),
        )
        .map_err(|error| CopyDirectoryError::UnableToPreserveModifiedTime {
            directory_path: destination_directory_path.to_path_buf(),
            error,
        })?;
    }

    Ok(())
}


fn ensure_destination_directory_exists(
    destination_directory_path: &Path,
    context: &mut CopyContext,
) -> Result<(), CopyDirectoryError> {
    match fs::metadata(destination_directory_path) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(CopyDirectoryError::DestinationNotADirectory {
            path: destination_directory_path.to_path_buf(),
        }),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            let missing_directory_count = count_missing_directories(destination_directory_path);

            fs::create_dir_all(destination_directory_path).map_err(|error| {
                CopyDirectoryError::UnableToCreateDirectory {
                    directory_path: destination_directory_path.to_path_buf(),
                    error,
                }
            })?;

            context.finished.directories_created += missing_directory_count;
            Ok(())
        }
        Err(error) => Err(CopyDirectoryError::UnableToAccessDestination {
            directory_path: destination_directory_path.to_path_buf(),
            error,
        }),
    }
}


/// Counts `directory_path` and its ancestors that do not exist yet,
/// i.e. the directories `create_dir_all` is about to create.
fn count_missing_directories(directory_path: &Path) -> usize {
    directory_path
        .ancestors()
        .take_while(|ancestor| {
            !ancestor.as_os_str().is_empty()
                && matches!(try_exists_without_follow(ancestor), Ok(false))
        })
        .count()
}


fn is_excluded(source_child_path: &Path, excluded_paths: &[PathBuf]) -> bool {
    if excluded_paths.is_empty() {
        return false;
    }

    // Broken symbolic links cannot be canonicalized, and are never one of our copies.
    canonicalize_path(source_child_path)
        .map(|canonical_path| excluded_paths.contains(&canonical_path))
        .unwrap_or(false)
}
