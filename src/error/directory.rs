use std::path::PathBuf;

use thiserror::Error;

use super::{FileError, RemoveError};


/// An error that can occur when copying a directory tree.
///
/// Errors in the first group (up to and including [`DestinationNotWritable`]) are returned
/// during validation, before the destination has been touched in any way.
/// The rest can be returned mid-copy, in which case the destination
/// will contain the entries that were copied until then.
///
///
/// [`DestinationNotWritable`]: CopyDirectoryError::DestinationNotWritable
#[derive(Error, Debug)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum CopyDirectoryError {
    /// The source directory does not exist.
    #[error("source directory does not exist: {}", .directory_path.display())]
    SourceDirectoryNotFound {
        /// Source directory path.
        directory_path: PathBuf,
    },

    /// The source path exists, but is not a directory.
    #[error("source path exists, but is not a directory: {}", .path.display())]
    SourceNotADirectory {
        /// Source path.
        path: PathBuf,
    },

    /// The source directory could not be accessed, or its path could not be canonicalized.
    #[error("unable to access source directory: {}", .directory_path.display())]
    UnableToAccessSource {
        /// The source path we were unable to access.
        directory_path: PathBuf,

        /// Underlying IO error.
        #[source]
        error: std::io::Error,
    },

    /// The destination directory could not be accessed, or its path could not be canonicalized.
    #[error("unable to access destination directory: {}", .directory_path.display())]
    UnableToAccessDestination {
        /// The destination path we were unable to access.
        directory_path: PathBuf,

        /// Underlying IO error.
        #[source]
        error: std::io::Error,
    },

    /// The source and destination resolve to the same directory.
    #[error("source and destination are the same directory: {}", .directory_path.display())]
    SourceAndDestinationAreTheSame {
        /// Canonical path of the directory.
        directory_path: PathBuf,
    },

    /// The destination (or one of the destination sub-directories)
    /// exists, but is not a directory.
    #[error("destination path exists, but is not a directory: {}", .path.display())]
    DestinationNotADirectory {
        /// The destination path that is not a directory.
        path: PathBuf,
    },

    /// The transfer buffer size is zero.
    #[error("transfer buffer size must not be zero")]
    ZeroLengthBuffer,

    /// The destination directory exists, but is read-only.
    #[error("destination directory is not writable: {}", .directory_path.display())]
    DestinationNotWritable {
        /// The read-only destination directory.
        directory_path: PathBuf,
    },

    /// A source directory (the root or one of its sub-directories) could not be listed.
    #[error("unable to read directory: {}", .directory_path.display())]
    UnableToReadDirectory {
        /// The directory that could not be listed.
        directory_path: PathBuf,

        /// Underlying IO error.
        #[source]
        error: std::io::Error,
    },

    /// A destination directory could not be created.
    #[error("unable to create directory: {}", .directory_path.display())]
    UnableToCreateDirectory {
        /// The directory that could not be created.
        directory_path: PathBuf,

        /// Underlying IO error.
        #[source]
        error: std::io::Error,
    },

    /// Copying one of the files failed (this includes length mismatches after a copy).
    #[error("unable to copy file: {}", .file_path.display())]
    FileCopyFailed {
        /// The source file path.
        file_path: PathBuf,

        /// Underlying file copy error.
        #[source]
        error: FileError,
    },

    /// The source directory's modification time could not be applied to the destination directory.
    #[error("unable to preserve modification time on: {}", .directory_path.display())]
    UnableToPreserveModifiedTime {
        /// The destination directory.
        directory_path: PathBuf,

        /// Underlying IO error.
        #[source]
        error: std::io::Error,
    },
}


/// An error that can occur when moving a directory.
#[derive(Error, Debug)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum MoveDirectoryError {
    /// The source directory does not exist.
    #[error("source directory does not exist: {}", .directory_path.display())]
    SourceDirectoryNotFound {
        /// Source directory path.
        directory_path: PathBuf,
    },

    /// The source path exists, but is not a directory.
    #[error("source path exists, but is not a directory: {}", .path.display())]
    SourceNotADirectory {
        /// Source path.
        path: PathBuf,
    },

    /// The source or destination path could not be accessed or canonicalized.
    #[error("unable to access path: {}", .path.display())]
    UnableToAccess {
        /// The path that could not be accessed.
        path: PathBuf,

        /// Underlying IO error.
        #[source]
        error: std::io::Error,
    },

    /// The destination already exists.
    #[error("destination path already exists: {}", .path.display())]
    DestinationAlreadyExists {
        /// Destination path.
        path: PathBuf,
    },

    /// The destination of a `move_directory_to_directory` does not exist
    /// (and the caller did not ask for it to be created), or is not a directory.
    #[error("destination directory does not exist: {}", .directory_path.display())]
    DestinationDirectoryNotFound {
        /// Missing destination directory.
        directory_path: PathBuf,
    },

    /// The destination is the source itself, or lies inside of it.
    ///
    /// This is checked before anything on the filesystem is modified.
    #[error(
        "cannot move directory {} into itself ({})",
        .source_directory_path.display(),
        .destination_directory_path.display()
    )]
    DestinationInsideSource {
        /// Source directory path.
        source_directory_path: PathBuf,

        /// Destination directory path.
        destination_directory_path: PathBuf,
    },

    /// Renaming failed and the copy-and-delete fallback failed while copying.
    #[error("unable to copy directory as part of a move")]
    CopyFailed {
        /// Underlying copy error.
        #[source]
        error: CopyDirectoryError,
    },

    /// The directory was copied, but the source could not be removed afterwards.
    ///
    /// If `destination_rolled_back` is `true`, the source directory was still
    /// complete, so the destination copy has been removed again.
    /// Otherwise, the source had already lost some of its entries, so the destination
    /// copy was kept to avoid losing them.
    #[error(
        "copied directory to {}, but was unable to remove source directory {}",
        .destination_directory_path.display(),
        .source_directory_path.display()
    )]
    UnableToRemoveSourceAfterCopy {
        /// Source directory path.
        source_directory_path: PathBuf,

        /// Destination directory path.
        destination_directory_path: PathBuf,

        /// Whether the destination copy has been removed again.
        destination_rolled_back: bool,

        /// Underlying removal error.
        #[source]
        error: RemoveError,
    },
}


/// An error that can occur when computing the size of a directory.
#[derive(Error, Debug)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum DirectorySizeError {
    /// The root directory does not exist.
    #[error("directory does not exist: {}", .directory_path.display())]
    NotFound {
        /// Root directory path.
        directory_path: PathBuf,
    },

    /// The root path exists, but is not a directory.
    #[error("path exists, but is not a directory: {}", .path.display())]
    NotADirectory {
        /// Root path.
        path: PathBuf,
    },

    /// The root directory could not be accessed.
    #[error("unable to access directory: {}", .directory_path.display())]
    UnableToAccess {
        /// Root directory path.
        directory_path: PathBuf,

        /// Underlying IO error.
        #[source]
        error: std::io::Error,
    },
}


/// An error that can occur when listing files in a directory tree.
#[derive(Error, Debug)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum ListDirectoryError {
    /// The root directory does not exist.
    #[error("directory does not exist: {}", .directory_path.display())]
    NotFound {
        /// Root directory path.
        directory_path: PathBuf,
    },

    /// The root path exists, but is not a directory.
    #[error("path exists, but is not a directory: {}", .path.display())]
    NotADirectory {
        /// Root path.
        path: PathBuf,
    },

    /// The root directory or one of its sub-directories could not be read.
    #[error("unable to read directory: {}", .directory_path.display())]
    UnableToReadDirectory {
        /// The directory that could not be read.
        directory_path: PathBuf,

        /// Underlying IO error.
        #[source]
        error: std::io::Error,
    },
}
