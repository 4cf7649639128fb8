use std::path::PathBuf;

use thiserror::Error;

use super::StreamError;


/// An error that can occur when copying, moving, comparing or checksumming a file.
#[derive(Error, Debug)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum FileError {
    /// The provided source file path does not exist.
    #[error("source file does not exist: {}", .path.display())]
    SourceFileNotFound {
        /// The path that does not exist.
        path: PathBuf,
    },

    /// The provided source file path exists, but is not a file.
    #[error("source path exists, but is not a file: {}", .path.display())]
    SourcePathNotAFile {
        /// The path that exists, but is not a file.
        path: PathBuf,
    },

    /// The source file cannot be accessed, for example due to missing permissions.
    ///
    /// The inner [`std::io::Error`] will likely describe the real cause of this error.
    #[error("unable to access source file: {}", .path.display())]
    UnableToAccessSourceFile {
        /// File path that could not be accessed.
        path: PathBuf,

        /// Underlying IO error describing why the source file could not be accessed.
        #[source]
        error: std::io::Error,
    },

    /// The destination file already exists.
    ///
    /// Returned by the move functions, which never overwrite a destination.
    #[error("destination path already exists: {}", .path.display())]
    DestinationPathAlreadyExists {
        /// Destination file path that already exists.
        path: PathBuf,
    },

    /// The destination path exists, but is a directory.
    #[error("destination path exists, but is a directory: {}", .path.display())]
    DestinationPathIsADirectory {
        /// Destination path that is a directory.
        path: PathBuf,
    },

    /// The destination directory of a `*_to_directory` operation does not exist
    /// (and the caller did not ask for it to be created).
    #[error("destination directory does not exist: {}", .path.display())]
    DestinationDirectoryNotFound {
        /// Path to the missing destination directory.
        path: PathBuf,
    },

    /// The destination directory of a `*_to_directory` operation exists, but is not a directory.
    #[error("destination path exists, but is not a directory: {}", .path.display())]
    DestinationPathNotADirectory {
        /// Destination path that is not a directory.
        path: PathBuf,
    },

    /// The destination file cannot be accessed or written to,
    /// for example due to missing permissions.
    ///
    /// The inner [`std::io::Error`] will likely describe the real cause of this error.
    #[error("unable to access destination file: {}", .path.display())]
    UnableToAccessDestinationFile {
        /// Destination file path that could not be accessed.
        path: PathBuf,

        /// Underlying IO error describing why the destination file could not be accessed.
        #[source]
        error: std::io::Error,
    },

    /// The source and destination file paths point to the same file.
    #[error("source and destination file path are the same file: {}", .path.display())]
    SourceAndDestinationAreTheSame {
        /// The conflicting source and destination path.
        path: PathBuf,
    },

    /// Transferring the contents of the source file to the destination file failed.
    #[error(
        "failed to copy contents of {} to {}",
        .source_path.display(),
        .destination_path.display()
    )]
    CopyFailed {
        /// Path to the source file.
        source_path: PathBuf,

        /// Path to the destination file.
        destination_path: PathBuf,

        /// Underlying stream error.
        #[source]
        error: StreamError,
    },

    /// The copy finished, but the destination file's length does not match the source file's.
    ///
    /// This is an integrity failure: the destination must not be trusted.
    #[error(
        "length mismatch after copying {} ({} bytes) to {} ({} bytes)",
        .source_path.display(),
        .source_length,
        .destination_path.display(),
        .destination_length
    )]
    LengthMismatch {
        /// Path to the source file.
        source_path: PathBuf,

        /// Length of the source file, in bytes.
        source_length: u64,

        /// Path to the destination file.
        destination_path: PathBuf,

        /// Length of the destination file after the copy, in bytes.
        destination_length: u64,
    },

    /// The modification time of a file could not be set
    /// (when preserving it on a copy, or when touching a file).
    #[error("unable to set modification time on: {}", .path.display())]
    UnableToSetModifiedTime {
        /// Path to the file.
        path: PathBuf,

        /// Underlying IO error.
        #[source]
        error: std::io::Error,
    },

    /// The file could not be read to its end (e.g. while checksumming it).
    #[error("unable to read file: {}", .path.display())]
    UnableToReadFile {
        /// Path to the file.
        path: PathBuf,

        /// Underlying stream error.
        #[source]
        error: StreamError,
    },

    /// Comparing the contents of two files failed.
    #[error(
        "unable to compare contents of {} and {}",
        .first_path.display(),
        .second_path.display()
    )]
    ComparisonFailed {
        /// Path to the first file.
        first_path: PathBuf,

        /// Path to the second file.
        second_path: PathBuf,

        /// Underlying stream error.
        #[source]
        error: StreamError,
    },

    /// A file move fell back to copying, but the source file could not be removed afterwards.
    ///
    /// The destination copy has been removed again, so only the source file remains.
    #[error(
        "copied file to {}, but was unable to remove source file {}",
        .destination_path.display(),
        .path.display()
    )]
    UnableToRemoveSourceAfterCopy {
        /// Source file path that could not be removed.
        path: PathBuf,

        /// Destination file path (which has been removed again).
        destination_path: PathBuf,

        /// Underlying removal error.
        #[source]
        error: FileRemoveError,
    },
}


/// An error that can occur when removing a file.
#[derive(Error, Debug)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum FileRemoveError {
    /// The provided source file path does not exist.
    #[error("source file does not exist: {}", .path.display())]
    NotFound {
        /// The path that does not exist.
        path: PathBuf,
    },

    /// The provided source file path exists, but is not a file.
    #[error("source path exists, but is not a file: {}", .path.display())]
    NotAFile {
        /// The path that exists, but is not a file.
        path: PathBuf,
    },

    /// The file cannot be accessed, for example due to missing permissions.
    ///
    /// The inner [`std::io::Error`] will likely describe the real cause of this error.
    #[error("unable to access file: {}", .path.display())]
    UnableToAccessFile {
        /// Path to the file that could not be accessed.
        path: PathBuf,

        /// Underlying IO error describing why the file could not be accessed.
        #[source]
        error: std::io::Error,
    },

    /// Uncategorized IO error.
    ///
    /// The inner [`std::io::Error`] will likely describe the real cause of this error.
    #[error("uncategorized IO error")]
    OtherIoError {
        /// IO error describing the cause of the error.
        #[source]
        error: std::io::Error,
    },
}

/// An error that can occur when querying the size of a file.
#[derive(Error, Debug)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum FileSizeError {
    /// The source file does not exist.
    #[error("file does not exist: {}", .path.display())]
    NotFound {
        /// Path to the file that does not exist.
        path: PathBuf,
    },

    /// The source path exists, but is not a file nor a symbolic link to one.
    #[error("provided path exists, but is not a file nor a symbolic link to one: {}", .path.display())]
    NotAFile {
        /// Path that exists, but is not a file.
        path: PathBuf,
    },

    /// The file cannot be accessed, for example due to missing permissions.
    ///
    /// The inner [`std::io::Error`] will likely describe the real cause of this error.
    #[error("unable to access file: {}", .file_path.display())]
    UnableToAccessFile {
        /// Path to the file that could not be accessed.
        file_path: PathBuf,

        /// Underlying IO error describing why the file could not be accessed.
        #[source]
        error: std::io::Error,
    },

    /// Uncategorized IO error.
    ///
    /// The inner [`std::io::Error`] will likely describe the real cause of this error.
    #[error("uncategorized IO error")]
    OtherIoError {
        /// IO error describing the cause of the error.
        #[source]
        error: std::io::Error,
    },
}
