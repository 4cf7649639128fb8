use std::path::{Path, PathBuf};

use thiserror::Error;


/// An error that can occur when removing a file, symbolic link or directory tree.
///
/// See [`remove_existing`] and [`ensure_directory_absent`].
///
///
/// [`remove_existing`]: crate::remove::remove_existing
/// [`ensure_directory_absent`]: crate::directory::ensure_directory_absent
#[derive(Error, Debug)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum RemoveError {
    /// Nothing exists at the path that was explicitly requested to be removed.
    #[error("nothing to remove, path does not exist: {}", .path.display())]
    NotFound {
        /// The path that does not exist.
        path: PathBuf,
    },

    /// The path was expected to be a directory, but is something else.
    #[error("path exists, but is not a directory: {}", .path.display())]
    NotADirectory {
        /// The path that is not a directory.
        path: PathBuf,
    },

    /// The path (or its metadata) cannot be accessed, for example due to missing permissions.
    #[error("unable to access path: {}", .path.display())]
    UnableToAccess {
        /// The path that could not be accessed.
        path: PathBuf,

        /// Underlying IO error.
        #[source]
        error: std::io::Error,
    },

    /// The filesystem refused to remove the entry.
    #[error("unable to remove: {}", .path.display())]
    UnableToRemove {
        /// The path that could not be removed.
        path: PathBuf,

        /// Underlying IO error.
        #[source]
        error: std::io::Error,
    },

    /// The directory's contents could not be fully removed, so the directory itself was kept.
    #[error("unable to clean directory before removing it")]
    UnableToClean {
        /// The aggregated clean failure.
        #[source]
        error: Box<CleanDirectoryError>,
    },
}

impl RemoveError {
    /// Returns the path this error concerns.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::NotADirectory { path }
            | Self::UnableToAccess { path, .. }
            | Self::UnableToRemove { path, .. } => path,
            Self::UnableToClean { error } => error.directory_path(),
        }
    }
}


/// An error that can occur when cleaning (emptying) a directory.
///
/// See [`clean_directory`].
///
///
/// [`clean_directory`]: crate::directory::clean_directory
#[derive(Error, Debug)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum CleanDirectoryError {
    /// The directory to clean does not exist.
    #[error("directory does not exist: {}", .directory_path.display())]
    NotFound {
        /// The path that does not exist.
        directory_path: PathBuf,
    },

    /// The path to clean exists, but is not a directory.
    #[error("path exists, but is not a directory: {}", .directory_path.display())]
    NotADirectory {
        /// The path that is not a directory.
        directory_path: PathBuf,
    },

    /// The directory could not be listed.
    #[error("unable to read directory: {}", .directory_path.display())]
    UnableToReadDirectory {
        /// The directory that could not be listed.
        directory_path: PathBuf,

        /// Underlying IO error.
        #[source]
        error: std::io::Error,
    },

    /// Removal of every entry was attempted, but some of them failed.
    ///
    /// Every individual failure is available in `failures`, in the order they occurred.
    /// Entries that are not mentioned in `failures` have been removed.
    #[error(
        "failed to remove {} of the entries in directory: {}",
        .failures.len(),
        .directory_path.display()
    )]
    PartiallyCleaned {
        /// The directory that was being cleaned.
        directory_path: PathBuf,

        /// Every per-entry failure.
        failures: Vec<RemoveError>,
    },
}

impl CleanDirectoryError {
    /// Returns the path of the directory that was being cleaned.
    pub fn directory_path(&self) -> &Path {
        match self {
            Self::NotFound { directory_path }
            | Self::NotADirectory { directory_path }
            | Self::UnableToReadDirectory { directory_path, .. }
            | Self::PartiallyCleaned { directory_path, .. } => directory_path,
        }
    }

    /// Returns every per-entry failure (empty unless this is
    /// [`PartiallyCleaned`][Self::PartiallyCleaned]).
    pub fn failures(&self) -> &[RemoveError] {
        match self {
            Self::PartiallyCleaned { failures, .. } => failures,
            _ => &[],
        }
    }
}
