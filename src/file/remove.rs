use std::{io, path::Path};

use crate::{error::FileRemoveError, use_enabled_fs_module};

use_enabled_fs_module!();


/// Removes a single file.
///
///
/// # Symbolic link behaviour
/// Symbolic links are not followed.
///
/// This means that, if `file_path` is a valid symbolic link to a file,
/// the *link* will be removed, not the file the link points to.
/// If the symlink is broken, or points to something other than a file, an error is returned.
///
///
/// # Errors
/// If the file cannot be removed, a [`FileRemoveError`] is returned;
/// see its documentation for more details.
/// Here is a non-exhaustive list of error causes:
/// - If the file does not exist, a [`NotFound`] variant is returned.
/// - If the path exists, but is not a file, [`NotAFile`] is returned.
///   Notably, this is also returned when the path is a symlink to something other than a file.
/// - If there is an issue accessing the file, for example due to missing permissions,
///   then a [`UnableToAccessFile`] is returned.
///
/// There do exist other failure points, mostly due to unavoidable
/// [time-of-check time-of-use](https://en.wikipedia.org/wiki/Time-of-check_to_time-of-use)
/// issues and other potential IO errors that can prop up.
/// These errors are grouped under the [`OtherIoError`] variant.
///
///
/// To remove anything that exists at a path (including directory trees),
/// see [`remove_existing`](crate::remove::remove_existing).
///
///
/// [`NotFound`]: FileRemoveError::NotFound
/// [`NotAFile`]: FileRemoveError::NotAFile
/// [`UnableToAccessFile`]: FileRemoveError::UnableToAccessFile
/// [`OtherIoError`]: FileRemoveError::OtherIoError
pub fn remove_file<P>(file_path: P) -> Result<(), FileRemoveError>
where
    P: AsRef<Path>,
{
    let file_path = file_path.as_ref();

    let file_metadata = match fs::symlink_metadata(file_path) {
        Ok(metadata) => metadata,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            return Err(FileRemoveError::NotFound {
                path: file_path.to_path_buf(),
            });
        }
        Err(error) => {
            return Err(FileRemoveError::UnableToAccessFile {
                path: file_path.to_path_buf(),
                error,
            });
        }
    };

    let points_to_a_file = if file_metadata.is_symlink() {
        fs::metadata(file_path)
            .map(|resolved_metadata| resolved_metadata.is_file())
            .unwrap_or(false)
    } else {
        file_metadata.is_file()
    };

    if !points_to_a_file {
        return Err(FileRemoveError::NotAFile {
            path: file_path.to_path_buf(),
        });
    }

    fs::remove_file(file_path).map_err(|error| FileRemoveError::OtherIoError { error })
}
