use std::path::Path;

use crate::{directory::try_exists_without_follow, error::FileSizeError, use_enabled_fs_module};

use_enabled_fs_module!();


/// Retrieve the size of a file in bytes.
///
///
/// ## Symbolic link behaviour
/// Symbolic links are followed: the size of a symbolic link to a file
/// is the size of the file it points to.
///
///
/// # Errors
/// If the size of the file cannot be retrieved, a [`FileSizeError`] is returned;
/// see its documentation for more details.
/// Here is a non-exhaustive list of error causes:
/// - If nothing exists at the path, a [`NotFound`] variant is returned.
/// - If the path exists, but is not a file (or a symbolic link to one), [`NotAFile`] is returned.
///   This includes broken symbolic links.
/// - If there is an issue accessing the file, for example due to missing permissions,
///   then a [`UnableToAccessFile`] is returned.
///
///
/// [`NotFound`]: FileSizeError::NotFound
/// [`NotAFile`]: FileSizeError::NotAFile
/// [`UnableToAccessFile`]: FileSizeError::UnableToAccessFile
pub fn file_size_in_bytes<P>(file_path: P) -> Result<u64, FileSizeError>
where
    P: AsRef<Path>,
{
    let file_path = file_path.as_ref();

    match try_exists_without_follow(file_path) {
        Ok(true) => {}
        Ok(false) => {
            return Err(FileSizeError::NotFound {
                path: file_path.to_path_buf(),
            });
        }
        Err(error) => {
            return Err(FileSizeError::UnableToAccessFile {
                file_path: file_path.to_path_buf(),
                error,
            });
        }
    }

    // This follows symbolic links, so we must recheck that
    // what it leads to is also a file.
    let file_metadata = match fs::metadata(file_path) {
        Ok(metadata) => metadata,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            return Err(FileSizeError::NotAFile {
                path: file_path.to_path_buf(),
            });
        }
        Err(error) => return Err(FileSizeError::OtherIoError { error }),
    };

    if !file_metadata.is_file() {
        return Err(FileSizeError::NotAFile {
            path: file_path.to_path_buf(),
        });
    }

    Ok(file_metadata.len())
}
