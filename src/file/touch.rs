use std::path::Path;

use filetime::FileTime;

use crate::{error::FileError, use_enabled_fs_module};

use_enabled_fs_module!();


/// Creates an empty file at `file_path` if nothing exists there (creating missing parent
/// directories as well), then sets its modification time to the current time.
///
/// Existing files are not modified in any other way.
pub fn touch<P>(file_path: P) -> Result<(), FileError>
where
    P: AsRef<Path>,
{
    let file_path = file_path.as_ref();

    let exists = file_path
        .try_exists()
        .map_err(|error| FileError::UnableToAccessDestinationFile {
            path: file_path.to_path_buf(),
            error,
        })?;

    if !exists {
        if let Some(parent_directory) = file_path.parent() {
            if !parent_directory.as_os_str().is_empty() {
                fs::create_dir_all(parent_directory).map_err(|error| {
                    FileError::UnableToAccessDestinationFile {
                        path: parent_directory.to_path_buf(),
                        error,
                    }
                })?;
            }
        }

        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)
            .map_err(|error| FileError::UnableToAccessDestinationFile {
                path: file_path.to_path_buf(),
                error,
            })?;
    }

    filetime::set_file_mtime(file_path, FileTime::now()).map_err(|error| {
        FileError::UnableToSetModifiedTime {
            path: file_path.to_path_buf(),
            error,
        }
    })
}
