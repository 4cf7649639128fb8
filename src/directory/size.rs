use std::{io, path::Path};

use crate::{error::DirectorySizeError, use_enabled_fs_module};

use_enabled_fs_module!();


/// Returns the total size of all regular files in a directory tree, in bytes.
///
/// There is no depth limit, the directory tree is traversed as far as needed.
/// Symbolic links are not followed and contribute nothing; neither do entries
/// that cannot be read (for example due to missing permissions).
///
/// The sum wraps around on overflow (which no real tree reaches);
/// see [`directory_size_in_bytes_exact`] for a wider accumulator.
///
///
/// # Errors
/// Only the root is validated: if it does not exist, is not a directory
/// or cannot be accessed, a [`DirectorySizeError`] is returned.
pub fn directory_size_in_bytes<P>(directory_path: P) -> Result<u64, DirectorySizeError>
where
    P: AsRef<Path>,
{
    let directory_path = directory_path.as_ref();

    validate_root_directory_path(directory_path)?;

    let mut total_size: u64 = 0;
    visit_file_lengths(directory_path, &mut |file_length| {
        total_size = total_size.wrapping_add(file_length);
    });

    Ok(total_size)
}


/// Returns the total size of all regular files in a directory tree, in bytes,
/// using a 128-bit accumulator.
///
/// Behaves exactly like [`directory_size_in_bytes`] otherwise.
pub fn directory_size_in_bytes_exact<P>(directory_path: P) -> Result<u128, DirectorySizeError>
where
    P: AsRef<Path>,
{
    let directory_path = directory_path.as_ref();

    validate_root_directory_path(directory_path)?;

    let mut total_size: u128 = 0;
    visit_file_lengths(directory_path, &mut |file_length| {
        total_size += u128::from(file_length);
    });

    Ok(total_size)
}


fn validate_root_directory_path(directory_path: &Path) -> Result<(), DirectorySizeError> {
    match fs::metadata(directory_path) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(DirectorySizeError::NotADirectory {
            path: directory_path.to_path_buf(),
        }),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            Err(DirectorySizeError::NotFound {
                directory_path: directory_path.to_path_buf(),
            })
        }
        Err(error) => Err(DirectorySizeError::UnableToAccess {
            directory_path: directory_path.to_path_buf(),
            error,
        }),
    }
}


/// Calls `visit` with the length of every regular file in the tree.
fn visit_file_lengths(directory_path: &Path, visit: &mut dyn FnMut(u64)) {
    let entries = match fs::read_dir(directory_path) {
        Ok(entries) => entries,
        Err(error) => {
            tracing::trace!(path = %directory_path.display(), %error, "unable to read directory, counting it as empty");
            return;
        }
    };

    for entry in entries.flatten() {
        let entry_path = entry.path();

        let Ok(metadata) = fs::symlink_metadata(&entry_path) else {
            continue;
        };

        if metadata.is_dir() {
            visit_file_lengths(&entry_path, visit);
        } else if metadata.is_file() {
            visit(metadata.len());
        }
    }
}
