use std::path::Path;

use crate::{directory::canonicalize_path, error::FileError, stream, use_enabled_fs_module};

use_enabled_fs_module!();


/// Compares the contents of two files, byte by byte.
///
/// - If neither file exists, they are considered equal.
/// - If only one of them exists, they are not equal.
/// - If both exist, but have different lengths, they are not equal (the contents are not read).
/// - If both paths resolve to the same file, they are equal (the contents are not read).
///
/// Otherwise, both files are opened and read in lockstep until the first difference.
/// Symbolic links are followed.
///
///
/// # Errors
/// - [`SourcePathNotAFile`] if either path is a directory (directories cannot be compared).
/// - [`UnableToAccessSourceFile`] if either file cannot be accessed or opened.
/// - [`ComparisonFailed`] if reading either file fails.
///
///
/// [`SourcePathNotAFile`]: FileError::SourcePathNotAFile
/// [`UnableToAccessSourceFile`]: FileError::UnableToAccessSourceFile
/// [`ComparisonFailed`]: FileError::ComparisonFailed
pub fn content_equals<A, B>(first_file_path: A, second_file_path: B) -> Result<bool, FileError>
where
    A: AsRef<Path>,
    B: AsRef<Path>,
{
    let first_file_path = first_file_path.as_ref();
    let second_file_path = second_file_path.as_ref();

    let first_length = existing_file_length(first_file_path)?;
    let second_length = existing_file_length(second_file_path)?;

    match (first_length, second_length) {
        (None, None) => return Ok(true),
        (Some(_), None) | (None, Some(_)) => return Ok(false),
        (Some(first_length), Some(second_length)) if first_length != second_length => {
            return Ok(false);
        }
        _ => {}
    }


    let canonical_first_path =
        canonicalize_path(first_file_path).map_err(|error| FileError::UnableToAccessSourceFile {
            path: first_file_path.to_path_buf(),
            error,
        })?;
    let canonical_second_path =
        canonicalize_path(second_file_path).map_err(|error| FileError::UnableToAccessSourceFile {
            path: second_file_path.to_path_buf(),
            error,
        })?;

    if canonical_first_path == canonical_second_path {
        return Ok(true);
    }


    let mut first_file =
        fs::File::open(first_file_path).map_err(|error| FileError::UnableToAccessSourceFile {
            path: first_file_path.to_path_buf(),
            error,
        })?;
    let mut second_file =
        fs::File::open(second_file_path).map_err(|error| FileError::UnableToAccessSourceFile {
            path: second_file_path.to_path_buf(),
            error,
        })?;

    stream::content_equals(Some(&mut first_file), Some(&mut second_file)).map_err(|error| {
        FileError::ComparisonFailed {
            first_path: first_file_path.to_path_buf(),
            second_path: second_file_path.to_path_buf(),
            error,
        }
    })
}


/// Returns the length of the file at `file_path`, or `None` if nothing exists there.
fn existing_file_length(file_path: &Path) -> Result<Option<u64>, FileError> {
    let metadata = match fs::metadata(file_path) {
        Ok(metadata) => metadata,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(error) => {
            return Err(FileError::UnableToAccessSourceFile {
                path: file_path.to_path_buf(),
                error,
            });
        }
    };

    if metadata.is_dir() {
        return Err(FileError::SourcePathNotAFile {
            path: file_path.to_path_buf(),
        });
    }

    Ok(Some(metadata.len()))
}
