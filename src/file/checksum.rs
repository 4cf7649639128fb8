use std::{
    hash::Hasher,
    io::{self, Write},
    path::Path,
};

use super::validate_source_file_path;
use crate::{error::FileError, stream, use_enabled_fs_module};

use_enabled_fs_module!();


/// Feeds the contents of a file into `hasher` and returns [`Hasher::finish`].
///
/// The hasher is not reset first, so several files can be checksummed together
/// by passing the same hasher to consecutive calls.
///
///
/// # Errors
/// - [`SourceFileNotFound`] / [`SourcePathNotAFile`] if the path is missing or not a file.
/// - [`UnableToAccessSourceFile`] if the file cannot be opened.
/// - [`UnableToReadFile`] if reading the file fails.
///
///
/// [`SourceFileNotFound`]: FileError::SourceFileNotFound
/// [`SourcePathNotAFile`]: FileError::SourcePathNotAFile
/// [`UnableToAccessSourceFile`]: FileError::UnableToAccessSourceFile
/// [`UnableToReadFile`]: FileError::UnableToReadFile
pub fn checksum<P, H>(file_path: P, hasher: &mut H) -> Result<u64, FileError>
where
    P: AsRef<Path>,
    H: Hasher + ?Sized,
{
    let file_path = file_path.as_ref();

    validate_source_file_path(file_path)?;

    let mut file = fs::File::open(file_path).map_err(|error| FileError::UnableToAccessSourceFile {
        path: file_path.to_path_buf(),
        error,
    })?;

    stream::copy(&mut file, &mut HashingWriter { hasher: &mut *hasher }).map_err(|error| {
        FileError::UnableToReadFile {
            path: file_path.to_path_buf(),
            error,
        }
    })?;

    Ok(hasher.finish())
}


/// Computes the CRC-32 (IEEE) checksum of a file.
///
/// See [`checksum`] for errors.
pub fn crc32<P>(file_path: P) -> Result<u32, FileError>
where
    P: AsRef<Path>,
{
    let mut hasher = crc32fast::Hasher::new();
    checksum(file_path, &mut hasher)?;

    Ok(hasher.finalize())
}


/// Adapts a [`Hasher`] into a byte sink.
struct HashingWriter<'h, H: ?Sized> {
    hasher: &'h mut H,
}

impl<'h, H> Write for HashingWriter<'h, H>
where
    H: Hasher + ?Sized,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.hasher.write(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
