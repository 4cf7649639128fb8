use super::{copy, Source};
use crate::error::StreamError;


/// Reads from `source` until `buffer` is full or the source ends.
///
/// Returns the number of units read, which is less than `buffer.len()` only if the source
/// ended first. An empty buffer returns `Ok(0)` immediately.
pub fn read_fully<T, S>(source: &mut S, buffer: &mut [T]) -> Result<usize, StreamError>
where
    S: Source<T> + ?Sized,
{
    let mut filled = 0;

    while filled < buffer.len() {
        let Some(units_read) = source.read_units(&mut buffer[filled..])? else {
            break;
        };

        filled += units_read;
    }

    Ok(filled)
}


/// Reads from `source` until `buffer` is completely full.
///
/// # Errors
/// Returns [`StreamError::UnexpectedEndOfData`] if the source ended before
/// the buffer could be filled. The units read until then remain in the buffer.
pub fn read_fully_exact<T, S>(source: &mut S, buffer: &mut [T]) -> Result<(), StreamError>
where
    S: Source<T> + ?Sized,
{
    let units_read = read_fully(source, buffer)?;

    if units_read != buffer.len() {
        return Err(StreamError::UnexpectedEndOfData {
            expected: buffer.len() as u64,
            actual: units_read as u64,
        });
    }

    Ok(())
}


/// Reads everything that remains in a byte `source` into a vector.
pub fn read_to_vec<S>(source: &mut S) -> Result<Vec<u8>, StreamError>
where
    S: Source<u8> + ?Sized,
{
    let mut contents = Vec::new();
    copy(source, &mut contents)?;

    Ok(contents)
}


/// Reads everything that remains in a char `source` into a string.
pub fn read_to_string<S>(source: &mut S) -> Result<String, StreamError>
where
    S: Source<char> + ?Sized,
{
    let mut contents = String::new();
    copy(source, &mut contents)?;

    Ok(contents)
}
