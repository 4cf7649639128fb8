use super::{ensure_non_empty_buffer, Source, TransferBuffer};
use crate::{error::StreamError, SKIP_BUFFER_SIZE};


/// Skips up to `count` units of `source` by reading and discarding them.
///
/// Returns the number of units actually skipped, which is less than `count`
/// only if the source ended first. No seeking is attempted, even for seekable sources.
///
/// A fresh buffer of [`SKIP_BUFFER_SIZE`] units is used as the discard area.
///
///
/// [`SKIP_BUFFER_SIZE`]: crate::SKIP_BUFFER_SIZE
pub fn skip<T, S>(source: &mut S, count: u64) -> Result<u64, StreamError>
where
    T: Default + Clone,
    S: Source<T> + ?Sized,
{
    if count == 0 {
        return Ok(0);
    }

    let mut buffer = TransferBuffer::<T>::new(SKIP_BUFFER_SIZE)?;
    skip_with_buffer(source, count, &mut buffer)
}


/// Skips up to `count` units of `source`, using `buffer` as the discard area.
///
/// Returns the number of units actually skipped. A `count` of zero returns `Ok(0)`
/// without touching the source (or validating the buffer).
///
///
/// # Errors
/// - [`StreamError::ZeroLengthBuffer`] if `buffer` is empty.
/// - [`StreamError::Io`] if reading fails.
pub fn skip_with_buffer<T, S>(
    source: &mut S,
    count: u64,
    buffer: &mut [T],
) -> Result<u64, StreamError>
where
    S: Source<T> + ?Sized,
{
    if count == 0 {
        return Ok(0);
    }

    ensure_non_empty_buffer(buffer)?;

    let mut units_remaining = count;

    while units_remaining > 0 {
        let chunk_length = units_remaining.min(buffer.len() as u64) as usize;

        let Some(units_read) = source.read_units(&mut buffer[..chunk_length])? else {
            break;
        };

        units_remaining -= units_read as u64;
    }

    Ok(count - units_remaining)
}


/// Skips exactly `count` units of `source`.
///
/// # Errors
/// Returns [`StreamError::UnexpectedEndOfData`] if the source ended
/// before `count` units could be skipped.
pub fn skip_fully<T, S>(source: &mut S, count: u64) -> Result<(), StreamError>
where
    T: Default + Clone,
    S: Source<T> + ?Sized,
{
    let skipped = skip(source, count)?;

    ensure_fully_skipped(count, skipped)
}


/// Skips exactly `count` units of `source`, using `buffer` as the discard area.
///
/// # Errors
/// - [`StreamError::ZeroLengthBuffer`] if `buffer` is empty and `count` is not zero.
/// - [`StreamError::UnexpectedEndOfData`] if the source ended early.
/// - [`StreamError::Io`] if reading fails.
pub fn skip_fully_with_buffer<T, S>(
    source: &mut S,
    count: u64,
    buffer: &mut [T],
) -> Result<(), StreamError>
where
    S: Source<T> + ?Sized,
{
    let skipped = skip_with_buffer(source, count, buffer)?;

    ensure_fully_skipped(count, skipped)
}


/// Reads and discards everything that remains in `source`.
///
/// Returns the number of units consumed.
pub fn consume<T, S>(source: &mut S) -> Result<u64, StreamError>
where
    T: Default + Clone,
    S: Source<T> + ?Sized,
{
    skip(source, u64::MAX)
}


fn ensure_fully_skipped(expected: u64, actual: u64) -> Result<(), StreamError> {
    if actual != expected {
        return Err(StreamError::UnexpectedEndOfData { expected, actual });
    }

    Ok(())
}
