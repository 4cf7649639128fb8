use super::{ensure_non_empty_buffer, skip_fully_with_buffer, Sink, Source, TransferBuffer};
use crate::{error::StreamError, LARGE_COPY_SENTINEL};


/// Copies all remaining units from `source` to `sink` and returns the number of units copied.
///
/// A fresh buffer of [`DEFAULT_BUFFER_SIZE`] units is allocated for the duration of the call;
/// use [`copy_with_buffer`] to reuse a buffer across calls.
///
///
/// # Errors
/// Any IO error from the source or the sink aborts the copy immediately and is returned as
/// [`StreamError::Io`]. Units that were already written to the sink stay there.
///
///
/// [`DEFAULT_BUFFER_SIZE`]: crate::DEFAULT_BUFFER_SIZE
pub fn copy<T, S, K>(source: &mut S, sink: &mut K) -> Result<u64, StreamError>
where
    T: Default + Clone,
    S: Source<T> + ?Sized,
    K: Sink<T> + ?Sized,
{
    let mut buffer = TransferBuffer::<T>::with_default_size();
    copy_with_buffer(source, sink, &mut buffer)
}


/// Copies all remaining units from `source` to `sink`, reporting the count as an [`i32`].
///
/// The copy always runs to completion. If more than [`i32::MAX`] units were copied,
/// [`LARGE_COPY_SENTINEL`] (`-1`) is returned instead of a truncated count;
/// use [`copy`] to get the exact 64-bit count.
///
///
/// [`LARGE_COPY_SENTINEL`]: crate::LARGE_COPY_SENTINEL
pub fn copy_i32<T, S, K>(source: &mut S, sink: &mut K) -> Result<i32, StreamError>
where
    T: Default + Clone,
    S: Source<T> + ?Sized,
    K: Sink<T> + ?Sized,
{
    let units_copied = copy(source, sink)?;

    Ok(i32::try_from(units_copied).unwrap_or(LARGE_COPY_SENTINEL))
}


/// Copies all remaining units from `source` to `sink` through the provided `buffer`.
///
/// The buffer length determines the chunk size: each iteration reads up to `buffer.len()`
/// units, then writes exactly the units that were read. There is no look-ahead
/// and no coalescing of partial chunks.
///
///
/// # Errors
/// - [`StreamError::ZeroLengthBuffer`] if `buffer` is empty (before any IO).
/// - [`StreamError::Io`] if reading or writing fails.
pub fn copy_with_buffer<T, S, K>(
    source: &mut S,
    sink: &mut K,
    buffer: &mut [T],
) -> Result<u64, StreamError>
where
    S: Source<T> + ?Sized,
    K: Sink<T> + ?Sized,
{
    ensure_non_empty_buffer(buffer)?;

    let mut units_copied: u64 = 0;

    while let Some(units_read) = source.read_units(buffer)? {
        sink.write_units(&buffer[..units_read])?;
        units_copied += units_read as u64;
    }

    Ok(units_copied)
}


/// Skips `offset` units of `source`, then copies at most `length` units to `sink`.
///
/// See [`copy_range_with_buffer`] for details.
pub fn copy_range<T, S, K>(
    source: &mut S,
    sink: &mut K,
    offset: u64,
    length: Option<u64>,
) -> Result<u64, StreamError>
where
    T: Default + Clone,
    S: Source<T> + ?Sized,
    K: Sink<T> + ?Sized,
{
    if length == Some(0) {
        return Ok(0);
    }

    let mut buffer = TransferBuffer::<T>::with_default_size();
    copy_range_with_buffer(source, sink, offset, length, &mut buffer)
}


/// Skips `offset` units of `source`, then copies at most `length` units to `sink`
/// through the provided `buffer`.
///
/// The offset is skipped by reading and discarding units (see [`skip_fully_with_buffer`]);
/// no seeking is attempted. A `length` of `None` copies until the end of the source.
/// A `length` of `Some(0)` returns `Ok(0)` immediately, without touching the source.
///
/// Returns the number of units copied, which is less than `length` only if
/// the source ended first.
///
///
/// # Errors
/// - [`StreamError::ZeroLengthBuffer`] if `buffer` is empty (before any IO).
/// - [`StreamError::UnexpectedEndOfData`] if the source ends before `offset` units were skipped.
/// - [`StreamError::Io`] if reading or writing fails.
pub fn copy_range_with_buffer<T, S, K>(
    source: &mut S,
    sink: &mut K,
    offset: u64,
    length: Option<u64>,
    buffer: &mut [T],
) -> Result<u64, StreamError>
where
    S: Source<T> + ?Sized,
    K: Sink<T> + ?Sized,
{
    if length == Some(0) {
        return Ok(0);
    }

    ensure_non_empty_buffer(buffer)?;

    if offset > 0 {
        skip_fully_with_buffer(source, offset, buffer)?;
    }

    let Some(length) = length else {
        return copy_with_buffer(source, sink, buffer);
    };


    let mut units_remaining = length;

    while units_remaining > 0 {
        let chunk_length = units_remaining.min(buffer.len() as u64) as usize;

        let Some(units_read) = source.read_units(&mut buffer[..chunk_length])? else {
            break;
        };

        sink.write_units(&buffer[..units_read])?;
        units_remaining -= units_read as u64;
    }

    Ok(length - units_remaining)
}
