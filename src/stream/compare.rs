use super::{ensure_non_empty_buffer, read_fully, Source, TransferBuffer};
use crate::error::StreamError;


/// Compares the remaining contents of two sources, unit by unit.
///
/// Two absent sources are considered equal, and exactly one absent source is never equal
/// to a present one. Two present sources are equal if they yield the same units
/// in the same order and end at the same position.
///
/// Both sources are read in lockstep through two freshly allocated buffers; the comparison
/// stops at the first difference, so a source may not be read to its end.
/// Passing the same source twice is impossible (it would require two mutable borrows).
pub fn content_equals<T, A, B>(
    first: Option<&mut A>,
    second: Option<&mut B>,
) -> Result<bool, StreamError>
where
    T: Default + Clone + PartialEq,
    A: Source<T> + ?Sized,
    B: Source<T> + ?Sized,
{
    match (first, second) {
        (None, None) => Ok(true),
        (Some(_), None) | (None, Some(_)) => Ok(false),
        (Some(first), Some(second)) => {
            let mut first_buffer = TransferBuffer::<T>::with_default_size();
            let mut second_buffer = TransferBuffer::<T>::with_default_size();

            content_equals_with_buffers(first, second, &mut first_buffer, &mut second_buffer)
        }
    }
}


/// Compares the remaining contents of two sources using caller-supplied buffers.
///
/// Each round fills the same number of units (the length of the shorter buffer)
/// from both sources, then compares them.
///
///
/// # Errors
/// - [`StreamError::ZeroLengthBuffer`] if either buffer is empty.
/// - [`StreamError::Io`] if reading from either source fails.
pub fn content_equals_with_buffers<T, A, B>(
    first: &mut A,
    second: &mut B,
    first_buffer: &mut [T],
    second_buffer: &mut [T],
) -> Result<bool, StreamError>
where
    T: PartialEq,
    A: Source<T> + ?Sized,
    B: Source<T> + ?Sized,
{
    ensure_non_empty_buffer(first_buffer)?;
    ensure_non_empty_buffer(second_buffer)?;

    let chunk_length = first_buffer.len().min(second_buffer.len());
    let first_chunk = &mut first_buffer[..chunk_length];
    let second_chunk = &mut second_buffer[..chunk_length];

    loop {
        let first_read = read_fully(first, first_chunk)?;
        let second_read = read_fully(second, second_chunk)?;

        if first_read != second_read {
            return Ok(false);
        }

        if first_chunk[..first_read] != second_chunk[..second_read] {
            return Ok(false);
        }

        if first_read < chunk_length {
            // Both sources ended at the same position.
            return Ok(true);
        }
    }
}
