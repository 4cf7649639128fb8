//! Stream copying, skipping, reading and comparison through a fixed-size transfer buffer.
//!
//! Every operation here is generic over the transferred *unit*: `u8` for byte streams
//! and `char` for char streams. Anything implementing [`std::io::Read`] is a byte [`Source`],
//! and anything implementing [`std::io::Write`] is a byte [`Sink`]. Char sources and sinks
//! live in the [`charset`](crate::charset) module (plus [`String`], `Vec<char>`
//! and [`std::str::Chars`], which are implemented here).
//!
//! <br>
//!
//! ##### Feature Overview
//!
//! | | <span style="font-weight:normal"><i>buffer</i></span> | <span style="font-weight:normal"><i>returns</i></span>
//! |---------------------------|------------------------|:-------------------:|
//! | [`copy`]                  | allocated per call     | [`u64`]             |
//! | [`copy_i32`]              | allocated per call     | [`i32`] (or [`LARGE_COPY_SENTINEL`]) |
//! | [`copy_with_buffer`]      | caller-supplied        | [`u64`]             |
//! | [`copy_range`]            | allocated per call     | [`u64`]             |
//! | [`copy_range_with_buffer`]| caller-supplied        | [`u64`]             |
//! | [`skip`] / [`skip_fully`] | allocated per call     | [`u64`]             |
//! | [`consume`]               | allocated per call     | [`u64`]             |
//! | [`read_fully`] / [`read_fully_exact`] | the target slice | [`usize`]    |
//! | [`content_equals`]        | two, allocated per call| [`bool`]            |
//!
//! All of them return a [`StreamError`] on failure.
//!
//!
//! # Buffers
//! The default-buffer entry points allocate a fresh buffer for every call, so there is no
//! state shared between calls or threads. To avoid the allocation on hot paths, create a
//! [`TransferBuffer`] (or use any `&mut [T]`) once and pass it to the `*_with_buffer` variants.
//! The buffer length is the chunk size: no more than that many units are ever
//! requested from a source in one read.
//!
//!
//! # Sinks are never flushed or closed
//! The engine writes every unit it reads, in order, and leaves flushing and closing
//! to the caller, who owns the sink's lifecycle.
//!
//!
//! [`LARGE_COPY_SENTINEL`]: crate::LARGE_COPY_SENTINEL
//! [`StreamError`]: crate::error::StreamError

use std::{
    io::{self, Read, Write},
    ops::{Deref, DerefMut},
    str::Chars,
};

use crate::{error::StreamError, DEFAULT_BUFFER_SIZE};

mod compare;
mod copy;
mod read;
mod skip;

pub use compare::*;
pub use copy::*;
pub use read::*;
pub use skip::*;


/// A sequential source of units (bytes or chars).
pub trait Source<T> {
    /// Reads up to `buffer.len()` units into the start of `buffer`.
    ///
    /// Returns `Ok(Some(count))` with the number of units read, or `Ok(None)` once
    /// the source has no more data. For a non-empty buffer, `count` is always at least one.
    fn read_units(&mut self, buffer: &mut [T]) -> io::Result<Option<usize>>;
}

/// A sequential sink of units (bytes or chars).
pub trait Sink<T> {
    /// Writes all of `units`, in order.
    fn write_units(&mut self, units: &[T]) -> io::Result<()>;
}


impl<R> Source<u8> for R
where
    R: Read + ?Sized,
{
    fn read_units(&mut self, buffer: &mut [u8]) -> io::Result<Option<usize>> {
        if buffer.is_empty() {
            return Ok(Some(0));
        }

        loop {
            match self.read(buffer) {
                Ok(0) => return Ok(None),
                Ok(bytes_read) => return Ok(Some(bytes_read)),
                Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
                Err(error) => return Err(error),
            }
        }
    }
}

impl<W> Sink<u8> for W
where
    W: Write + ?Sized,
{
    fn write_units(&mut self, units: &[u8]) -> io::Result<()> {
        self.write_all(units)
    }
}

impl<'a> Source<char> for Chars<'a> {
    fn read_units(&mut self, buffer: &mut [char]) -> io::Result<Option<usize>> {
        if buffer.is_empty() {
            return Ok(Some(0));
        }

        let mut chars_read = 0;
        for (slot, character) in buffer.iter_mut().zip(self.by_ref()) {
            *slot = character;
            chars_read += 1;
        }

        if chars_read == 0 {
            Ok(None)
        } else {
            Ok(Some(chars_read))
        }
    }
}

impl Sink<char> for String {
    fn write_units(&mut self, units: &[char]) -> io::Result<()> {
        self.extend(units);
        Ok(())
    }
}

impl Sink<char> for Vec<char> {
    fn write_units(&mut self, units: &[char]) -> io::Result<()> {
        self.extend_from_slice(units);
        Ok(())
    }
}



/// A fixed-length, reusable transfer buffer.
///
/// Dereferences to `[T]`, so it can be passed wherever
/// the `*_with_buffer` functions expect a `&mut [T]`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TransferBuffer<T> {
    units: Box<[T]>,
}

impl<T> TransferBuffer<T>
where
    T: Default + Clone,
{
    /// Allocates a buffer that holds `length` units.
    ///
    /// Returns [`StreamError::ZeroLengthBuffer`] if `length` is zero.
    pub fn new(length: usize) -> Result<Self, StreamError> {
        if length == 0 {
            return Err(StreamError::ZeroLengthBuffer);
        }

        Ok(Self {
            units: vec![T::default(); length].into_boxed_slice(),
        })
    }

    /// Allocates a buffer of [`DEFAULT_BUFFER_SIZE`] units.
    pub fn with_default_size() -> Self {
        Self {
            units: vec![T::default(); DEFAULT_BUFFER_SIZE].into_boxed_slice(),
        }
    }
}

impl<T> TransferBuffer<T> {
    /// Returns the buffer as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.units
    }
}

impl<T> Deref for TransferBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.units
    }
}

impl<T> DerefMut for TransferBuffer<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.units
    }
}


/// Returns [`StreamError::ZeroLengthBuffer`] for an empty buffer.
pub(crate) fn ensure_non_empty_buffer<T>(buffer: &[T]) -> Result<(), StreamError> {
    if buffer.is_empty() {
        return Err(StreamError::ZeroLengthBuffer);
    }

    Ok(())
}
