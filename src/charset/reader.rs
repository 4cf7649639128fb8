use std::io::{self, Read};

use encoding_rs::{CoderResult, Decoder};

use super::Charset;
use crate::{stream::Source, DEFAULT_BUFFER_SIZE};


/// Decodes a byte reader into a [`Source<char>`], incrementally.
///
/// Bytes are read in chunks of up to [`DEFAULT_BUFFER_SIZE`], and a multi-byte sequence
/// split across two reads is decoded correctly. Malformed byte sequences are replaced
/// with `U+FFFD REPLACEMENT CHARACTER`. A byte order mark is *not* stripped
/// or interpreted: the bytes are decoded exactly as `charset` specifies.
///
///
/// [`DEFAULT_BUFFER_SIZE`]: crate::DEFAULT_BUFFER_SIZE
pub struct CharReader<R> {
    inner: R,
    charset: Charset,
    decoder: Decoder,

    input: Box<[u8]>,
    input_start: usize,
    input_end: usize,
    input_exhausted: bool,

    decoded: String,
    decoded_position: usize,
    finished: bool,
}

impl<R> CharReader<R>
where
    R: Read,
{
    /// Wraps `inner`, decoding its bytes with `charset`.
    pub fn new(inner: R, charset: Charset) -> Self {
        Self::with_capacity(inner, charset, DEFAULT_BUFFER_SIZE)
    }

    /// Wraps `inner`, reading at most `capacity` bytes at once (at least one).
    pub fn with_capacity(inner: R, charset: Charset, capacity: usize) -> Self {
        Self {
            inner,
            charset,
            decoder: charset.encoding().new_decoder_without_bom_handling(),
            input: vec![0; capacity.max(1)].into_boxed_slice(),
            input_start: 0,
            input_end: 0,
            input_exhausted: false,
            decoded: String::new(),
            decoded_position: 0,
            finished: false,
        }
    }

    /// Returns the charset the bytes are decoded with.
    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Returns a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwraps this `CharReader`, returning the underlying reader.
    ///
    /// Bytes that were read from it, but not yet returned as chars, are lost.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn fill_input(&mut self) -> io::Result<()> {
        loop {
            match self.inner.read(&mut self.input) {
                Ok(0) => {
                    self.input_exhausted = true;
                    return Ok(());
                }
                Ok(bytes_read) => {
                    self.input_start = 0;
                    self.input_end = bytes_read;
                    return Ok(());
                }
                Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
                Err(error) => return Err(error),
            }
        }
    }

    /// Decodes the next batch of input into `self.decoded`.
    fn decode_next(&mut self) -> io::Result<()> {
        self.decoded.clear();
        self.decoded_position = 0;

        if self.input_start == self.input_end && !self.input_exhausted {
            self.fill_input()?;
        }

        let last = self.input_exhausted;
        let input = &self.input[self.input_start..self.input_end];

        let required_capacity = self
            .decoder
            .max_utf8_buffer_length(input.len())
            .unwrap_or(input.len().saturating_mul(3))
            .max(4);
        self.decoded.reserve(required_capacity);

        let (result, bytes_read, _) = self.decoder.decode_to_string(input, &mut self.decoded, last);
        self.input_start += bytes_read;

        match result {
            CoderResult::InputEmpty => {
                if last {
                    self.finished = true;
                }
            }
            CoderResult::OutputFull => {
                let current_capacity = self.decoded.capacity();
                self.decoded.reserve(current_capacity.max(4));
            }
        }

        Ok(())
    }
}

impl<R> Source<char> for CharReader<R>
where
    R: Read,
{
    fn read_units(&mut self, buffer: &mut [char]) -> io::Result<Option<usize>> {
        if buffer.is_empty() {
            return Ok(Some(0));
        }

        loop {
            if self.decoded_position < self.decoded.len() {
                let mut chars_read = 0;

                for (slot, character) in buffer
                    .iter_mut()
                    .zip(self.decoded[self.decoded_position..].chars())
                {
                    *slot = character;
                    chars_read += 1;
                    self.decoded_position += character.len_utf8();
                }

                return Ok(Some(chars_read));
            }

            if self.finished {
                return Ok(None);
            }

            self.decode_next()?;
        }
    }
}
