use std::io::{self, Write};

use encoding_rs::{CoderResult, Encoder};

use super::Charset;
use crate::stream::Sink;


/// Encodes chars into a byte writer, incrementally.
///
/// Chars that cannot be represented in the target charset are written as HTML numeric
/// character references (e.g. `&#8364;`). Charsets that `encoding_rs` can only decode
/// (UTF-16LE, UTF-16BE and the replacement encoding) encode as UTF-8.
///
/// Call [`finish`][Self::finish] once all chars have been written: stateful encoders
/// (e.g. ISO-2022-JP) may need to emit trailing bytes.
/// The underlying writer is never flushed.
pub struct CharWriter<W> {
    inner: W,
    charset: Charset,
    encoder: Encoder,

    pending: String,
    encoded: Vec<u8>,
}

impl<W> CharWriter<W>
where
    W: Write,
{
    /// Wraps `inner`, encoding chars written to it with `charset`.
    pub fn new(inner: W, charset: Charset) -> Self {
        Self {
            inner,
            charset,
            encoder: charset.encoding().new_encoder(),
            pending: String::new(),
            encoded: Vec::new(),
        }
    }

    /// Returns the charset the chars are encoded with.
    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Returns a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Finalizes the encoder, writes any bytes it still holds and returns the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.pending.clear();
        self.encode_pending(true)?;

        Ok(self.inner)
    }

    fn encode_pending(&mut self, last: bool) -> io::Result<()> {
        self.encoded.clear();

        let mut remaining = self.pending.as_str();

        loop {
            let required_capacity = self
                .encoder
                .max_buffer_length_from_utf8_if_no_unmappables(remaining.len())
                .unwrap_or(remaining.len().saturating_mul(4))
                .max(16);
            self.encoded.reserve(required_capacity);

            let (result, bytes_read, _) =
                self.encoder
                    .encode_from_utf8_to_vec(remaining, &mut self.encoded, last);
            remaining = &remaining[bytes_read..];

            match result {
                CoderResult::InputEmpty => break,
                CoderResult::OutputFull => {
                    // Unmappable chars expand into numeric character references.
                    let current_capacity = self.encoded.capacity();
                    self.encoded.reserve(current_capacity);
                }
            }
        }

        self.inner.write_all(&self.encoded)
    }
}

impl<W> Sink<char> for CharWriter<W>
where
    W: Write,
{
    fn write_units(&mut self, units: &[char]) -> io::Result<()> {
        if units.is_empty() {
            return Ok(());
        }

        self.pending.clear();
        self.pending.extend(units);

        self.encode_pending(false)
    }
}
