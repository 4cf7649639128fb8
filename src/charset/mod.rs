//! Charsets and the char streams that decode or encode through them.
//!
//! A [`Charset`] is always chosen explicitly. The only place where "no charset"
//! is accepted is [`Charset::resolve_or_default`], which maps it to UTF-8.
//!
//! Charset lookup, decoding and encoding are delegated to [`encoding_rs`],
//! which means names are resolved as [WHATWG labels](https://encoding.spec.whatwg.org/#names-and-labels)
//! (e.g. `"latin1"` resolves to `windows-1252`).
//!
//! <br>
//!
//! | | <span style="font-weight:normal"><i>direction</i></span> |
//! |---------------------|---------------------------------|
//! | [`CharReader`]      | bytes → chars ([`Source<char>`](crate::stream::Source)) |
//! | [`CharWriter`]      | chars → bytes ([`Sink<char>`](crate::stream::Sink)) |
//! | [`copy_to_chars`]   | byte reader → char sink         |
//! | [`copy_from_chars`] | char source → byte writer       |
//! | [`read_string`]     | byte reader → [`String`]        |

use std::{
    fmt,
    hash::{Hash, Hasher},
    io::{Read, Write},
};

use encoding_rs::Encoding;

use crate::{
    error::{CharsetError, StreamError},
    stream::{self, Sink, Source},
};

mod reader;
mod writer;

pub use reader::*;
pub use writer::*;


/// A resolved charset.
///
/// Two charsets resolved from different names of the same [`Encoding`] are equal.
#[derive(Clone, Copy)]
pub struct Charset {
    encoding: &'static Encoding,
}

impl Charset {
    /// Returns the UTF-8 charset.
    pub fn utf8() -> Self {
        Self {
            encoding: encoding_rs::UTF_8,
        }
    }

    /// Resolves a charset by one of its names (labels), ignoring case
    /// and surrounding whitespace.
    ///
    /// # Errors
    /// Returns [`CharsetError::Unsupported`] if no charset is known under `name`.
    pub fn for_name(name: &str) -> Result<Self, CharsetError> {
        Encoding::for_label(name.as_bytes())
            .map(Self::from)
            .ok_or_else(|| CharsetError::Unsupported {
                name: name.to_string(),
            })
    }

    /// Resolves an optional charset name, falling back to the default (UTF-8) for `None`.
    ///
    /// # Errors
    /// Returns [`CharsetError::Unsupported`] if a name was given, but could not be resolved.
    pub fn resolve_or_default(name: Option<&str>) -> Result<Self, CharsetError> {
        match name {
            Some(name) => Self::for_name(name),
            None => Ok(Self::default()),
        }
    }

    /// Returns the canonical name of this charset (e.g. `"windows-1252"`).
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Returns the underlying [`encoding_rs`] encoding.
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::utf8()
    }
}

impl From<&'static Encoding> for Charset {
    fn from(encoding: &'static Encoding) -> Self {
        Self { encoding }
    }
}

impl PartialEq for Charset {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.encoding, other.encoding)
    }
}

impl Eq for Charset {}

impl Hash for Charset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.encoding.name().hash(state);
    }
}

impl fmt::Debug for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Charset").field(&self.name()).finish()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}



/// Decodes all remaining bytes of `reader` with `charset` and copies the resulting chars
/// into `sink`.
///
/// Returns the number of chars copied. Malformed byte sequences are replaced
/// with `U+FFFD REPLACEMENT CHARACTER`.
pub fn copy_to_chars<R, K>(reader: R, sink: &mut K, charset: Charset) -> Result<u64, StreamError>
where
    R: Read,
    K: Sink<char> + ?Sized,
{
    let mut char_reader = CharReader::new(reader, charset);
    stream::copy(&mut char_reader, sink)
}


/// Encodes all remaining chars of `source` with `charset` and writes the resulting
/// bytes into `writer`.
///
/// Returns the number of chars copied. The encoder is finalized once the source ends,
/// but `writer` is not flushed.
pub fn copy_from_chars<S, W>(source: &mut S, writer: W, charset: Charset) -> Result<u64, StreamError>
where
    S: Source<char> + ?Sized,
    W: Write,
{
    let mut char_writer = CharWriter::new(writer, charset);
    let chars_copied = stream::copy(source, &mut char_writer)?;
    char_writer.finish()?;

    Ok(chars_copied)
}


/// Decodes all remaining bytes of `reader` with `charset` into a [`String`].
pub fn read_string<R>(reader: R, charset: Charset) -> Result<String, StreamError>
where
    R: Read,
{
    let mut contents = String::new();
    copy_to_chars(reader, &mut contents, charset)?;

    Ok(contents)
}
