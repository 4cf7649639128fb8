//! Error types for every stream, charset, file, directory and removal operation.
//!
//! Errors that concern a path carry that path, and errors that stem from an underlying
//! [`std::io::Error`] (or another error of this crate) expose it as their [`source`].
//!
//! There are four broad groups of failures:
//! - *contract violations* (e.g. [`StreamError::ZeroLengthBuffer`]), which are returned
//!   before any IO is attempted,
//! - *IO failures* (most other variants),
//! - *integrity failures* ([`FileError::LengthMismatch`]), returned when a copy
//!   mechanically succeeded, but the destination does not match the source, and
//! - *aggregate failures* ([`CleanDirectoryError::PartiallyCleaned`]), which collect
//!   every per-entry failure of a multi-entry operation.
//!
//!
//! [`source`]: std::error::Error::source

mod charset;
mod directory;
mod file;
mod remove;
mod stream;

pub use charset::*;
pub use directory::*;
pub use file::*;
pub use remove::*;
pub use stream::*;
