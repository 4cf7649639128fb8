use thiserror::Error;


/// An error that can occur when copying, skipping, reading or comparing streams.
#[derive(Error, Debug)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum StreamError {
    /// A transfer buffer with no capacity was provided.
    ///
    /// This is a contract violation: it is returned before
    /// the source or sink are touched in any way.
    #[error("transfer buffer must be able to hold at least one unit")]
    ZeroLengthBuffer,

    /// The source ended before the requested amount of units could be skipped or read.
    #[error("unexpected end of data: expected {expected} units, but only {actual} were available")]
    UnexpectedEndOfData {
        /// Number of units that were requested.
        expected: u64,

        /// Number of units that were actually skipped or read before the source ended.
        actual: u64,
    },

    /// Reading from the source or writing to the sink failed.
    ///
    /// The inner [`std::io::Error`] describes the real cause of this error.
    #[error("stream read or write failed")]
    Io {
        /// Underlying IO error.
        #[from]
        error: std::io::Error,
    },
}

impl StreamError {
    /// Returns `true` if this error is a contract violation by the caller
    /// (as opposed to a failure of the underlying source or sink).
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::ZeroLengthBuffer)
    }
}
