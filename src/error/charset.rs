use thiserror::Error;


/// An error that can occur when resolving a charset by its name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum CharsetError {
    /// No charset is known under the provided name.
    #[error("unsupported charset: {name:?}")]
    Unsupported {
        /// The name (label) that could not be resolved.
        name: String,
    },
}
