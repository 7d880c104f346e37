use thiserror::Error;

/// A type alias for handling `Result`s with `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or encoding SIP headers
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed field value: unbalanced quoting, invalid numeric text,
    /// out-of-range numeric field, invalid token characters
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A header of the wrong canonical name was offered where another
    /// was required (list insertion, singleton repetition)
    #[error("Header type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Canonical name that was required
        expected: String,
        /// Canonical name that was supplied
        actual: String,
    },

    /// A structured accessor was called on a header that is
    /// parameter-less by definition
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Raw text could not be tokenized
    #[error("Parse error: {0}")]
    Parser(String),
}

impl From<nom::Err<nom::error::Error<&str>>> for Error {
    fn from(err: nom::Err<nom::error::Error<&str>>) -> Self {
        Error::Parser(format!("Parsing failed: {err}"))
    }
}

impl Error {
    /// Shorthand for an `InvalidFormat` error.
    pub fn format(msg: impl Into<String>) -> Self {
        Error::InvalidFormat(msg.into())
    }

    /// Shorthand for a `TypeMismatch` error.
    pub fn mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Error::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
