use thiserror::Error;

/// Errors produced by identifier parsing and language lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdError {
    /// The string does not match the pattern expected of the identifier kind.
    #[error("invalid {kind} identifier: {value:?}")]
    InvalidIdentifier { kind: &'static str, value: String },

    /// No language is registered under the given code or item id.
    #[error("unknown language: {0:?}")]
    UnknownLanguage(String),
}

/// Result alias for identifier and language operations.
pub type IdResult<T> = Result<T, IdError>;
