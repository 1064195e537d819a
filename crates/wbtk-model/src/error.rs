use thiserror::Error;
use wbtk_types::{IdError, Pid};

use crate::datatype::{Datatype, ValueKind};

/// Errors produced by model construction, edits, and the wire codec.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A claim value's runtime kind disagrees with the property's declared
    /// datatype. Fatal at construction.
    #[error("type mismatch on {property}: {datatype} expects a {expected} value, got {actual}")]
    TypeMismatch {
        property: Pid,
        datatype: Datatype,
        expected: ValueKind,
        actual: ValueKind,
    },

    /// Wire JSON for a claim value matches none of the known value shapes.
    #[error("unsupported claim value shape: {0}")]
    UnsupportedValueKind(String),

    /// Lookup by language, id, or property yielded nothing. Recoverable.
    #[error("not found: {0}")]
    NotFound(String),

    /// A wire document is missing a required field or carries one of the
    /// wrong type.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// The datatype of a property could not be resolved.
    #[error("no datatype known for {0}")]
    UnknownDatatype(Pid),

    /// Identifier or language validation failure.
    #[error(transparent)]
    Id(#[from] IdError),
}

/// Result alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
