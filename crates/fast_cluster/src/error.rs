//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Variants cover row validation failures at construction time and literal
//! serialization failures at render time.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// A row failed coordinate validation during normalization.
    #[error("invalid row {row}: {reason}")]
    Validation { row: usize, reason: String },

    /// Columnar input had columns of unequal length.
    #[error("ragged table: column {column} has {len} value(s), expected {expected}")]
    RaggedTable {
        column: usize,
        len: usize,
        expected: usize,
    },

    /// A row value could not be represented in the data literal.
    #[error("unserializable value at row {row}, field {field}")]
    Serialization { row: usize, field: usize },

    /// An options entry could not be represented in the options literal.
    #[error("unserializable option '{key}'")]
    OptionSerialization { key: String },

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
