//! Error types for the parse operations.

use thiserror::Error;

use crate::parser::Operation;

/// Failure of a single parse call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input was empty or only whitespace.
    #[error("{operation}: empty address provided")]
    Input { operation: Operation },

    /// No grammar family accepted the input.
    #[error("{operation}: unable to parse the given address or location")]
    NoMatch { operation: Operation },

    /// A field the matched family requires did not survive normalization.
    #[error("{operation}: required field `{field}` failed validation")]
    Validation {
        operation: Operation,
        field: &'static str,
    },

    /// Parser configuration could not be loaded or is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Input,
    NoMatch,
    Validation,
    Config,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Input { .. } => ErrorKind::Input,
            Error::NoMatch { .. } => ErrorKind::NoMatch,
            Error::Validation { .. } => ErrorKind::Validation,
            Error::Config(_) => ErrorKind::Config,
        }
    }

    /// The operation that was requested, if the error came from a parse call.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Error::Input { operation }
            | Error::NoMatch { operation }
            | Error::Validation { operation, .. } => Some(*operation),
            Error::Config(_) => None,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
