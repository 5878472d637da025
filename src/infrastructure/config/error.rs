//! Configuration error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::path::FieldPath;

/// Configuration error types
///
/// Every variant carries enough context (file, field path or variable name)
/// for the message to be acted on without any other information.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file does not exist.
    #[error("config file does not exist: {}", path.display())]
    NotFound {
        /// Requested path
        path: PathBuf,
    },

    /// The config file exists but could not be read.
    #[error("failed to read config file: {}: {source}", path.display())]
    ReadFailure {
        /// Requested path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The document is not well-formed YAML.
    #[error("invalid YAML in config file: {origin}: {message}")]
    MalformedDocument {
        /// File path or other description of where the text came from
        origin: String,
        /// Parser message
        message: String,
    },

    /// The document contains nothing to bind.
    #[error("config file is empty: {origin}")]
    EmptyDocument {
        /// File path or other description of where the text came from
        origin: String,
    },

    /// A `${NAME}` placeholder names a variable that is not set.
    #[error("environment variable is not set: {name}")]
    UnresolvedVariable {
        /// Variable name
        name: String,
    },

    /// A `${NAME}` placeholder names a variable whose value is not valid UTF-8.
    #[error("environment variable is not valid unicode: {name}")]
    NonUnicodeVariable {
        /// Variable name
        name: String,
    },

    /// A key that the schema does not declare.
    #[error("{path} is not a recognized field")]
    UnknownField {
        /// Path of the offending key
        path: FieldPath,
    },

    /// A value of the wrong shape for its field.
    #[error("{path} has the wrong type: expected {expected}, found {found}")]
    TypeMismatch {
        /// Path of the offending value
        path: FieldPath,
        /// Shape the field declares
        expected: &'static str,
        /// What the document holds instead
        found: String,
    },

    /// A bound and defaulted value violates a constraint.
    #[error("{path} {message}")]
    ValidationFailure {
        /// Path of the offending field
        path: FieldPath,
        /// Constraint that was violated
        message: String,
    },
}

impl ConfigError {
    /// Which pipeline failure this is, without its payload.
    pub const fn kind(&self) -> ConfigErrorKind {
        match self {
            Self::NotFound { .. } => ConfigErrorKind::NotFound,
            Self::ReadFailure { .. } => ConfigErrorKind::ReadFailure,
            Self::MalformedDocument { .. } => ConfigErrorKind::MalformedDocument,
            Self::EmptyDocument { .. } => ConfigErrorKind::EmptyDocument,
            Self::UnresolvedVariable { .. } => ConfigErrorKind::UnresolvedVariable,
            Self::NonUnicodeVariable { .. } => ConfigErrorKind::NonUnicodeVariable,
            Self::UnknownField { .. } => ConfigErrorKind::UnknownField,
            Self::TypeMismatch { .. } => ConfigErrorKind::TypeMismatch,
            Self::ValidationFailure { .. } => ConfigErrorKind::ValidationFailure,
        }
    }

    pub(crate) fn validation(path: &FieldPath, message: impl Into<String>) -> Self {
        Self::ValidationFailure {
            path: path.clone(),
            message: message.into(),
        }
    }
}

/// Fieldless discriminant of [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigErrorKind {
    /// See [`ConfigError::NotFound`]
    NotFound,
    /// See [`ConfigError::ReadFailure`]
    ReadFailure,
    /// See [`ConfigError::MalformedDocument`]
    MalformedDocument,
    /// See [`ConfigError::EmptyDocument`]
    EmptyDocument,
    /// See [`ConfigError::UnresolvedVariable`]
    UnresolvedVariable,
    /// See [`ConfigError::NonUnicodeVariable`]
    NonUnicodeVariable,
    /// See [`ConfigError::UnknownField`]
    UnknownField,
    /// See [`ConfigError::TypeMismatch`]
    TypeMismatch,
    /// See [`ConfigError::ValidationFailure`]
    ValidationFailure,
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
