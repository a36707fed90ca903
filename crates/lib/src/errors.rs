//! Error types for accessor and transform operations.
//!
//! Absence is not an error in this crate: probing, setting or removing a
//! missing path never fails. The variants here are reserved for the
//! operations that deliberately enforce invariants — [`Node::require`]
//! (single path, predicate) and [`validate`] (aggregate schema check).
//!
//! [`Node::require`]: crate::Node::require
//! [`validate`]: crate::transform::validate

use std::fmt;

use thiserror::Error;

/// One failed constraint from a schema validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaFailure {
    /// Dotted path of the schema leaf that failed.
    pub path: String,
    /// The type name the schema expected at the path.
    pub expected: String,
    /// The actual type name found, or `None` when the path was missing.
    pub actual: Option<String>,
}

impl fmt::Display for SchemaFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.actual {
            Some(actual) => write!(
                f,
                "'{}' expected {}, found {}",
                self.path, self.expected, actual
            ),
            None => write!(f, "'{}' expected {}, found nothing", self.path, self.expected),
        }
    }
}

fn join_failures(failures: &[SchemaFailure]) -> String {
    failures
        .iter()
        .map(SchemaFailure::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Structured error types for data operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DataError {
    /// A required value was missing or failed its validation predicate.
    #[error("validation failed at '{path}': {reason}")]
    Validation { path: String, reason: String },

    /// A schema validation run accumulated one or more failures.
    #[error("schema validation failed: {}", join_failures(.failures))]
    SchemaValidation { failures: Vec<SchemaFailure> },

    /// The schema tree itself was malformed: a leaf that is not a known
    /// type-name string.
    #[error("invalid schema at '{path}': {reason}")]
    InvalidSchema { path: String, reason: String },

    /// A value had a different type than the operation required.
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl DataError {
    /// Check if this error came from a single-path validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, DataError::Validation { .. })
    }

    /// Check if this error aggregates schema failures.
    pub fn is_schema_validation(&self) -> bool {
        matches!(self, DataError::SchemaValidation { .. })
    }

    /// Check if this error is a type mismatch.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, DataError::TypeMismatch { .. })
    }

    /// Check if this error reports a malformed schema.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self, DataError::InvalidSchema { .. })
    }

    /// Get the offending path for single-path validation and malformed
    /// schema errors.
    pub fn path(&self) -> Option<&str> {
        match self {
            DataError::Validation { path, .. } | DataError::InvalidSchema { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }

    /// Get the accumulated failures for schema validation errors.
    pub fn failures(&self) -> Option<&[SchemaFailure]> {
        match self {
            DataError::SchemaValidation { failures } => Some(failures),
            _ => None,
        }
    }
}

// Conversion from DataError to the main Error type
impl From<DataError> for crate::Error {
    fn from(err: DataError) -> Self {
        crate::Error::Data(err)
    }
}
