//! Error types for schema construction and payload parsing.

use thiserror::Error;

use crate::types::SchemaType;

/// Errors while parsing a JSON payload against a schema.
///
/// `path` is the JSON pointer fragment (`#`, `#/outer/inner`) of the element
/// that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("the payload at {path} is not an object, got {actual}")]
    NotAnObject { path: String, actual: &'static str },

    #[error("missing required property at {path}: {name}")]
    MissingRequiredProperty { path: String, name: String },

    #[error("schema mismatch at {path}: expected {expected}, got {actual}")]
    SchemaMismatch {
        path: String,
        expected: SchemaType,
        actual: &'static str,
    },
}

impl ParseError {
    /// Returns the JSON pointer fragment of the failing element.
    pub fn path(&self) -> &str {
        match self {
            ParseError::NotAnObject { path, .. }
            | ParseError::MissingRequiredProperty { path, .. }
            | ParseError::SchemaMismatch { path, .. } => path,
        }
    }

    /// True for shape failures (the element has the wrong JSON kind).
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(
            self,
            ParseError::NotAnObject { .. } | ParseError::SchemaMismatch { .. }
        )
    }
}

/// Errors during schema construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("required property is not in the list of properties: {name}")]
    InvalidSchema { name: String },
}
