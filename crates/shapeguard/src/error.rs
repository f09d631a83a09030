//! Error types for shapeguard
//!
//! Validation failures are data ([`ValidationError`]) collected during a run;
//! [`SchemaError`] is reserved for mistakes made while building a schema.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error raised while constructing a schema
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A regular expression failed to compile
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A rule argument is outside its accepted domain
    #[error("Invalid argument for {rule}: {reason}")]
    InvalidArgument { rule: String, reason: String },
}

impl SchemaError {
    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        SchemaError::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaError::InvalidArgument {
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for schema construction
pub type Result<T> = std::result::Result<T, SchemaError>;

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Name of the rule that failed, e.g. `string.min`
    pub code: String,
    /// Location of the failing value, e.g. `items[2].name`
    pub path: String,
    /// Rendered message
    pub message: String,
}

impl ValidationError {
    pub fn new(
        code: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error at \"{}\": {}", self.path, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Every failure from one validation run, usable with `?`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", summarize(.0))]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Create a new error list
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }

    /// Number of errors
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no errors
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over errors in report order
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Errors reported at exactly `path`
    pub fn at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.0.iter().filter(move |e| e.path == path)
    }

    /// Unwrap into the underlying list
    pub fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    match errors {
        [] => "validation failed".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{} (and {} more)", first, rest.len()),
    }
}
