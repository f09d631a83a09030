//! Per-call validation options

use serde::{Deserialize, Serialize};

/// Options for a single validation call
///
/// Loadable from any serde format, with every field optional:
///
/// ```
/// use shapeguard::ValidateOptions;
///
/// let options: ValidateOptions = serde_json::from_str(r#"{"path": "request.body"}"#).unwrap();
/// assert_eq!(options.path, "request.body");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateOptions {
    /// Path of the validated value inside its enclosing document. Prefixes
    /// every reported error path and serves as the fallback label.
    pub path: String,
}

impl ValidateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }
}
