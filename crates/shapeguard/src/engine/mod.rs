//! Validation engine
//!
//! Runs a schema's rule pipeline over one value. Each rule sees the value
//! produced by the rules before it; failures are recorded without stopping
//! the pipeline.

pub mod rules;

use serde::Serialize;
use tracing::trace;

use crate::error::{ValidationError, ValidationErrors};
use crate::template::render;
use crate::value::Value;
use rules::{Args, Rule};

/// Result of validating one value: the normalized value plus every failure
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Validated {
    pub value: Value,
    pub errors: Vec<ValidationError>,
}

impl Validated {
    /// Create a result from a value and its errors
    pub fn new(value: Value, errors: Vec<ValidationError>) -> Self {
        Self { value, errors }
    }

    /// Whether no rule failed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Split into the normalized value and the errors
    pub fn into_parts(self) -> (Value, Vec<ValidationError>) {
        (self.value, self.errors)
    }

    /// The normalized value, or every error when any rule failed
    pub fn into_result(self) -> Result<Value, ValidationErrors> {
        if self.errors.is_empty() {
            Ok(self.value)
        } else {
            Err(ValidationErrors::new(self.errors))
        }
    }
}

/// Run `rules` in order over `value`.
///
/// A failure is rendered with the rule's template, or with the failure's own
/// message when the rule has none. The template context holds `label`,
/// `path`, and the current `value`, overlaid by the rule's arguments and then
/// the failure's context. A replacement value becomes current unless it is
/// `Null`.
pub fn run(rules: &[Rule], label: &str, path: &str, value: Value) -> Validated {
    let mut current = value;
    let mut errors = Vec::new();

    for rule in rules {
        let step = rule.apply(path, &current);

        if let Some(failure) = step.failure {
            let template = if rule.message().is_empty() {
                failure.message.as_str()
            } else {
                rule.message()
            };

            let mut context = Args::new();
            context.insert("label".to_string(), Value::from(label));
            context.insert("path".to_string(), Value::from(path));
            context.insert("value".to_string(), current.clone());
            context.extend(rule.args().iter().map(|(k, v)| (k.clone(), v.clone())));
            context.extend(failure.context.iter().map(|(k, v)| (k.clone(), v.clone())));

            trace!(rule = rule.name(), path = path, "rule failed");
            errors.push(ValidationError::new(
                rule.name(),
                path,
                render(template, &context),
            ));
        }

        if let Some(next) = step.value {
            if !next.is_null() {
                current = next;
            }
        }
    }

    Validated::new(current, errors)
}
