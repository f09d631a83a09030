//! Date schema

use chrono::{DateTime, Utc};

use super::{impl_schema_builder, Schema, SchemaBase};
use crate::engine::rules::{BoundsCheck, Check, Limit, Rule, TypeCheck};
use crate::engine::Validated;
use crate::value::Value;

const BASE: &str = "{{#label}} must be a valid date";
const MIN: &str = "{{#label}} must be larger than or equal to {{#limit}}";
const MAX: &str = "{{#label}} must be less than or equal to {{#limit}}";

/// Schema for dates.
///
/// Accepts native dates, RFC 3339 strings and Unix timestamps in seconds,
/// and normalizes all of them to [`Value::Date`].
#[derive(Debug, Clone)]
pub struct DateSchema {
    base: SchemaBase,
}

impl DateSchema {
    pub fn new() -> Self {
        Self::typed(None, BASE.to_string())
    }

    /// Create with a custom type-mismatch message
    pub fn with_message(template: impl Into<String>) -> Self {
        Self::typed(None, template.into())
    }

    /// Also accept strings in the chrono `format`, e.g. `"%Y-%m-%d"`
    pub fn with_format(format: impl Into<String>) -> Self {
        Self::typed(Some(format.into()), BASE.to_string())
    }

    fn typed(format: Option<String>, template: String) -> Self {
        Self {
            base: SchemaBase::typed(
                Rule::new("date.base", Check::Type(TypeCheck::Date { format })).with_message(template),
            ),
        }
    }

    /// Inclusive lower bound
    pub fn min(mut self, limit: DateTime<Utc>) -> Self {
        self.base.push(
            Rule::new("date.min", Check::Bounds(BoundsCheck::Date(Limit::Min(limit))))
                .with_arg("limit", limit)
                .with_message(MIN),
        );
        self
    }

    /// Inclusive upper bound
    pub fn max(mut self, limit: DateTime<Utc>) -> Self {
        self.base.push(
            Rule::new("date.max", Check::Bounds(BoundsCheck::Date(Limit::Max(limit))))
                .with_arg("limit", limit)
                .with_message(MAX),
        );
        self
    }
}

impl_schema_builder!(DateSchema);

impl Schema for DateSchema {
    fn validate_at(&self, value: Value, path: &str) -> Validated {
        self.base.run(value, path)
    }
}
