//! Object schema
//!
//! Runs its own pipeline, validates every declared field at `path.field`,
//! then rejects or passes through the keys no field declares.

use std::sync::Arc;

use tracing::debug;

use super::{field_path, impl_schema_builder, size_rule, Schema, SchemaBase, SchemaRef};
use crate::engine::rules::{Check, Limit, Measure, Rule, TypeCheck};
use crate::engine::Validated;
use crate::error::ValidationError;
use crate::template::render;
use crate::value::{Map, Value};

const BASE: &str = "{{#label}} must be an object";
const MIN: &str = "{{#label}} must have at least {{#limit}} keys";
const MAX: &str = "{{#label}} must have less than or equal to {{#limit}} keys";
const LENGTH: &str = "{{#label}} must have {{#limit}} keys";
const UNKNOWN: &str = "{{#label}} contains unknown key '{{#key}}'";

/// Schema for objects with declared fields
#[derive(Debug, Clone)]
pub struct ObjectSchema {
    base: SchemaBase,
    /// Declaration order is validation order
    fields: Vec<(String, SchemaRef)>,
    allow_unknown: bool,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::with_message(BASE)
    }

    /// Create with a custom type-mismatch message
    pub fn with_message(template: impl Into<String>) -> Self {
        Self {
            base: SchemaBase::typed(
                Rule::new("object.base", Check::Type(TypeCheck::Object)).with_message(template),
            ),
            fields: Vec::new(),
            allow_unknown: false,
        }
    }

    /// Declare a field. Redeclaring a name replaces its schema in place.
    pub fn field<S: Schema + 'static>(mut self, name: impl Into<String>, schema: S) -> Self {
        let name = name.into();
        let schema: SchemaRef = Arc::new(schema);
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = schema,
            None => self.fields.push((name, schema)),
        }
        self
    }

    /// Whether undeclared keys are copied through instead of rejected
    pub fn unknown(mut self, allow: bool) -> Self {
        self.allow_unknown = allow;
        self
    }

    pub fn min(mut self, limit: usize) -> Self {
        self.base
            .push(size_rule("object.min", Measure::Keys, Limit::Min(limit), MIN));
        self
    }

    pub fn max(mut self, limit: usize) -> Self {
        self.base
            .push(size_rule("object.max", Measure::Keys, Limit::Max(limit), MAX));
        self
    }

    pub fn length(mut self, limit: usize) -> Self {
        self.base
            .push(size_rule("object.length", Measure::Keys, Limit::Exact(limit), LENGTH));
        self
    }

    /// Names of the declared fields, in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    fn unknown_key(&self, path: &str, key: &str, value: Value) -> ValidationError {
        let child = field_path(path, key);

        let mut context = Map::new();
        context.insert("label".to_string(), Value::from(self.base.effective_label(path)));
        context.insert("path".to_string(), Value::from(child.as_str()));
        context.insert("key".to_string(), Value::from(key));
        context.insert("value".to_string(), value);

        ValidationError::new("object.unknown", child, render(UNKNOWN, &context))
    }
}

impl_schema_builder!(ObjectSchema);

impl Schema for ObjectSchema {
    fn validate_at(&self, value: Value, path: &str) -> Validated {
        let Validated { value, mut errors } = self.base.run(value, path);

        let Value::Object(mut input) = value else {
            return Validated::new(value, errors);
        };

        let mut output = Map::new();
        for (name, schema) in &self.fields {
            let child = field_path(path, name);
            match input.remove(name) {
                Some(present) => {
                    let result = schema.validate_at(present, &child);
                    errors.extend(result.errors);
                    output.insert(name.clone(), result.value);
                }
                // Missing fields report errors but stay missing
                None => errors.extend(schema.validate_at(Value::Null, &child).errors),
            }
        }

        for (key, extra) in input {
            if self.allow_unknown {
                debug!(path = path, key = %key, "passing through unknown key");
                output.insert(key, extra);
            } else {
                debug!(path = path, key = %key, "rejecting unknown key");
                errors.push(self.unknown_key(path, &key, extra));
            }
        }

        Validated::new(Value::Object(output), errors)
    }
}
