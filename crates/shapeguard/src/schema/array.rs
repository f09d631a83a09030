//! Array schema
//!
//! Runs its own pipeline, then validates every element against the item
//! schema at `path[i]`. Element errors never stop the remaining elements.

use std::sync::Arc;

use super::{impl_schema_builder, item_path, size_rule, Schema, SchemaBase, SchemaRef};
use crate::engine::rules::{Check, Limit, Measure, Rule, TypeCheck};
use crate::engine::Validated;
use crate::value::Value;

const BASE: &str = "{{#label}} must be an array";
const MIN: &str = "{{#label}} must contain at least {{#limit}} items";
const MAX: &str = "{{#label}} must contain less than or equal to {{#limit}} items";
const LENGTH: &str = "{{#label}} must contain {{#limit}} items";

/// Schema for arrays
#[derive(Debug, Clone)]
pub struct ArraySchema {
    base: SchemaBase,
    items: Option<SchemaRef>,
}

impl ArraySchema {
    pub fn new() -> Self {
        Self::with_message(BASE)
    }

    /// Create with a custom type-mismatch message
    pub fn with_message(template: impl Into<String>) -> Self {
        Self {
            base: SchemaBase::typed(
                Rule::new("array.base", Check::Type(TypeCheck::Array)).with_message(template),
            ),
            items: None,
        }
    }

    /// Schema applied to every element
    pub fn items<S: Schema + 'static>(mut self, schema: S) -> Self {
        self.items = Some(Arc::new(schema));
        self
    }

    pub fn min(mut self, limit: usize) -> Self {
        self.base
            .push(size_rule("array.min", Measure::Items, Limit::Min(limit), MIN));
        self
    }

    pub fn max(mut self, limit: usize) -> Self {
        self.base
            .push(size_rule("array.max", Measure::Items, Limit::Max(limit), MAX));
        self
    }

    pub fn length(mut self, limit: usize) -> Self {
        self.base
            .push(size_rule("array.length", Measure::Items, Limit::Exact(limit), LENGTH));
        self
    }
}

impl_schema_builder!(ArraySchema);

impl Schema for ArraySchema {
    fn validate_at(&self, value: Value, path: &str) -> Validated {
        let Validated { value, mut errors } = self.base.run(value, path);

        let (items, elements) = match (&self.items, value) {
            (Some(items), Value::Array(elements)) => (items, elements),
            (_, value) => return Validated::new(value, errors),
        };

        let mut output = Vec::with_capacity(elements.len());
        for (index, element) in elements.into_iter().enumerate() {
            let item = items.validate_at(element, &item_path(path, index));
            errors.extend(item.errors);
            output.push(item.value);
        }

        Validated::new(Value::Array(output), errors)
    }
}
