//! Number schema

use super::{impl_schema_builder, Schema, SchemaBase};
use crate::engine::rules::{BoundsCheck, Check, Limit, Rule, TransformCheck, TypeCheck};
use crate::engine::Validated;
use crate::error::{Result, SchemaError};
use crate::value::Value;

const BASE: &str = "{{#label}} must be a number";
const MIN: &str = "{{#label}} must be larger than or equal to {{#limit}}";
const MAX: &str = "{{#label}} must be less than or equal to {{#limit}}";
const INTEGER: &str = "{{#label}} must be an integer";
const POSITIVE: &str = "{{#label}} must be a positive number";
const NEGATIVE: &str = "{{#label}} must be a negative number";
const MULTIPLE: &str = "{{#label}} must be a multiple of {{#multiple}}";

/// Schema for numeric values (`Int` or finite `Float`)
#[derive(Debug, Clone)]
pub struct NumberSchema {
    base: SchemaBase,
}

impl NumberSchema {
    pub fn new() -> Self {
        Self::with_message(BASE)
    }

    /// Create with a custom type-mismatch message
    pub fn with_message(template: impl Into<String>) -> Self {
        Self {
            base: SchemaBase::typed(
                Rule::new("number.base", Check::Type(TypeCheck::Number)).with_message(template),
            ),
        }
    }

    /// Inclusive lower bound
    pub fn min(mut self, limit: impl Into<f64>) -> Self {
        let limit = limit.into();
        self.base.push(
            Rule::new("number.min", Check::Bounds(BoundsCheck::Number(Limit::Min(limit))))
                .with_arg("limit", limit)
                .with_message(MIN),
        );
        self
    }

    /// Inclusive upper bound
    pub fn max(mut self, limit: impl Into<f64>) -> Self {
        let limit = limit.into();
        self.base.push(
            Rule::new("number.max", Check::Bounds(BoundsCheck::Number(Limit::Max(limit))))
                .with_arg("limit", limit)
                .with_message(MAX),
        );
        self
    }

    /// Require an integral value; integral floats are converted to `Int`
    pub fn integer(mut self) -> Self {
        self.base.push(
            Rule::new("number.integer", Check::Transform(TransformCheck::Integer))
                .with_message(INTEGER),
        );
        self
    }

    pub fn positive(mut self) -> Self {
        self.base.push(
            Rule::new("number.positive", Check::Bounds(BoundsCheck::Positive))
                .with_message(POSITIVE),
        );
        self
    }

    pub fn negative(mut self) -> Self {
        self.base.push(
            Rule::new("number.negative", Check::Bounds(BoundsCheck::Negative))
                .with_message(NEGATIVE),
        );
        self
    }

    /// Require an exact multiple of `base`, which must be positive and finite
    pub fn multiple(mut self, base: impl Into<f64>) -> Result<Self> {
        let base = base.into();
        if !(base.is_finite() && base > 0.0) {
            return Err(SchemaError::invalid_argument(
                "number.multiple",
                format!("base must be a positive finite number, got {}", base),
            ));
        }

        self.base.push(
            Rule::new("number.multiple", Check::Bounds(BoundsCheck::Multiple(base)))
                .with_arg("multiple", base)
                .with_message(MULTIPLE),
        );
        Ok(self)
    }
}

impl_schema_builder!(NumberSchema);

impl Schema for NumberSchema {
    fn validate_at(&self, value: Value, path: &str) -> Validated {
        self.base.run(value, path)
    }
}
