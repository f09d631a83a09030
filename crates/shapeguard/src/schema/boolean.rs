//! Boolean schema
//!
//! `truthy` and `falsy` coerce listed values before the type check runs, so
//! `"yes"` can satisfy a boolean schema.

use super::{impl_schema_builder, Schema, SchemaBase};
use crate::engine::rules::{Check, MembershipCheck, Rule, TransformCheck, TypeCheck};
use crate::engine::Validated;
use crate::value::Value;

const BASE: &str = "{{#label}} must be a boolean";
const TRUE: &str = "{{#label}} must be true";
const FALSE: &str = "{{#label}} must be false";

/// Schema for boolean values
#[derive(Debug, Clone)]
pub struct BooleanSchema {
    base: SchemaBase,
}

impl BooleanSchema {
    pub fn new() -> Self {
        Self::with_message(BASE)
    }

    /// Create with a custom type-mismatch message
    pub fn with_message(template: impl Into<String>) -> Self {
        Self {
            base: SchemaBase::typed(
                Rule::new("boolean.base", Check::Type(TypeCheck::Boolean)).with_message(template),
            ),
        }
    }

    /// Require `true`
    pub fn is_true(mut self) -> Self {
        self.base.push(
            Rule::new("boolean.true", Check::Membership(MembershipCheck::Literal(true)))
                .with_message(TRUE),
        );
        self
    }

    /// Require `false`
    pub fn is_false(mut self) -> Self {
        self.base.push(
            Rule::new("boolean.false", Check::Membership(MembershipCheck::Literal(false)))
                .with_message(FALSE),
        );
        self
    }

    /// Treat the listed values as `true`
    pub fn truthy<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.base.insert_before_base(
            Rule::new("boolean.truthy", Check::Transform(TransformCheck::Truthy(values.clone())))
                .with_arg("truthy", values),
        );
        self
    }

    /// Treat the listed values as `false`
    pub fn falsy<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.base.insert_before_base(
            Rule::new("boolean.falsy", Check::Transform(TransformCheck::Falsy(values.clone())))
                .with_arg("falsy", values),
        );
        self
    }
}

impl_schema_builder!(BooleanSchema);

impl Schema for BooleanSchema {
    fn validate_at(&self, value: Value, path: &str) -> Validated {
        self.base.run(value, path)
    }
}
