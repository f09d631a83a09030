//! String schema

use regex::Regex;

use super::{impl_schema_builder, size_rule, Schema, SchemaBase};
use crate::engine::rules::{Check, Limit, Measure, PatternCheck, Rule, TransformCheck, TypeCheck};
use crate::engine::Validated;
use crate::error::{Result, SchemaError};
use crate::value::Value;

const BASE: &str = "{{#label}} must be a string";
const MIN: &str = "{{#label}} length must be at least {{#limit}} characters long";
const MAX: &str = "{{#label}} length must be less than or equal to {{#limit}} characters long";
const LENGTH: &str = "{{#label}} length must be {{#limit}} characters long";
const PATTERN: &str = "{{#label}} with value {{#value}} fails to match the required pattern";
const EMAIL: &str = "{{#label}} must be a valid email";
const LOWERCASE: &str = "{{#label}} must be a lowercase string";
const UPPERCASE: &str = "{{#label}} must be an uppercase string";

/// Schema for string values. Lengths count Unicode scalar values.
#[derive(Debug, Clone)]
pub struct StringSchema {
    base: SchemaBase,
}

impl StringSchema {
    pub fn new() -> Self {
        Self::with_message(BASE)
    }

    /// Create with a custom type-mismatch message
    pub fn with_message(template: impl Into<String>) -> Self {
        Self {
            base: SchemaBase::typed(
                Rule::new("string.base", Check::Type(TypeCheck::String)).with_message(template),
            ),
        }
    }

    pub fn min(mut self, limit: usize) -> Self {
        self.base
            .push(size_rule("string.min", Measure::Chars, Limit::Min(limit), MIN));
        self
    }

    pub fn max(mut self, limit: usize) -> Self {
        self.base
            .push(size_rule("string.max", Measure::Chars, Limit::Max(limit), MAX));
        self
    }

    pub fn length(mut self, limit: usize) -> Self {
        self.base
            .push(size_rule("string.length", Measure::Chars, Limit::Exact(limit), LENGTH));
        self
    }

    /// Require a match of `pattern` somewhere in the string
    pub fn pattern(self, pattern: &str) -> Result<Self> {
        let re = Regex::new(pattern).map_err(|e| SchemaError::invalid_pattern(pattern, e))?;
        Ok(self.regex(re))
    }

    /// Like [`pattern`](Self::pattern), with a compiled expression
    pub fn regex(mut self, re: Regex) -> Self {
        let source = re.as_str().to_string();
        self.base.push(
            Rule::new("string.pattern", Check::Pattern(PatternCheck::Regex(re)))
                .with_arg("pattern", source)
                .with_message(PATTERN),
        );
        self
    }

    /// Require an email address; the empty string passes
    pub fn email(mut self) -> Self {
        self.base.push(
            Rule::new("string.email", Check::Pattern(PatternCheck::Email)).with_message(EMAIL),
        );
        self
    }

    /// Strip surrounding whitespace before later rules
    pub fn trim(mut self) -> Self {
        self.base
            .push(Rule::new("string.trim", Check::Transform(TransformCheck::Trim)));
        self
    }

    /// Reject non-lowercase input and lowercase it
    pub fn lowercase(mut self) -> Self {
        self.base.push(
            Rule::new("string.lowercase", Check::Transform(TransformCheck::Lowercase))
                .with_message(LOWERCASE),
        );
        self
    }

    /// Reject non-uppercase input and uppercase it
    pub fn uppercase(mut self) -> Self {
        self.base.push(
            Rule::new("string.uppercase", Check::Transform(TransformCheck::Uppercase))
                .with_message(UPPERCASE),
        );
        self
    }
}

impl_schema_builder!(StringSchema);

impl Schema for StringSchema {
    fn validate_at(&self, value: Value, path: &str) -> Validated {
        self.base.run(value, path)
    }
}
