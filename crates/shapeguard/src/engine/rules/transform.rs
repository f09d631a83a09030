//! Value normalization
//!
//! Transforms hand the pipeline a replacement value. Case checks both reject
//! and correct, so a caller ignoring errors still gets normalized output.

use super::membership::contains;
use super::Step;
use crate::value::Value;

/// Transform variants
#[derive(Debug, Clone, PartialEq)]
pub enum TransformCheck {
    /// Strip surrounding whitespace; never fails
    Trim,
    Lowercase,
    Uppercase,
    /// Integral floats become `Int`; fractional ones fail unchanged
    Integer,
    /// Listed values become `true`
    Truthy(Vec<Value>),
    /// Listed values become `false`
    Falsy(Vec<Value>),
}

impl TransformCheck {
    pub fn apply(&self, value: &Value) -> Step {
        match self {
            TransformCheck::Trim => match value {
                Value::String(s) => Step::replace(s.trim()),
                _ => Step::pass(),
            },
            TransformCheck::Lowercase => recase(value, str::to_lowercase),
            TransformCheck::Uppercase => recase(value, str::to_uppercase),
            TransformCheck::Integer => match value {
                Value::Float(x) => match integral(*x) {
                    Some(i) => Step::replace(i),
                    None => Step::fail(),
                },
                _ => Step::pass(),
            },
            TransformCheck::Truthy(list) => coerce(value, list, true),
            TransformCheck::Falsy(list) => coerce(value, list, false),
        }
    }
}

fn recase(value: &Value, convert: fn(&str) -> String) -> Step {
    let Some(s) = value.as_str() else {
        return Step::pass();
    };

    let converted = convert(s);
    if converted == s {
        Step::pass()
    } else {
        Step::fail().with_value(converted)
    }
}

/// The `i64` an integral, in-range float converts to exactly
pub(super) fn integral(x: f64) -> Option<i64> {
    if x.is_finite() && x.fract() == 0.0 && x >= i64::MIN as f64 && x < i64::MAX as f64 {
        Some(x as i64)
    } else {
        None
    }
}

fn coerce(value: &Value, list: &[Value], to: bool) -> Step {
    if !value.is_null() && contains(list, value) {
        Step::replace(to)
    } else {
        Step::pass()
    }
}
