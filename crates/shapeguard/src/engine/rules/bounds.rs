//! Value bounds validation rules
//!
//! Size limits on strings, arrays and objects, numeric limits, and date
//! limits. Every check passes values of a kind it does not measure.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use super::transform::integral;
use super::type_check::parse_date;
use super::Step;
use crate::value::Value;

/// An inclusive limit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Limit<T> {
    Min(T),
    Max(T),
    Exact(T),
}

impl<T: PartialOrd> Limit<T> {
    /// Check whether `actual` satisfies the limit
    pub fn admits(&self, actual: T) -> bool {
        match self {
            Limit::Min(limit) => actual >= *limit,
            Limit::Max(limit) => actual <= *limit,
            Limit::Exact(limit) => actual == *limit,
        }
    }
}

impl<T> Limit<T> {
    /// Check whether a value ordered `order` against the operand satisfies the limit
    pub fn accepts(&self, order: Ordering) -> bool {
        match self {
            Limit::Min(_) => order != Ordering::Less,
            Limit::Max(_) => order != Ordering::Greater,
            Limit::Exact(_) => order == Ordering::Equal,
        }
    }
}

impl<T: Copy> Limit<T> {
    /// The limit's operand
    pub fn bound(&self) -> T {
        match *self {
            Limit::Min(v) | Limit::Max(v) | Limit::Exact(v) => v,
        }
    }
}

/// What a size limit counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    /// Unicode scalar values of a string
    Chars,
    /// Elements of an array
    Items,
    /// Keys of an object
    Keys,
}

impl Measure {
    fn size_of(&self, value: &Value) -> Option<usize> {
        match (self, value) {
            (Measure::Chars, Value::String(s)) => Some(s.chars().count()),
            (Measure::Items, Value::Array(items)) => Some(items.len()),
            (Measure::Keys, Value::Object(map)) => Some(map.len()),
            _ => None,
        }
    }
}

/// Bounds check variants
#[derive(Debug, Clone, PartialEq)]
pub enum BoundsCheck {
    Size(Measure, Limit<usize>),
    Number(Limit<f64>),
    Positive,
    Negative,
    /// Value must be an exact multiple of the base
    Multiple(f64),
    /// Compares after date coercion and yields the coerced date
    Date(Limit<DateTime<Utc>>),
}

impl BoundsCheck {
    pub fn apply(&self, value: &Value) -> Step {
        match self {
            BoundsCheck::Size(measure, limit) => match measure.size_of(value) {
                Some(size) => verdict(limit.admits(size)),
                None => Step::pass(),
            },
            BoundsCheck::Number(limit) => match compare(value, limit.bound()) {
                Some(order) => verdict(limit.accepts(order)),
                None => Step::pass(),
            },
            BoundsCheck::Positive => match number(value) {
                Some(n) => verdict(n > 0.0),
                None => Step::pass(),
            },
            BoundsCheck::Negative => match number(value) {
                Some(n) => verdict(n < 0.0),
                None => Step::pass(),
            },
            BoundsCheck::Multiple(base) => match is_multiple(value, *base) {
                Some(ok) => verdict(ok),
                None => Step::pass(),
            },
            BoundsCheck::Date(limit) => match parse_date(value, None) {
                Some(date) if limit.admits(date) => Step::replace(date),
                Some(date) => Step::fail().with_value(date),
                None => Step::pass(),
            },
        }
    }
}

fn number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| n.is_finite())
}

/// Order a numeric value against `limit`, in `i64` when both are integral
fn compare(value: &Value, limit: f64) -> Option<Ordering> {
    match (value, integral(limit)) {
        (Value::Int(i), Some(limit)) => Some(i.cmp(&limit)),
        _ => number(value)?.partial_cmp(&limit),
    }
}

// Relative tolerance on the quotient for fractional bases
const QUOTIENT_EPSILON: f64 = 8.0 * f64::EPSILON;

fn is_multiple(value: &Value, base: f64) -> Option<bool> {
    if let (Value::Int(i), Some(base)) = (value, integral(base)) {
        return Some(i.checked_rem(base).is_some_and(|r| r == 0));
    }

    let quotient = number(value)? / base;
    if !quotient.is_finite() {
        return Some(false);
    }
    Some((quotient - quotient.round()).abs() <= QUOTIENT_EPSILON * quotient.abs().max(1.0))
}

fn verdict(ok: bool) -> Step {
    if ok {
        Step::pass()
    } else {
        Step::fail()
    }
}
