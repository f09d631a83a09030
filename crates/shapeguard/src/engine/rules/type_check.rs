//! Base type checks
//!
//! Every leaf and composite schema starts its pipeline with one of these.
//! Absent values always pass; presence is the job of `required`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::Step;
use crate::value::Value;

/// Expected kind of a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeCheck {
    String,
    /// `Int` or finite `Float`
    Number,
    Boolean,
    /// Coerces the value to a native date
    Date {
        /// Extra chrono format accepted for strings, tried after RFC 3339
        format: Option<String>,
    },
    Array,
    Object,
}

impl TypeCheck {
    pub fn apply(&self, value: &Value) -> Step {
        if value.is_null() {
            return Step::pass();
        }

        let matches = match self {
            TypeCheck::String => matches!(value, Value::String(_)),
            TypeCheck::Number => match value {
                Value::Int(_) => true,
                Value::Float(x) => x.is_finite(),
                _ => false,
            },
            TypeCheck::Boolean => matches!(value, Value::Bool(_)),
            TypeCheck::Date { format } => {
                return match parse_date(value, format.as_deref()) {
                    Some(date) => Step::replace(date),
                    None => Step::fail(),
                };
            }
            TypeCheck::Array => matches!(value, Value::Array(_)),
            TypeCheck::Object => matches!(value, Value::Object(_)),
        };

        if matches {
            Step::pass()
        } else {
            Step::fail()
        }
    }
}

/// Interpret a value as a point in time.
///
/// Accepts a native date, an RFC 3339 string (or a string in `format`), or a
/// Unix timestamp in seconds. Fractional timestamps are truncated.
pub fn parse_date(value: &Value, format: Option<&str>) -> Option<DateTime<Utc>> {
    match value {
        Value::Date(date) => Some(*date),
        Value::String(s) => parse_date_str(s, format),
        Value::Int(secs) => DateTime::from_timestamp(*secs, 0),
        Value::Float(secs) if secs.is_finite() => {
            let secs = secs.trunc();
            if secs < i64::MIN as f64 || secs >= i64::MAX as f64 {
                return None;
            }
            DateTime::from_timestamp(secs as i64, 0)
        }
        _ => None,
    }
}

fn parse_date_str(s: &str, format: Option<&str>) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Some(date.with_timezone(&Utc));
    }

    let format = format?;
    if let Ok(date) = DateTime::parse_from_str(s, format) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, format)
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
