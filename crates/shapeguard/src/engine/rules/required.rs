//! Presence validation
//!
//! Fails exactly when the value is absent. Runs after default substitution,
//! so a schema with a default never reports a missing value.

use super::Step;
use crate::value::Value;

/// Fail when the value is `Null`
pub fn apply(value: &Value) -> Step {
    if value.is_null() {
        Step::fail()
    } else {
        Step::pass()
    }
}
