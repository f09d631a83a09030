//! Allowed and forbidden value sets
//!
//! Membership uses [`Value`] equality, so `1` and `1.0` are the same member.
//! Absent values always pass.

use super::Step;
use crate::value::Value;

/// Membership check variants
#[derive(Debug, Clone, PartialEq)]
pub enum MembershipCheck {
    /// Value must be one of the list
    Allow(Vec<Value>),
    /// Value must not be any of the list
    Deny(Vec<Value>),
    /// Boolean values must equal this literal; other kinds pass
    Literal(bool),
}

impl MembershipCheck {
    pub fn apply(&self, value: &Value) -> Step {
        if value.is_null() {
            return Step::pass();
        }

        let rejected = match self {
            MembershipCheck::Allow(allowed) => !contains(allowed, value),
            MembershipCheck::Deny(denied) => contains(denied, value),
            MembershipCheck::Literal(expected) => {
                matches!(value.as_bool(), Some(actual) if actual != *expected)
            }
        };

        if rejected {
            Step::fail()
        } else {
            Step::pass()
        }
    }
}

/// Check whether `value` is a member of `list`
pub fn contains(list: &[Value], value: &Value) -> bool {
    list.iter().any(|candidate| candidate == value)
}
