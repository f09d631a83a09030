//! Rule framework
//!
//! A [`Rule`] pairs a named, message-carrying descriptor with a [`Check`]:
//! a pure function of the current value that may reject it, replace it,
//! or both. Checks are grouped by [`RuleCategory`], one submodule each.

pub mod bounds;
pub mod custom;
pub mod membership;
pub mod pattern;
pub mod required;
pub mod transform;
pub mod type_check;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::value::{Map, Value};

pub use bounds::{BoundsCheck, Limit, Measure};
pub use custom::{CustomCheck, Predicate};
pub use membership::MembershipCheck;
pub use pattern::PatternCheck;
pub use transform::TransformCheck;
pub use type_check::TypeCheck;

/// Named arguments exposed to a rule's message template
pub type Args = Map;

/// Categories of validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    /// Base type checks and coercions
    Type,
    /// Presence checks
    Required,
    /// Allowed/forbidden value sets
    Membership,
    /// Numeric, length, count and date limits
    Bounds,
    /// String format checks
    Pattern,
    /// Value normalization
    Transform,
    /// User predicates and user-defined steps
    Custom,
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleCategory::Type => write!(f, "type"),
            RuleCategory::Required => write!(f, "required"),
            RuleCategory::Membership => write!(f, "membership"),
            RuleCategory::Bounds => write!(f, "bounds"),
            RuleCategory::Pattern => write!(f, "pattern"),
            RuleCategory::Transform => write!(f, "transform"),
            RuleCategory::Custom => write!(f, "custom"),
        }
    }
}

/// Why a check rejected a value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Failure {
    /// Fallback template, used when the rule carries none
    pub message: String,
    /// Extra template context, merged over the rule's arguments
    pub context: Args,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Args::new(),
        }
    }

    /// Add a context entry
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}

/// Outcome of applying one check to one value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Step {
    /// Replacement for the current value; `None` or `Null` keeps it
    pub value: Option<Value>,
    pub failure: Option<Failure>,
}

impl Step {
    /// Accept the value unchanged
    pub fn pass() -> Self {
        Self::default()
    }

    /// Accept and replace the value
    pub fn replace(value: impl Into<Value>) -> Self {
        Self {
            value: Some(value.into()),
            failure: None,
        }
    }

    /// Reject with the rule's own template
    pub fn fail() -> Self {
        Self::fail_with(Failure::default())
    }

    pub fn fail_with(failure: Failure) -> Self {
        Self {
            value: None,
            failure: Some(failure),
        }
    }

    /// Attach a replacement value to this step
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }
}

/// User-defined step function: `(path, value) -> Step`
pub type StepFn = Arc<dyn Fn(&str, &Value) -> Step + Send + Sync>;

/// The behavior behind a rule
#[derive(Clone)]
pub enum Check {
    Type(TypeCheck),
    Required,
    Membership(MembershipCheck),
    Bounds(BoundsCheck),
    Pattern(PatternCheck),
    Transform(TransformCheck),
    Custom(CustomCheck),
    Step(StepFn),
}

impl Check {
    /// Evaluate against the current value
    pub fn apply(&self, path: &str, value: &Value) -> Step {
        match self {
            Check::Type(check) => check.apply(value),
            Check::Required => required::apply(value),
            Check::Membership(check) => check.apply(value),
            Check::Bounds(check) => check.apply(value),
            Check::Pattern(check) => check.apply(value),
            Check::Transform(check) => check.apply(value),
            Check::Custom(check) => check.apply(path, value),
            Check::Step(step) => step(path, value),
        }
    }

    pub fn category(&self) -> RuleCategory {
        match self {
            Check::Type(_) => RuleCategory::Type,
            Check::Required => RuleCategory::Required,
            Check::Membership(_) => RuleCategory::Membership,
            Check::Bounds(_) => RuleCategory::Bounds,
            Check::Pattern(_) => RuleCategory::Pattern,
            Check::Transform(_) => RuleCategory::Transform,
            Check::Custom(_) | Check::Step(_) => RuleCategory::Custom,
        }
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::Type(check) => f.debug_tuple("Type").field(check).finish(),
            Check::Required => f.write_str("Required"),
            Check::Membership(check) => f.debug_tuple("Membership").field(check).finish(),
            Check::Bounds(check) => f.debug_tuple("Bounds").field(check).finish(),
            Check::Pattern(check) => f.debug_tuple("Pattern").field(check).finish(),
            Check::Transform(check) => f.debug_tuple("Transform").field(check).finish(),
            Check::Custom(check) => f.debug_tuple("Custom").field(check).finish(),
            Check::Step(_) => f.write_str("Step(<fn>)"),
        }
    }
}

impl PartialEq for Check {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Check::Type(a), Check::Type(b)) => a == b,
            (Check::Required, Check::Required) => true,
            (Check::Membership(a), Check::Membership(b)) => a == b,
            (Check::Bounds(a), Check::Bounds(b)) => a == b,
            (Check::Pattern(a), Check::Pattern(b)) => a == b,
            (Check::Transform(a), Check::Transform(b)) => a == b,
            (Check::Custom(a), Check::Custom(b)) => a == b,
            (Check::Step(a), Check::Step(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// One step of a schema's pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    name: String,
    category: RuleCategory,
    args: Args,
    message: String,
    check: Check,
}

impl Rule {
    /// Create a rule with no arguments and no template
    pub fn new(name: impl Into<String>, check: Check) -> Self {
        Self {
            name: name.into(),
            category: check.category(),
            args: Args::new(),
            message: String::new(),
            check,
        }
    }

    /// Create a rule from a step function
    pub fn from_fn<F>(name: impl Into<String>, step: F) -> Self
    where
        F: Fn(&str, &Value) -> Step + Send + Sync + 'static,
    {
        Self::new(name, Check::Step(Arc::new(step)))
    }

    /// Add a template argument
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    /// Set the message template
    pub fn with_message(mut self, template: impl Into<String>) -> Self {
        self.message = template.into();
        self
    }

    pub(crate) fn set_message(&mut self, template: String) {
        self.message = template;
    }

    /// Error code, e.g. `string.min`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> RuleCategory {
        self.category
    }

    pub fn args(&self) -> &Args {
        &self.args
    }

    /// Message template; empty when the failure supplies its own
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The check this rule dispatches to
    pub fn check(&self) -> &Check {
        &self.check
    }

    pub fn apply(&self, path: &str, value: &Value) -> Step {
        self.check.apply(path, value)
    }
}
