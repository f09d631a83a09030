//! Schemas
//!
//! A schema is an ordered rule pipeline plus a label and an optional default.
//! Leaf schemas run the pipeline only; [`ArraySchema`] and [`ObjectSchema`]
//! then descend into elements and fields, extending the path as they go.
//!
//! Schemas are built by value through [`SchemaBuilder`] and validated
//! through `&self`, so a finished schema can be shared across threads.

pub mod any;
pub mod array;
pub mod boolean;
pub mod date;
pub mod number;
pub mod object;
pub mod string;

pub use any::AnySchema;
pub use array::ArraySchema;
pub use boolean::BooleanSchema;
pub use date::DateSchema;
pub use number::NumberSchema;
pub use object::ObjectSchema;
pub use string::StringSchema;

use std::fmt;
use std::sync::Arc;

use crate::engine::rules::{
    BoundsCheck, Check, CustomCheck, Limit, Measure, MembershipCheck, Predicate, Rule,
};
use crate::engine::{self, Validated};
use crate::options::ValidateOptions;
use crate::value::Value;

/// Label used when a schema has neither an explicit label nor a path
pub const DEFAULT_LABEL: &str = "value";

const REQUIRED: &str = "{{#label}} is required";
const VALID: &str = "{{#label}} must be one of {{#valid}}";
const INVALID: &str = "{{#label}} contains an invalid value";
const CUSTOM: &str = "{{#label}} failed custom validation because {{#message}}";

/// Anything that can validate a value
pub trait Schema: fmt::Debug + Send + Sync {
    /// Validate `value` located at `path` in its enclosing document
    fn validate_at(&self, value: Value, path: &str) -> Validated;

    /// Validate a root value
    fn validate(&self, value: Value) -> Validated {
        self.validate_at(value, "")
    }

    fn validate_with(&self, value: Value, options: &ValidateOptions) -> Validated {
        self.validate_at(value, &options.path)
    }
}

/// Shared handle to a schema, as held by composites
pub type SchemaRef = Arc<dyn Schema>;

impl<S: Schema + ?Sized> Schema for Arc<S> {
    fn validate_at(&self, value: Value, path: &str) -> Validated {
        (**self).validate_at(value, path)
    }
}

impl<S: Schema + ?Sized> Schema for Box<S> {
    fn validate_at(&self, value: Value, path: &str) -> Validated {
        (**self).validate_at(value, path)
    }
}

/// State shared by every schema kind
#[derive(Debug, Clone, Default)]
pub struct SchemaBase {
    label: Option<String>,
    default: Option<Value>,
    rules: Vec<Rule>,
    /// Index of the base type rule
    base: Option<usize>,
    /// Index of the most recently added rule
    last: Option<usize>,
}

impl SchemaBase {
    /// A base with no rules
    pub fn new() -> Self {
        Self::default()
    }

    /// A base whose pipeline starts with a type rule
    pub fn typed(rule: Rule) -> Self {
        Self {
            rules: vec![rule],
            base: Some(0),
            last: Some(0),
            ..Self::default()
        }
    }

    /// Explicitly set label, if any
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Value substituted for `Null` input
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Explicit label, else the path, else [`DEFAULT_LABEL`]
    pub fn effective_label<'a>(&'a self, path: &'a str) -> &'a str {
        match &self.label {
            Some(label) => label.as_str(),
            None if !path.is_empty() => path,
            None => DEFAULT_LABEL,
        }
    }

    pub fn set_label(&mut self, label: String) {
        self.label = Some(label);
    }

    pub fn set_default(&mut self, value: Value) {
        self.default = Some(value);
    }

    /// Append a rule to the pipeline
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
        self.last = Some(self.rules.len() - 1);
    }

    /// Insert a rule just before the base type rule, or append without one
    pub fn insert_before_base(&mut self, rule: Rule) {
        match self.base {
            Some(at) => {
                self.rules.insert(at, rule);
                self.base = Some(at + 1);
                self.last = Some(at);
            }
            None => self.push(rule),
        }
    }

    /// Replace the template of the most recently added rule
    pub fn set_message(&mut self, template: String) {
        if let Some(rule) = self.last.and_then(|at| self.rules.get_mut(at)) {
            rule.set_message(template);
        }
    }

    /// Substitute the default, then run the pipeline
    pub fn run(&self, value: Value, path: &str) -> Validated {
        let value = match (&self.default, value) {
            (Some(default), Value::Null) => default.clone(),
            (_, value) => value,
        };

        engine::run(&self.rules, self.effective_label(path), path, value)
    }
}

/// Fluent operations common to every schema
pub trait SchemaBuilder: Sized {
    fn base(&self) -> &SchemaBase;
    fn base_mut(&mut self) -> &mut SchemaBase;

    /// Name used for `{{#label}}` in messages
    fn label(mut self, label: impl Into<String>) -> Self {
        self.base_mut().set_label(label.into());
        self
    }

    /// Value substituted when the input is absent
    fn default(mut self, value: impl Into<Value>) -> Self {
        self.base_mut().set_default(value.into());
        self
    }

    fn required(mut self) -> Self {
        self.base_mut()
            .push(Rule::new("any.required", Check::Required).with_message(REQUIRED));
        self
    }

    /// Only accept the listed values
    fn valid<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.base_mut().push(
            Rule::new("any.valid", Check::Membership(MembershipCheck::Allow(values.clone())))
                .with_arg("valid", values)
                .with_message(VALID),
        );
        self
    }

    /// Reject the listed values
    fn invalid<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.base_mut().push(
            Rule::new("any.invalid", Check::Membership(MembershipCheck::Deny(values.clone())))
                .with_arg("invalid", values)
                .with_message(INVALID),
        );
        self
    }

    /// Run a user predicate; its error text fills `{{#message}}`
    fn custom<F>(self, predicate: F) -> Self
    where
        F: Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    {
        let predicate: Predicate = Arc::new(predicate);
        self.custom_opt(Some(predicate))
    }

    /// Like [`custom`](Self::custom); `None` adds a rule that always passes
    fn custom_opt(mut self, predicate: Option<Predicate>) -> Self {
        self.base_mut().push(
            Rule::new("any.custom", Check::Custom(CustomCheck::from(predicate)))
                .with_arg("message", "")
                .with_message(CUSTOM),
        );
        self
    }

    /// Override the message of the most recently added rule
    fn message(mut self, template: impl Into<String>) -> Self {
        self.base_mut().set_message(template.into());
        self
    }

    /// Append a user-defined rule
    fn rule(mut self, rule: Rule) -> Self {
        self.base_mut().push(rule);
        self
    }
}

/// Size rule named `name` with the bound exposed as `{{#limit}}`
pub(crate) fn size_rule(name: &str, measure: Measure, limit: Limit<usize>, template: &str) -> Rule {
    Rule::new(name, Check::Bounds(BoundsCheck::Size(measure, limit)))
        .with_arg("limit", limit.bound())
        .with_message(template)
}

/// Path of a field under `parent`
pub fn field_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

/// Path of an element under `parent`
pub fn item_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

macro_rules! impl_schema_builder {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::schema::SchemaBuilder for $ty {
                fn base(&self) -> &$crate::schema::SchemaBase {
                    &self.base
                }

                fn base_mut(&mut self) -> &mut $crate::schema::SchemaBase {
                    &mut self.base
                }
            }
        )*
    };
}

pub(crate) use impl_schema_builder;
