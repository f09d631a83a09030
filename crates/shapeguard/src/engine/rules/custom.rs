//! User predicates

use std::fmt;
use std::sync::Arc;

use super::{Failure, Step};
use crate::value::Value;

/// User predicate: `(path, value) -> Ok(())` or `Err(reason)`
pub type Predicate = Arc<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;

/// Wraps an optional user predicate; an absent predicate always passes
#[derive(Clone, Default)]
pub struct CustomCheck {
    predicate: Option<Predicate>,
}

impl CustomCheck {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    {
        Self {
            predicate: Some(Arc::new(predicate)),
        }
    }

    /// A check with no predicate
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        self.predicate.is_none()
    }

    /// Run the predicate; its error reason becomes the `message` template argument
    pub fn apply(&self, path: &str, value: &Value) -> Step {
        let Some(predicate) = &self.predicate else {
            return Step::pass();
        };

        match predicate(path, value) {
            Ok(()) => Step::pass(),
            Err(reason) => Step::fail_with(Failure::default().with_context("message", reason)),
        }
    }
}

impl From<Option<Predicate>> for CustomCheck {
    fn from(predicate: Option<Predicate>) -> Self {
        Self { predicate }
    }
}

impl fmt::Debug for CustomCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomCheck")
            .field("predicate", &self.predicate.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl PartialEq for CustomCheck {
    fn eq(&self, other: &Self) -> bool {
        match (&self.predicate, &other.predicate) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_error_becomes_message_context() {
        let check = CustomCheck::new(|_, value| match value.as_str() {
            Some("admin") => Err("reserved name".to_string()),
            _ => Ok(()),
        });

        assert_eq!(check.apply("user", &"alice".into()), Step::pass());

        let step = check.apply("user", &"admin".into());
        let failure = step.failure.unwrap();
        assert!(failure.message.is_empty());
        assert_eq!(failure.context.get("message"), Some(&Value::from("reserved name")));
    }

    #[test]
    fn test_predicate_receives_path() {
        let check = CustomCheck::new(|path, _| {
            if path == "a.b" {
                Ok(())
            } else {
                Err(format!("unexpected path {}", path))
            }
        });
        assert_eq!(check.apply("a.b", &Value::Null), Step::pass());
        assert!(check.apply("a.c", &Value::Null).is_failure());
    }

    #[test]
    fn test_absent_predicate_passes() {
        let check = CustomCheck::none();
        assert!(check.is_none());
        assert_eq!(check.apply("", &Value::Int(1)), Step::pass());
        assert_eq!(CustomCheck::from(None), check);
    }
}
