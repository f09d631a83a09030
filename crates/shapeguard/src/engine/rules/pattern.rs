//! String format checks

use regex::Regex;

use super::Step;
use crate::value::Value;

/// Pattern check variants
#[derive(Debug, Clone)]
pub enum PatternCheck {
    Regex(Regex),
    /// Address of the form `local@domain`; the empty string passes
    Email,
}

impl PatternCheck {
    pub fn apply(&self, value: &Value) -> Step {
        let Some(s) = value.as_str() else {
            return Step::pass();
        };

        let ok = match self {
            PatternCheck::Regex(re) => re.is_match(s),
            PatternCheck::Email => s.is_empty() || is_email(s),
        };

        if ok {
            Step::pass()
        } else {
            Step::fail()
        }
    }
}

impl PartialEq for PatternCheck {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PatternCheck::Regex(a), PatternCheck::Regex(b)) => a.as_str() == b.as_str(),
            (PatternCheck::Email, PatternCheck::Email) => true,
            _ => false,
        }
    }
}

/// Check a bare address (no display name, no quoted local part)
pub fn is_email(s: &str) -> bool {
    let Some((local, domain)) = s.rsplit_once('@') else {
        return false;
    };

    valid_local_part(local) && valid_domain(domain)
}

fn valid_local_part(local: &str) -> bool {
    const SPECIALS: &str = "!#$%&'*+-/=?^_`{|}~";

    !local.is_empty()
        && local.len() <= 64
        && local
            .split('.')
            .all(|atom| !atom.is_empty() && atom.chars().all(|c| c.is_ascii_alphanumeric() || SPECIALS.contains(c)))
}

fn valid_domain(domain: &str) -> bool {
    !domain.is_empty()
        && domain.len() <= 255
        && domain.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex() {
        let check = PatternCheck::Regex(Regex::new("^[a-z]+$").unwrap());
        assert_eq!(check.apply(&"abc".into()), Step::pass());
        assert!(check.apply(&"ab1".into()).is_failure());
        assert_eq!(check.apply(&Value::Int(1)), Step::pass());
    }

    #[test]
    fn test_regex_equality_by_source() {
        let a = PatternCheck::Regex(Regex::new("^a$").unwrap());
        let b = PatternCheck::Regex(Regex::new("^a$").unwrap());
        assert_eq!(a, b);
        assert_ne!(a, PatternCheck::Email);
    }

    #[test]
    fn test_email() {
        for ok in ["user@example.com", "first.last+tag@sub.example.org", "a@b"] {
            assert!(is_email(ok), "{} should be accepted", ok);
        }
        for bad in ["plain", "@example.com", "user@", "a..b@example.com", "user@-bad.com", "user@exa mple.com", ".user@example.com"] {
            assert!(!is_email(bad), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_email_empty_string_passes() {
        assert_eq!(PatternCheck::Email.apply(&"".into()), Step::pass());
        assert!(PatternCheck::Email.apply(&"nope".into()).is_failure());
    }
}
