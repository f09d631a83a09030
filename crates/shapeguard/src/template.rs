//! Error message templates
//!
//! Templates reference context entries with `{{#key}}` placeholders, e.g.
//! `"{{#label}} must be at least {{#limit}}"`.

use crate::value::Map;

const OPEN: &str = "{{#";
const CLOSE: &str = "}}";

/// Render a template against a context.
///
/// Every placeholder whose key is present in `context` is replaced by the
/// display form of its value. Unknown placeholders are kept verbatim. The
/// template is scanned once, so substituted text is never expanded again.
pub fn render(template: &str, context: &Map) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        let Some(end) = after_open.find(CLOSE) else {
            // Unterminated placeholder
            out.push_str(&rest[start..]);
            return out;
        };

        let key = &after_open[..end];
        if let Some(inner) = key.rfind(OPEN) {
            // Stray opener; the innermost one starts the real placeholder
            out.push_str(&rest[start..start + OPEN.len() + inner]);
            rest = &after_open[inner..];
            continue;
        }

        match context.get(key) {
            Some(value) => out.push_str(&value.to_string()),
            None => out.push_str(&rest[start..start + OPEN.len() + end + CLOSE.len()]),
        }
        rest = &after_open[end + CLOSE.len()..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn context(pairs: &[(&str, Value)]) -> Map {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_render_substitutes_known_keys() {
        let ctx = context(&[("label", "name".into()), ("limit", Value::Int(3))]);
        assert_eq!(
            render("{{#label}} length must be at least {{#limit}} characters long", &ctx),
            "name length must be at least 3 characters long"
        );
    }

    #[test]
    fn test_render_keeps_unknown_placeholders() {
        let ctx = context(&[("label", "name".into())]);
        assert_eq!(render("{{#label}} vs {{#other}}", &ctx), "name vs {{#other}}");
    }

    #[test]
    fn test_render_does_not_expand_substituted_text() {
        let ctx = context(&[("value", "{{#label}}".into()), ("label", "name".into())]);
        assert_eq!(render("got {{#value}}", &ctx), "got {{#label}}");
    }

    #[test]
    fn test_render_repeated_and_adjacent_placeholders() {
        let ctx = context(&[("a", "x".into()), ("b", Value::Int(1))]);
        assert_eq!(render("{{#a}}{{#b}}{{#a}}", &ctx), "x1x");
    }

    #[test]
    fn test_render_unterminated_placeholder() {
        let ctx = context(&[("label", "name".into())]);
        assert_eq!(render("{{#label}} and {{#label", &ctx), "name and {{#label");
    }

    #[test]
    fn test_render_stray_opener_before_placeholder() {
        let ctx = context(&[("label", "name".into())]);
        assert_eq!(render("{{#oops {{#label}} is bad", &ctx), "{{#oops name is bad");
        assert_eq!(render("{{#{{#{{#label}}", &ctx), "{{#{{#name");
        assert_eq!(render("{{#a {{#missing}} {{#label}}", &ctx), "{{#a {{#missing}} name");
    }

    #[test]
    fn test_render_without_placeholders() {
        assert_eq!(render("plain text", &Map::new()), "plain text");
        assert_eq!(render("", &Map::new()), "");
    }
}
