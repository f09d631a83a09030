//! Integration tests for shapeguard
//!
//! Exercises whole schemas through the public API:
//! - Defaults, presence and membership
//! - Array and object traversal with error paths
//! - Transform-then-check pipelines
//! - Sharing one schema across threads

use serde_json::json;
use shapeguard::prelude::*;
use shapeguard::{Rule, Step, ValidateOptions};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Install a test subscriber once; `RUST_LOG=shapeguard=trace` shows rule failures
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Helper to build a value from JSON
fn v(json: serde_json::Value) -> Value {
    json.into()
}

/// Helper to create a signup form schema
fn signup_schema() -> impl Schema {
    object()
        .field("email", string().trim().lowercase().email().required())
        .field("password", string().min(8).required())
        .field("age", number().integer().min(13))
        .field("newsletter", boolean().truthy(["yes"]).falsy(["no"]).default(false))
        .field("roles", array().items(string().valid(["admin", "member"])).max(3))
}

#[test]
fn test_default_satisfies_later_required() {
    init_tracing();

    for schema in [
        Box::new(any().default("x").required()) as Box<dyn Schema>,
        Box::new(string().default("x").required()),
        Box::new(number().default(1).required()),
        Box::new(boolean().default(true).required()),
        Box::new(array().default(vec![1]).required()),
    ] {
        let result = schema.validate(Value::Null);
        assert!(result.is_valid(), "{:?}", result.errors);
        assert!(!result.value.is_null());
    }
}

#[test]
fn test_valid_accepts_exactly_members() {
    let schema = any().valid([v(json!("a")), v(json!({"k": [1]}))]);

    assert!(schema.validate(v(json!("a"))).is_valid());
    assert!(schema.validate(v(json!({"k": [1]}))).is_valid());
    assert!(schema.validate(Value::Null).is_valid());
    assert!(!schema.validate(v(json!("b"))).is_valid());
    assert!(!schema.validate(v(json!({"k": [1, 2]}))).is_valid());
}

#[test]
fn test_invalid_rejects_exactly_members() {
    let schema = any().invalid(["x", "y"]);

    assert!(!schema.validate("x".into()).is_valid());
    assert!(!schema.validate("y".into()).is_valid());
    assert!(schema.validate("z".into()).is_valid());
    assert!(schema.validate(Value::Null).is_valid());
}

#[test]
fn test_array_reports_only_failing_item() {
    let schema = array().min(2).items(string().min(1));
    let result = schema.validate_with(v(json!(["ok", ""])), &ValidateOptions::new().with_path("field"));

    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path, "field[1]");
    assert_eq!(result.value, v(json!(["ok", ""])));
}

#[test]
fn test_object_rejects_unknown_keys() {
    let schema = object().field("a", any());
    let result = schema.validate_at(v(json!({"a": 1, "x": 2})), "field");

    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path, "field.x");
    assert!(result.errors[0].message.contains("unknown key"));
    assert_eq!(result.value, v(json!({"a": 1})));
}

#[test]
fn test_object_passes_unknown_keys_through() {
    let schema = object().field("a", any()).unknown(true);
    let result = schema.validate_at(v(json!({"a": 1, "x": 2})), "field");

    assert!(result.is_valid());
    assert_eq!(result.value, v(json!({"a": 1, "x": 2})));
}

#[test]
fn test_trim_then_min_reports_on_trimmed_value() {
    let result = string()
        .trim()
        .min(3)
        .message("{{#label}} got '{{#value}}', length must be at least {{#limit}}")
        .validate("  ab  ".into());

    assert_eq!(result.value, Value::from("ab"));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "value got 'ab', length must be at least 3");
}

#[test]
fn test_integer_scenarios() {
    let result = number().integer().validate(Value::Float(10.5));
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].message.contains("must be an integer"));
    assert_eq!(result.value, Value::Float(10.5));

    let result = number().integer().validate(Value::Float(10.0));
    assert!(result.is_valid());
    assert!(matches!(result.value, Value::Int(10)));
}

#[test]
fn test_revalidating_output_is_stable() {
    init_tracing();

    let schema = signup_schema();
    let input = v(json!({
        "email": "  Dev@Example.com ",
        "password": "hunter22",
        "age": 30.0,
        "newsletter": "yes",
        "roles": ["admin"]
    }));

    let first = schema.validate(input);
    let second = schema.validate(first.value.clone());

    assert!(second.is_valid(), "{:?}", second.errors);
    assert_eq!(second.value, first.value);
    assert_eq!(second.value.get("email"), Some(&Value::from("dev@example.com")));
    assert!(matches!(second.value.get("age"), Some(Value::Int(30))));
    assert_eq!(second.value.get("newsletter"), Some(&Value::Bool(true)));
}

#[test]
fn test_signup_collects_every_error() {
    init_tracing();

    let result = signup_schema().validate_at(
        v(json!({
            "email": "not-an-email",
            "age": 12.5,
            "roles": ["admin", "root", "guest", "member"],
            "referrer": "ad"
        })),
        "body",
    );

    let found: Vec<(&str, &str)> = result
        .errors
        .iter()
        .map(|e| (e.path.as_str(), e.code.as_str()))
        .collect();

    assert_eq!(
        found,
        vec![
            ("body.email", "string.email"),
            ("body.password", "any.required"),
            ("body.age", "number.integer"),
            ("body.age", "number.min"),
            ("body.roles", "array.max"),
            ("body.roles[1]", "any.valid"),
            ("body.roles[2]", "any.valid"),
            ("body.referrer", "object.unknown"),
        ]
    );
    assert_eq!(
        result.errors[5].message,
        "body.roles[1] must be one of [admin, member]"
    );

    let err = result.into_result().unwrap_err();
    assert_eq!(err.len(), 8);
    assert!(err.to_string().starts_with("validation error at \"body.email\""));
}

#[test]
fn test_missing_optional_fields_stay_missing() {
    let result = signup_schema().validate(v(json!({
        "email": "a@b.co",
        "password": "longenough"
    })));

    assert!(result.is_valid(), "{:?}", result.errors);
    assert_eq!(result.value, v(json!({"email": "a@b.co", "password": "longenough"})));
}

#[test]
fn test_date_in_object() {
    let schema = object().field("at", date().required());
    let result = schema.validate(v(json!({"at": 0})));

    assert!(result.is_valid());
    assert_eq!(result.value.get("at").map(ToString::to_string), Some("1970-01-01T00:00:00Z".to_string()));
}

#[test]
fn test_custom_rule_extension() {
    let slug = Rule::from_fn("string.slug", |_, value| match value.as_str() {
        Some(s) => Step::replace(s.trim().to_lowercase().replace(' ', "-")),
        None => Step::pass(),
    });

    let schema = string().rule(slug).max(10).message("{{#label}} slug too long");
    let result = schema.validate_at("Hello Big World".into(), "title");

    assert_eq!(result.value, Value::from("hello-big-world"));
    assert_eq!(result.errors[0].message, "title slug too long");
}

#[test]
fn test_custom_predicate_sees_path() {
    let schema = object().field(
        "items",
        array().items(number().custom(|path, value| match value.as_f64() {
            Some(n) if n > 100.0 => Err(format!("{} exceeds budget", path)),
            _ => Ok(()),
        })),
    );

    let result = schema.validate(v(json!({"items": [5, 500]})));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].message,
        "items[1] failed custom validation because items[1] exceeds budget"
    );
}

#[test]
fn test_shared_child_schema() {
    let address: SchemaRef = Arc::new(
        object()
            .field("city", string().required())
            .field("zip", string().length(5)),
    );

    let schema = object()
        .field("home", address.clone())
        .field("work", address);

    let result = schema.validate(v(json!({
        "home": {"city": "Paris", "zip": "75001"},
        "work": {"zip": "123"}
    })));

    let paths: Vec<_> = result.errors.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, vec!["work.city", "work.zip"]);
}

#[test]
fn test_concurrent_validation_with_distinct_paths() {
    let schema = object()
        .field("id", number().integer().positive().required())
        .field("name", string().trim().min(1));

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let schema = &schema;
                scope.spawn(move || {
                    let path = format!("batch[{}]", i);
                    let input = v(json!({"id": -i, "name": "  "}));
                    (path.clone(), schema.validate_at(input, &path))
                })
            })
            .collect();

        for handle in handles {
            let (path, result) = handle.join().unwrap();
            assert!(result.errors.iter().all(|e| e.path.starts_with(&path)));
            assert!(result
                .errors
                .iter()
                .any(|e| e.path == format!("{}.name", path)));
        }
    });
}

#[test]
fn test_options_from_yaml() {
    let options: ValidateOptions = serde_yaml::from_str("path: \"pod.containers[0]\"\n").unwrap();
    let result = object()
        .field("image", string().required())
        .validate_with(v(json!({})), &options);

    assert_eq!(result.errors[0].path, "pod.containers[0].image");
    assert_eq!(result.errors[0].message, "pod.containers[0].image is required");
}

#[test]
fn test_errors_serialize() {
    let result = string().min(5).validate_at("abc".into(), "name");
    let json = serde_json::to_value(&result.errors).unwrap();

    assert_eq!(
        json,
        json!([{
            "code": "string.min",
            "path": "name",
            "message": "name length must be at least 5 characters long"
        }])
    );
}
