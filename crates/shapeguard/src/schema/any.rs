//! Schema accepting any value

use super::{impl_schema_builder, Schema, SchemaBase};
use crate::engine::Validated;
use crate::value::Value;

/// Schema with no type rule; only the common operations apply
#[derive(Debug, Clone)]
pub struct AnySchema {
    base: SchemaBase,
}

impl AnySchema {
    pub fn new() -> Self {
        Self {
            base: SchemaBase::new(),
        }
    }
}

impl_schema_builder!(AnySchema);

impl Schema for AnySchema {
    fn validate_at(&self, value: Value, path: &str) -> Validated {
        self.base.run(value, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaBuilder;
    use serde_json::json;

    #[test]
    fn test_accepts_every_kind() {
        let schema = AnySchema::new();
        for value in [json!(null), json!(1), json!("a"), json!([1]), json!({"a": 1})] {
            let result = schema.validate(value.clone().into());
            assert!(result.is_valid());
            assert_eq!(result.value, Value::from(value));
        }
    }

    #[test]
    fn test_required_with_default() {
        let schema = AnySchema::new().default("fallback").required();
        let result = schema.validate(Value::Null);
        assert!(result.is_valid());
        assert_eq!(result.value, Value::from("fallback"));
    }

    #[test]
    fn test_required_message_uses_label() {
        let result = AnySchema::new().required().validate_at(Value::Null, "user.id");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].message, "user.id is required");
        assert_eq!(result.errors[0].code, "any.required");

        let result = AnySchema::new().label("User ID").required().validate_at(Value::Null, "user.id");
        assert_eq!(result.errors[0].message, "User ID is required");
        assert_eq!(result.errors[0].path, "user.id");
    }

    #[test]
    fn test_valid_and_invalid() {
        let schema = AnySchema::new().valid(["red", "green"]);
        assert!(schema.validate("red".into()).is_valid());
        assert!(schema.validate(Value::Null).is_valid());

        let result = schema.validate("blue".into());
        assert_eq!(result.errors[0].message, "value must be one of [red, green]");

        let schema = AnySchema::new().invalid([0, 1]);
        let result = schema.validate(Value::Float(1.0));
        assert_eq!(result.errors[0].message, "value contains an invalid value");
        assert!(schema.validate(Value::Int(2)).is_valid());
    }

    #[test]
    fn test_custom() {
        let schema = AnySchema::new().custom(|_, value| match value {
            Value::Int(n) if n % 2 == 1 => Err("it is odd".to_string()),
            _ => Ok(()),
        });

        assert!(schema.validate(Value::Int(2)).is_valid());
        let result = schema.validate(Value::Int(3));
        assert_eq!(
            result.errors[0].message,
            "value failed custom validation because it is odd"
        );
        assert!(AnySchema::new().custom_opt(None).validate(Value::Int(3)).is_valid());
    }

    #[test]
    fn test_message_override() {
        let result = AnySchema::new()
            .required()
            .message("{{#label}} is mandatory")
            .validate_at(Value::Null, "name");
        assert_eq!(result.errors[0].message, "name is mandatory");
    }
}
