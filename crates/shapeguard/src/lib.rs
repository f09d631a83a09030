//! shapeguard
//!
//! Fluent schema validation and normalization for JSON-like values.
//!
//! ## Features
//!
//! - **Rule pipelines**: each schema is an ordered chain of checks and
//!   transforms; later rules see the value earlier rules produced
//! - **Error accumulation**: every failure is collected, nothing short-circuits
//! - **Templated messages**: `{{#label}}`, `{{#path}}`, `{{#value}}` and rule
//!   arguments such as `{{#limit}}`
//! - **Composite traversal**: arrays and objects validate their elements and
//!   fields, reporting paths like `items[2].name`
//! - **Shareable schemas**: schemas are `Send + Sync` and never store
//!   per-call state
//!
//! ## Architecture
//!
//! 1. **Value** (`value`): the dynamic value tree being validated.
//! 2. **Engine** (`engine/`): rules and the pipeline executor.
//! 3. **Schema** (`schema/`): leaf and composite schemas and their builders.
//! 4. **Template** (`template`): `{{#key}}` message rendering.
//!
//! ## Example
//!
//! ```
//! use shapeguard::prelude::*;
//! use serde_json::json;
//!
//! let schema = object()
//!     .field("name", string().trim().min(2).required())
//!     .field("tags", array().items(string().lowercase()))
//!     .field("port", number().integer().min(1).max(65535).default(8080));
//!
//! let result = schema.validate(json!({"name": " x ", "tags": ["Ok"]}).into());
//!
//! assert_eq!(result.errors.len(), 2);
//! assert_eq!(result.errors[0].path, "name");
//! assert_eq!(result.errors[0].message, "name length must be at least 2 characters long");
//! assert_eq!(result.errors[1].path, "tags[0]");
//! assert_eq!(result.value.get("tags"), Some(&Value::from(vec!["ok"])));
//! ```

pub mod engine;
pub mod error;
pub mod options;
pub mod schema;
pub mod template;
pub mod value;

pub use engine::rules::{Check, Failure, Rule, RuleCategory, Step};
pub use engine::Validated;
pub use error::{Result, SchemaError, ValidationError, ValidationErrors};
pub use options::ValidateOptions;
pub use schema::{
    AnySchema, ArraySchema, BooleanSchema, DateSchema, NumberSchema, ObjectSchema, Schema,
    SchemaBuilder, SchemaRef, StringSchema,
};
pub use value::{Map, Value};

/// Schema accepting any value
pub fn any() -> AnySchema {
    AnySchema::new()
}

/// Schema for strings
pub fn string() -> StringSchema {
    StringSchema::new()
}

/// Schema for numbers
pub fn number() -> NumberSchema {
    NumberSchema::new()
}

/// Schema for booleans
pub fn boolean() -> BooleanSchema {
    BooleanSchema::new()
}

/// Schema for dates
pub fn date() -> DateSchema {
    DateSchema::new()
}

/// Schema for arrays
pub fn array() -> ArraySchema {
    ArraySchema::new()
}

/// Schema for objects
pub fn object() -> ObjectSchema {
    ObjectSchema::new()
}

/// Everything needed to build and run schemas
pub mod prelude {
    pub use crate::{any, array, boolean, date, number, object, string};
    pub use crate::{Schema, SchemaBuilder, SchemaRef, Validated, ValidationError, Value};
}
