//! Thing Description data schemas
//!
//! Describes the payloads a Thing accepts and produces, and converts between
//! two keyings of the same data:
//!
//! - JSON payloads, keyed by property name;
//! - value maps keyed by semantic tag, where a property schema declares one.
//!
//! # Example
//!
//! ```
//! use td_schema::{NumberSchema, ObjectSchema, SchemaBuilder, StringSchema};
//! use serde_json::json;
//!
//! let schema = ObjectSchema::builder()
//!     .add_property(
//!         "value",
//!         NumberSchema::builder().add_semantic_type("om:value").build(),
//!     )
//!     .add_property("label", StringSchema::builder().build())
//!     .add_required_properties(["value"])
//!     .build()
//!     .unwrap();
//!
//! // Tagged properties are keyed by their tag, untagged ones by name
//! let values = schema.parse_json(&json!({ "value": 5, "label": "x" })).unwrap();
//! assert_eq!(values["om:value"], json!(5));
//! assert_eq!(values["label"], json!("x"));
//!
//! // And back again: only tagged values can be placed
//! let payload = schema.instantiate(values);
//! assert_eq!(serde_json::Value::Object(payload), json!({ "value": 5 }));
//! ```
//!
//! # Lookup Rules
//!
//! | Direction | Key in | Key out |
//! |-----------|--------|---------|
//! | `parse_json` | property name | first semantic tag, or property name |
//! | `instantiate` | semantic tag | first property carrying the tag (unmatched tags dropped) |
//!
//! "First" property means first declared. Tags are kept sorted, so a
//! property's first tag is the smallest one.

mod array;
mod error;
mod object;
mod primitive;
mod schema;
mod types;

pub use array::{ArraySchema, ArraySchemaBuilder};
pub use error::{ParseError, SchemaError};
pub use object::{ObjectSchema, ObjectSchemaBuilder};
pub use primitive::{
    BooleanSchema, BooleanSchemaBuilder, IntegerSchema, IntegerSchemaBuilder, NullSchema,
    NullSchemaBuilder, NumberSchema, NumberSchemaBuilder, StringSchema, StringSchemaBuilder,
};
pub use schema::{DataSchema, SchemaBuilder};
pub use types::{json_type_name, SchemaType, SemanticTypes, ValueMap, ROOT_PATH};
