//! Leaf schema kinds: string, number, integer, boolean and null.
//!
//! Leaves only check the JSON shape of an element. Bounds on numbers are
//! carried as metadata and are not enforced.

use serde::Serialize;
use serde_json::Value;

use crate::error::ParseError;
use crate::schema::SchemaBuilder;
use crate::types::{json_type_name, SchemaType, SemanticTypes, ROOT_PATH};

/// Tag accessors, `parse_json` and the builder contract shared by every leaf.
///
/// The schema needs a `semantic_types` field and a `parse_at` method; the
/// builder needs a `semantic_types` field.
macro_rules! impl_leaf_schema {
    ($ty:ident, $builder:ident) => {
        impl $ty {
            pub fn builder() -> $builder {
                $builder::default()
            }

            pub fn semantic_types(&self) -> &SemanticTypes {
                &self.semantic_types
            }

            pub fn is_a(&self, tag: &str) -> bool {
                self.semantic_types.contains(tag)
            }

            /// Parse a JSON element of this kind.
            ///
            /// # Errors
            ///
            /// Returns `ParseError::SchemaMismatch` for any other JSON kind.
            pub fn parse_json(&self, value: &Value) -> Result<Value, ParseError> {
                self.parse_at(value, ROOT_PATH)
            }
        }

        impl SchemaBuilder for $builder {
            fn semantic_types_mut(&mut self) -> &mut SemanticTypes {
                &mut self.semantic_types
            }
        }
    };
}

fn mismatch(path: &str, expected: SchemaType, value: &Value) -> ParseError {
    ParseError::SchemaMismatch {
        path: path.to_string(),
        expected,
        actual: json_type_name(value),
    }
}

/// Schema for JSON strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "type", rename = "string")]
pub struct StringSchema {
    #[serde(rename = "@type", skip_serializing_if = "SemanticTypes::is_empty")]
    semantic_types: SemanticTypes,
}

impl_leaf_schema!(StringSchema, StringSchemaBuilder);

impl StringSchema {
    pub(crate) fn parse_at(&self, value: &Value, path: &str) -> Result<Value, ParseError> {
        match value {
            Value::String(_) => Ok(value.clone()),
            other => Err(mismatch(path, SchemaType::String, other)),
        }
    }
}

#[derive(Debug, Default)]
pub struct StringSchemaBuilder {
    semantic_types: SemanticTypes,
}

impl StringSchemaBuilder {
    pub fn build(self) -> StringSchema {
        StringSchema {
            semantic_types: self.semantic_types,
        }
    }
}

/// Schema for any JSON number. Bounds are not checked.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename = "number")]
pub struct NumberSchema {
    #[serde(rename = "@type", skip_serializing_if = "SemanticTypes::is_empty")]
    semantic_types: SemanticTypes,
    #[serde(skip_serializing_if = "Option::is_none")]
    minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    maximum: Option<f64>,
}

impl_leaf_schema!(NumberSchema, NumberSchemaBuilder);

impl NumberSchema {
    pub fn minimum(&self) -> Option<f64> {
        self.minimum
    }

    pub fn maximum(&self) -> Option<f64> {
        self.maximum
    }

    pub(crate) fn parse_at(&self, value: &Value, path: &str) -> Result<Value, ParseError> {
        match value {
            Value::Number(_) => Ok(value.clone()),
            other => Err(mismatch(path, SchemaType::Number, other)),
        }
    }
}

#[derive(Debug, Default)]
pub struct NumberSchemaBuilder {
    semantic_types: SemanticTypes,
    minimum: Option<f64>,
    maximum: Option<f64>,
}

impl NumberSchemaBuilder {
    pub fn minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn maximum(mut self, maximum: f64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    pub fn build(self) -> NumberSchema {
        NumberSchema {
            semantic_types: self.semantic_types,
            minimum: self.minimum,
            maximum: self.maximum,
        }
    }
}

/// Schema for JSON numbers that are `i64` or `u64`.
///
/// Floating-point numbers are rejected even without fractional digits
/// (`3.0`), since they don't round-trip as integers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "type", rename = "integer")]
pub struct IntegerSchema {
    #[serde(rename = "@type", skip_serializing_if = "SemanticTypes::is_empty")]
    semantic_types: SemanticTypes,
    #[serde(skip_serializing_if = "Option::is_none")]
    minimum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    maximum: Option<i64>,
}

impl_leaf_schema!(IntegerSchema, IntegerSchemaBuilder);

impl IntegerSchema {
    pub fn minimum(&self) -> Option<i64> {
        self.minimum
    }

    pub fn maximum(&self) -> Option<i64> {
        self.maximum
    }

    pub(crate) fn parse_at(&self, value: &Value, path: &str) -> Result<Value, ParseError> {
        match value {
            Value::Number(n) if n.is_i64() || n.is_u64() => Ok(value.clone()),
            other => Err(mismatch(path, SchemaType::Integer, other)),
        }
    }
}

#[derive(Debug, Default)]
pub struct IntegerSchemaBuilder {
    semantic_types: SemanticTypes,
    minimum: Option<i64>,
    maximum: Option<i64>,
}

impl IntegerSchemaBuilder {
    pub fn minimum(mut self, minimum: i64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn maximum(mut self, maximum: i64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    pub fn build(self) -> IntegerSchema {
        IntegerSchema {
            semantic_types: self.semantic_types,
            minimum: self.minimum,
            maximum: self.maximum,
        }
    }
}

/// Schema for JSON booleans.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "type", rename = "boolean")]
pub struct BooleanSchema {
    #[serde(rename = "@type", skip_serializing_if = "SemanticTypes::is_empty")]
    semantic_types: SemanticTypes,
}

impl_leaf_schema!(BooleanSchema, BooleanSchemaBuilder);

impl BooleanSchema {
    pub(crate) fn parse_at(&self, value: &Value, path: &str) -> Result<Value, ParseError> {
        match value {
            Value::Bool(_) => Ok(value.clone()),
            other => Err(mismatch(path, SchemaType::Boolean, other)),
        }
    }
}

#[derive(Debug, Default)]
pub struct BooleanSchemaBuilder {
    semantic_types: SemanticTypes,
}

impl BooleanSchemaBuilder {
    pub fn build(self) -> BooleanSchema {
        BooleanSchema {
            semantic_types: self.semantic_types,
        }
    }
}

/// Schema for JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "type", rename = "null")]
pub struct NullSchema {
    #[serde(rename = "@type", skip_serializing_if = "SemanticTypes::is_empty")]
    semantic_types: SemanticTypes,
}

impl_leaf_schema!(NullSchema, NullSchemaBuilder);

impl NullSchema {
    pub(crate) fn parse_at(&self, value: &Value, path: &str) -> Result<Value, ParseError> {
        match value {
            Value::Null => Ok(Value::Null),
            other => Err(mismatch(path, SchemaType::Null, other)),
        }
    }
}

#[derive(Debug, Default)]
pub struct NullSchemaBuilder {
    semantic_types: SemanticTypes,
}

impl NullSchemaBuilder {
    pub fn build(self) -> NullSchema {
        NullSchema {
            semantic_types: self.semantic_types,
        }
    }
}
