//! The closed set of schema kinds and the shared builder contract.

use serde::Serialize;
use serde_json::Value;

use crate::array::ArraySchema;
use crate::error::ParseError;
use crate::object::ObjectSchema;
use crate::primitive::{BooleanSchema, IntegerSchema, NullSchema, NumberSchema, StringSchema};
use crate::types::{SchemaType, SemanticTypes, ROOT_PATH};

/// A schema node of any kind.
///
/// Serializes to the Thing Description data-schema form, with the kind in
/// the `type` field and semantic tags in `@type`. Each concrete schema
/// writes its own `type`, so they serialize the same on their own.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataSchema {
    Object(ObjectSchema),
    Array(ArraySchema),
    String(StringSchema),
    Number(NumberSchema),
    Integer(IntegerSchema),
    Boolean(BooleanSchema),
    Null(NullSchema),
}

impl DataSchema {
    /// Returns the kind of this node.
    pub fn schema_type(&self) -> SchemaType {
        match self {
            DataSchema::Object(_) => SchemaType::Object,
            DataSchema::Array(_) => SchemaType::Array,
            DataSchema::String(_) => SchemaType::String,
            DataSchema::Number(_) => SchemaType::Number,
            DataSchema::Integer(_) => SchemaType::Integer,
            DataSchema::Boolean(_) => SchemaType::Boolean,
            DataSchema::Null(_) => SchemaType::Null,
        }
    }

    /// Semantic tags declared on this node. Empty when none are declared.
    pub fn semantic_types(&self) -> &SemanticTypes {
        match self {
            DataSchema::Object(s) => s.semantic_types(),
            DataSchema::Array(s) => s.semantic_types(),
            DataSchema::String(s) => s.semantic_types(),
            DataSchema::Number(s) => s.semantic_types(),
            DataSchema::Integer(s) => s.semantic_types(),
            DataSchema::Boolean(s) => s.semantic_types(),
            DataSchema::Null(s) => s.semantic_types(),
        }
    }

    /// True if `tag` is one of this node's semantic tags.
    pub fn is_a(&self, tag: &str) -> bool {
        self.semantic_types().contains(tag)
    }

    /// The tag used as output key when this node is an object property.
    pub(crate) fn first_semantic_type(&self) -> Option<&str> {
        self.semantic_types().iter().next().map(String::as_str)
    }

    /// Parse a JSON element into its internal value.
    ///
    /// Object nodes produce a value map keyed by property name or semantic
    /// tag; other nodes produce the element itself after checking its shape.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the element's shape doesn't match this kind,
    /// or an object payload misses a required property.
    pub fn parse_json(&self, value: &Value) -> Result<Value, ParseError> {
        self.parse_at(value, ROOT_PATH)
    }

    pub(crate) fn parse_at(&self, value: &Value, path: &str) -> Result<Value, ParseError> {
        match self {
            DataSchema::Object(s) => s.parse_at(value, path).map(Value::Object),
            DataSchema::Array(s) => s.parse_at(value, path),
            DataSchema::String(s) => s.parse_at(value, path),
            DataSchema::Number(s) => s.parse_at(value, path),
            DataSchema::Integer(s) => s.parse_at(value, path),
            DataSchema::Boolean(s) => s.parse_at(value, path),
            DataSchema::Null(s) => s.parse_at(value, path),
        }
    }
}

impl From<ObjectSchema> for DataSchema {
    fn from(schema: ObjectSchema) -> Self {
        DataSchema::Object(schema)
    }
}

impl From<ArraySchema> for DataSchema {
    fn from(schema: ArraySchema) -> Self {
        DataSchema::Array(schema)
    }
}

impl From<StringSchema> for DataSchema {
    fn from(schema: StringSchema) -> Self {
        DataSchema::String(schema)
    }
}

impl From<NumberSchema> for DataSchema {
    fn from(schema: NumberSchema) -> Self {
        DataSchema::Number(schema)
    }
}

impl From<IntegerSchema> for DataSchema {
    fn from(schema: IntegerSchema) -> Self {
        DataSchema::Integer(schema)
    }
}

impl From<BooleanSchema> for DataSchema {
    fn from(schema: BooleanSchema) -> Self {
        DataSchema::Boolean(schema)
    }
}

impl From<NullSchema> for DataSchema {
    fn from(schema: NullSchema) -> Self {
        DataSchema::Null(schema)
    }
}

/// Builder contract shared by every schema kind.
///
/// Implementors expose their tag set; the chained tag methods come for free.
pub trait SchemaBuilder: Sized {
    #[doc(hidden)]
    fn semantic_types_mut(&mut self) -> &mut SemanticTypes;

    /// Attach a semantic tag. Duplicates collapse.
    fn add_semantic_type(mut self, tag: impl Into<String>) -> Self {
        self.semantic_types_mut().insert(tag.into());
        self
    }

    /// Attach several semantic tags.
    fn add_semantic_types<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.semantic_types_mut()
            .extend(tags.into_iter().map(Into::into));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn is_a_checks_membership() {
        let schema: DataSchema = NumberSchema::builder()
            .add_semantic_type("om:value")
            .add_semantic_types(["saref:Temperature", "om:value"])
            .build()
            .into();

        assert!(schema.is_a("om:value"));
        assert!(schema.is_a("saref:Temperature"));
        assert!(!schema.is_a("qudt:unit"));
        assert_eq!(schema.semantic_types().len(), 2);
    }

    #[test]
    fn semantic_types_empty_when_undeclared() {
        let schema: DataSchema = StringSchema::builder().build().into();
        assert!(schema.semantic_types().is_empty());
        assert_eq!(schema.first_semantic_type(), None);
    }

    #[test]
    fn schema_type_per_variant() {
        let cases: Vec<(DataSchema, SchemaType)> = vec![
            (ObjectSchema::builder().build().unwrap().into(), SchemaType::Object),
            (ArraySchema::builder().build().into(), SchemaType::Array),
            (StringSchema::builder().build().into(), SchemaType::String),
            (NumberSchema::builder().build().into(), SchemaType::Number),
            (IntegerSchema::builder().build().into(), SchemaType::Integer),
            (BooleanSchema::builder().build().into(), SchemaType::Boolean),
            (NullSchema::builder().build().into(), SchemaType::Null),
        ];
        for (schema, expected) in cases {
            assert_eq!(schema.schema_type(), expected);
        }
    }

    #[test]
    fn serializes_type_and_semantic_tags() {
        let schema: DataSchema = StringSchema::builder()
            .add_semantic_type("qudt:unit")
            .build()
            .into();
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({ "type": "string", "@type": ["qudt:unit"] })
        );

        let schema: DataSchema = BooleanSchema::builder().build().into();
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({ "type": "boolean" })
        );
    }

    #[test]
    fn object_rejects_non_object_through_dispatch() {
        let schema: DataSchema = ObjectSchema::builder().build().unwrap().into();
        let err = schema.parse_json(&json!([1, 2])).unwrap_err();
        assert_eq!(
            err,
            ParseError::NotAnObject {
                path: "#".into(),
                actual: "array"
            }
        );
    }
}
