//! Array schemas.

use serde::Serialize;
use serde_json::Value;

use crate::error::ParseError;
use crate::schema::{DataSchema, SchemaBuilder};
use crate::types::{child_path, json_type_name, SchemaType, SemanticTypes, ROOT_PATH};

/// Schema for JSON arrays.
///
/// `items` holds either a single schema applied to every element, or a tuple
/// of schemas applied positionally. Semantic tags on item schemas are never
/// used as keys.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename = "array")]
pub struct ArraySchema {
    #[serde(rename = "@type", skip_serializing_if = "SemanticTypes::is_empty")]
    semantic_types: SemanticTypes,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    items: Vec<DataSchema>,
    #[serde(rename = "minItems", skip_serializing_if = "Option::is_none")]
    min_items: Option<usize>,
    #[serde(rename = "maxItems", skip_serializing_if = "Option::is_none")]
    max_items: Option<usize>,
}

impl ArraySchema {
    pub fn builder() -> ArraySchemaBuilder {
        ArraySchemaBuilder::default()
    }

    pub fn semantic_types(&self) -> &SemanticTypes {
        &self.semantic_types
    }

    pub fn is_a(&self, tag: &str) -> bool {
        self.semantic_types.contains(tag)
    }

    pub fn items(&self) -> &[DataSchema] {
        &self.items
    }

    pub fn min_items(&self) -> Option<usize> {
        self.min_items
    }

    pub fn max_items(&self) -> Option<usize> {
        self.max_items
    }

    /// Parse a JSON array, parsing each element with its item schema.
    ///
    /// Elements without an item schema (no `items`, or past the end of a
    /// tuple) are kept unchanged. Length bounds are not checked.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::SchemaMismatch` if the element is not an array,
    /// or the first error raised by an item schema.
    pub fn parse_json(&self, value: &Value) -> Result<Value, ParseError> {
        self.parse_at(value, ROOT_PATH)
    }

    pub(crate) fn parse_at(&self, value: &Value, path: &str) -> Result<Value, ParseError> {
        let Value::Array(elements) = value else {
            return Err(ParseError::SchemaMismatch {
                path: path.to_string(),
                expected: SchemaType::Array,
                actual: json_type_name(value),
            });
        };

        let mut parsed = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            match self.item_schema(index) {
                Some(schema) => {
                    let element_path = child_path(path, &index.to_string());
                    parsed.push(schema.parse_at(element, &element_path)?);
                }
                None => parsed.push(element.clone()),
            }
        }

        Ok(Value::Array(parsed))
    }

    fn item_schema(&self, index: usize) -> Option<&DataSchema> {
        match self.items.as_slice() {
            [single] => Some(single),
            tuple => tuple.get(index),
        }
    }
}

#[derive(Debug, Default)]
pub struct ArraySchemaBuilder {
    semantic_types: SemanticTypes,
    items: Vec<DataSchema>,
    min_items: Option<usize>,
    max_items: Option<usize>,
}

impl ArraySchemaBuilder {
    /// Append an item schema. One item applies to all elements; several form a tuple.
    pub fn add_item(mut self, schema: impl Into<DataSchema>) -> Self {
        self.items.push(schema.into());
        self
    }

    pub fn min_items(mut self, min_items: usize) -> Self {
        self.min_items = Some(min_items);
        self
    }

    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    pub fn build(self) -> ArraySchema {
        ArraySchema {
            semantic_types: self.semantic_types,
            items: self.items,
            min_items: self.min_items,
            max_items: self.max_items,
        }
    }
}

impl SchemaBuilder for ArraySchemaBuilder {
    fn semantic_types_mut(&mut self) -> &mut SemanticTypes {
        &mut self.semantic_types
    }
}
