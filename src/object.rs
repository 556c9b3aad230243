//! Object schemas: bidirectional mapping between property names and
//! semantic tags.
//!
//! Incoming payloads are always keyed by property name. [`ObjectSchema::parse_json`]
//! rekeys each property by its schema's first semantic tag (or keeps the
//! property name when the schema has none). [`ObjectSchema::instantiate`]
//! goes the other way, from tag-keyed values back to property names.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ParseError, SchemaError};
use crate::schema::{DataSchema, SchemaBuilder};
use crate::types::{child_path, json_type_name, SemanticTypes, ValueMap, ROOT_PATH};

/// Record-shaped schema: named properties, a subset of which are required.
///
/// Immutable once built. Properties keep their declaration order, which
/// decides "first property wins" lookups and the serialized layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "object")]
pub struct ObjectSchema {
    #[serde(rename = "@type", skip_serializing_if = "SemanticTypes::is_empty")]
    semantic_types: SemanticTypes,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    properties: IndexMap<String, DataSchema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    required: Vec<String>,
    /// Semantic tag -> first property whose schema carries it.
    #[serde(skip)]
    semantic_index: HashMap<String, String>,
}

impl ObjectSchema {
    pub fn builder() -> ObjectSchemaBuilder {
        ObjectSchemaBuilder::default()
    }

    pub fn semantic_types(&self) -> &SemanticTypes {
        &self.semantic_types
    }

    pub fn is_a(&self, tag: &str) -> bool {
        self.semantic_types.contains(tag)
    }

    /// Check a tag-keyed value map against this schema.
    ///
    /// Value-level validation is not implemented: this always reports success.
    pub fn validate(&self, _values: &ValueMap) -> bool {
        true
    }

    /// Parse a JSON object into a value map.
    ///
    /// Each declared property present in the payload is parsed by its own
    /// schema and stored under its first semantic tag, or under the property
    /// name when the schema has no tags. Undeclared payload fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::NotAnObject` if `value` is not an object, or
    /// `ParseError::MissingRequiredProperty` for the first required property
    /// absent from the payload. Errors from property schemas propagate as-is.
    pub fn parse_json(&self, value: &Value) -> Result<ValueMap, ParseError> {
        self.parse_at(value, ROOT_PATH)
    }

    pub(crate) fn parse_at(&self, value: &Value, path: &str) -> Result<ValueMap, ParseError> {
        let Value::Object(payload) = value else {
            return Err(ParseError::NotAnObject {
                path: path.to_string(),
                actual: json_type_name(value),
            });
        };

        let mut data = ValueMap::new();

        for (name, schema) in &self.properties {
            let Some(field) = payload.get(name) else {
                if self.has_required_property(name) {
                    return Err(ParseError::MissingRequiredProperty {
                        path: path.to_string(),
                        name: name.clone(),
                    });
                }
                continue;
            };

            let parsed = schema.parse_at(field, &child_path(path, name))?;

            // Only one tag per property is kept as output key
            let key = match schema.first_semantic_type() {
                Some(tag) => {
                    if schema.semantic_types().len() > 1 {
                        tracing::trace!(
                            property = %name,
                            tag,
                            "property has several semantic types, keying by the first"
                        );
                    }
                    tag.to_string()
                }
                None => name.clone(),
            };
            data.insert(key, parsed);
        }

        Ok(data)
    }

    /// Rekey semantic-tag values by property name.
    ///
    /// Each tag maps to the first property whose schema carries it. Tags no
    /// property carries are dropped. Nested values are copied as-is.
    pub fn instantiate(&self, values: ValueMap) -> ValueMap {
        let mut instance = ValueMap::new();

        for (tag, value) in values {
            match self.semantic_index.get(&tag) {
                Some(name) => {
                    instance.insert(name.clone(), value);
                }
                None => {
                    tracing::trace!(%tag, "no property carries semantic type, dropping value");
                }
            }
        }

        instance
    }

    pub fn property(&self, name: &str) -> Option<&DataSchema> {
        self.properties.get(name)
    }

    /// Name of the first property whose schema carries `tag`.
    pub fn first_property_name_by_semantic_type(&self, tag: &str) -> Option<&str> {
        self.semantic_index.get(tag).map(String::as_str)
    }

    pub fn properties(&self) -> &IndexMap<String, DataSchema> {
        &self.properties
    }

    /// Required property names, in the order they were added (duplicates kept).
    pub fn required_properties(&self) -> &[String] {
        &self.required
    }

    pub fn has_required_property(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

/// Staged construction of an [`ObjectSchema`].
///
/// Consumed by [`build`](ObjectSchemaBuilder::build), which checks that every
/// required name refers to a declared property.
#[derive(Debug, Default)]
pub struct ObjectSchemaBuilder {
    semantic_types: SemanticTypes,
    properties: IndexMap<String, DataSchema>,
    required: Vec<String>,
}

impl ObjectSchemaBuilder {
    /// Declare a property. Declaring the same name again replaces its schema
    /// and keeps its original position.
    pub fn add_property(mut self, name: impl Into<String>, schema: impl Into<DataSchema>) -> Self {
        self.properties.insert(name.into(), schema.into());
        self
    }

    /// Mark properties as required. Duplicates are kept.
    pub fn add_required_properties<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required.extend(names.into_iter().map(Into::into));
        self
    }

    /// Freeze the schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::InvalidSchema` naming the first required
    /// property that was never declared.
    pub fn build(self) -> Result<ObjectSchema, SchemaError> {
        if let Some(name) = self
            .required
            .iter()
            .find(|name| !self.properties.contains_key(name.as_str()))
        {
            tracing::debug!(property = %name, "required property is not declared");
            return Err(SchemaError::InvalidSchema { name: name.clone() });
        }

        let mut semantic_index = HashMap::new();
        for (name, schema) in &self.properties {
            for tag in schema.semantic_types() {
                semantic_index
                    .entry(tag.clone())
                    .or_insert_with(|| name.clone());
            }
        }

        Ok(ObjectSchema {
            semantic_types: self.semantic_types,
            properties: self.properties,
            required: self.required,
            semantic_index,
        })
    }
}

impl SchemaBuilder for ObjectSchemaBuilder {
    fn semantic_types_mut(&mut self) -> &mut SemanticTypes {
        &mut self.semantic_types
    }
}
