//! Core types shared by all schema kinds.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Runtime payload representation: keys are property names or semantic tags.
pub type ValueMap = Map<String, Value>;

/// Set of semantic tags attached to a schema node.
pub type SemanticTypes = BTreeSet<String>;

/// JSON pointer fragment of the payload root.
pub const ROOT_PATH: &str = "#";

/// Returns the JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Kind of a schema node, as written in the `type` field of a data schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Object,
    Array,
    String,
    Number,
    Integer,
    Boolean,
    Null,
}

impl SchemaType {
    /// Returns the `type` keyword for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::Object => "object",
            SchemaType::Array => "array",
            SchemaType::String => "string",
            SchemaType::Number => "number",
            SchemaType::Integer => "integer",
            SchemaType::Boolean => "boolean",
            SchemaType::Null => "null",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Append a key or index to a JSON pointer fragment.
///
/// Escapes `~` and `/` per RFC 6901.
pub(crate) fn child_path(path: &str, key: &str) -> String {
    let escaped = key.replace('~', "~0").replace('/', "~1");
    format!("{}/{}", path, escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_type_names() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!(1.5)), "number");
        assert_eq!(json_type_name(&json!("x")), "string");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }

    #[test]
    fn schema_type_serializes_lowercase() {
        assert_eq!(serde_json::to_value(SchemaType::Integer).unwrap(), json!("integer"));
        assert_eq!(SchemaType::Object.to_string(), "object");
    }

    #[test]
    fn child_path_escapes_pointer_tokens() {
        assert_eq!(child_path(ROOT_PATH, "unit"), "#/unit");
        assert_eq!(child_path("#/a", "b/c"), "#/a/b~1c");
        assert_eq!(child_path("#", "x~y"), "#/x~0y");
    }
}
