//! Integration tests for rebuilding payloads from semantic values.

use serde_json::{json, Value};
use td_schema::{
    BooleanSchema, IntegerSchema, NumberSchema, ObjectSchema, SchemaBuilder, StringSchema,
    ValueMap,
};

fn map(value: Value) -> ValueMap {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}

/// Every property carries exactly one tag; tags are unique.
fn lamp() -> ObjectSchema {
    ObjectSchema::builder()
        .add_property(
            "on",
            BooleanSchema::builder().add_semantic_type("saref:OnOffState").build(),
        )
        .add_property(
            "brightness",
            IntegerSchema::builder()
                .add_semantic_type("saref:LightingLevel")
                .minimum(0)
                .maximum(100)
                .build(),
        )
        .add_property(
            "color",
            StringSchema::builder().add_semantic_type("ex:Color").build(),
        )
        .add_required_properties(["on"])
        .build()
        .unwrap()
}

mod instantiate {
    use super::*;

    #[test]
    fn tag_to_property_name() {
        let schema = ObjectSchema::builder()
            .add_property(
                "value",
                NumberSchema::builder().add_semantic_type("om:value").build(),
            )
            .build()
            .unwrap();

        let result = schema.instantiate(map(json!({ "om:value": 5 })));
        assert_eq!(result, map(json!({ "value": 5 })));
    }

    #[test]
    fn unmatched_tags_dropped() {
        let result = lamp().instantiate(map(json!({
            "saref:OnOffState": true,
            "ex:Unknown": 1,
            "on": false
        })));
        assert_eq!(result, map(json!({ "on": true })));
    }

    #[test]
    fn empty_input() {
        assert!(lamp().instantiate(ValueMap::new()).is_empty());
    }

    #[test]
    fn nested_values_copied_as_is() {
        let schema = ObjectSchema::builder()
            .add_property(
                "config",
                ObjectSchema::builder()
                    .add_semantic_type("ex:Config")
                    .add_property("mode", StringSchema::builder().build())
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        // Nested maps are not re-keyed
        let result = schema.instantiate(map(json!({
            "ex:Config": { "ex:Mode": "eco" }
        })));
        assert_eq!(result, map(json!({ "config": { "ex:Mode": "eco" } })));
    }

    #[test]
    fn values_are_not_validated() {
        let result = lamp().instantiate(map(json!({ "saref:LightingLevel": "very" })));
        assert_eq!(result, map(json!({ "brightness": "very" })));
        assert!(lamp().validate(&result));
    }
}

mod round_trip {
    use super::*;

    #[test]
    fn parse_then_instantiate_restores_payload() {
        let schema = lamp();
        let payload = json!({ "on": true, "brightness": 80, "color": "warm" });

        let values = schema.parse_json(&payload).unwrap();
        assert_eq!(
            values,
            map(json!({
                "saref:OnOffState": true,
                "saref:LightingLevel": 80,
                "ex:Color": "warm"
            }))
        );

        let restored = schema.instantiate(values);
        assert_eq!(Value::Object(restored), payload);
    }

    #[test]
    fn partial_payload_round_trips() {
        let schema = lamp();
        let payload = json!({ "on": false });

        let restored = schema.instantiate(schema.parse_json(&payload).unwrap());
        assert_eq!(Value::Object(restored), payload);
    }

    #[test]
    fn undeclared_fields_do_not_survive() {
        let schema = lamp();
        let payload = json!({ "on": true, "extra": 1 });

        let restored = schema.instantiate(schema.parse_json(&payload).unwrap());
        assert_eq!(restored, map(json!({ "on": true })));
    }
}
