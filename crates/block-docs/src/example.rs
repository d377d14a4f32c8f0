//! Example synthesis
//!
//! Builds a representative JSON value for a list of property records.
//! Named types resolve through the [`ReferenceTable`]; enums and
//! string-literal unions always use their first member, primitives use the
//! configured placeholder values.

use crate::config::PlaceholderValues;
use crate::property::{PropertyRecord, TYPE_ARRAY, TYPE_OBJECT};
use crate::reference::{Reference, ReferenceTable};
use serde_json::{Map, Value};

/// Synthesizes example payloads from flattened properties
pub struct ExampleSynthesizer<'a> {
    table: &'a ReferenceTable,
    placeholders: &'a PlaceholderValues,
}

impl<'a> ExampleSynthesizer<'a> {
    /// Create a synthesizer over a populated reference table
    pub fn new(table: &'a ReferenceTable, placeholders: &'a PlaceholderValues) -> Self {
        Self {
            table,
            placeholders,
        }
    }

    /// Build one example object, keys in property order
    pub fn synthesize(&self, properties: &[PropertyRecord]) -> Map<String, Value> {
        let mut active = Vec::new();
        self.synthesize_object(properties, &mut active)
    }

    fn synthesize_object<'p>(
        &'p self,
        properties: &'p [PropertyRecord],
        active: &mut Vec<&'p str>,
    ) -> Map<String, Value> {
        let mut base = Map::new();
        for property in properties {
            let value = self.synthesize_value(property, active);
            base.insert(property.name.clone(), value);
        }
        base
    }

    fn synthesize_value<'p>(
        &'p self,
        property: &'p PropertyRecord,
        active: &mut Vec<&'p str>,
    ) -> Value {
        match self.table.lookup(&property.ty) {
            Some(Reference::Object(reference)) => {
                // Re-entering an object already on the stack would never end
                if active.contains(&reference.name.as_str()) {
                    return Value::Object(Map::new());
                }
                active.push(&reference.name);
                let nested = self.synthesize_object(&reference.properties, active);
                active.pop();
                Value::Object(nested)
            }
            Some(Reference::Enum(reference)) => reference
                .properties
                .first()
                .map(|member| member.value.clone())
                .unwrap_or(Value::Null),
            Some(Reference::StringLiteral(reference)) => reference
                .properties
                .first()
                .map(|member| Value::String(member.value.clone()))
                .unwrap_or(Value::Null),
            None => self.synthesize_structural(property, active),
        }
    }

    fn synthesize_structural<'p>(
        &'p self,
        property: &'p PropertyRecord,
        active: &mut Vec<&'p str>,
    ) -> Value {
        match property.ty.as_str() {
            "string" => {
                if property.placeholder.is_empty() {
                    Value::String(self.placeholders.string.clone())
                } else {
                    Value::String(property.placeholder.clone())
                }
            }
            "boolean" => Value::Bool(self.placeholders.boolean),
            "number" => Value::Number(self.placeholders.number.clone()),
            TYPE_OBJECT => Value::Object(self.synthesize_object(&property.properties, active)),
            TYPE_ARRAY => Value::Array(vec![Value::Object(
                self.synthesize_object(&property.properties, active),
            )]),
            other => Value::String(format!("TODO: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::mock_record;
    use crate::types::RawEnumMember;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn synthesize(table: &ReferenceTable, properties: &[PropertyRecord]) -> Value {
        let placeholders = PlaceholderValues::default();
        Value::Object(ExampleSynthesizer::new(table, &placeholders).synthesize(properties))
    }

    #[test]
    fn test_primitives_use_placeholder_defaults() {
        let table = ReferenceTable::new();
        let mut title = mock_record("title", "string");
        title.placeholder = "Hello".to_string();
        let properties = vec![
            title,
            mock_record("subtitle", "string"),
            mock_record("visible", "boolean"),
            mock_record("count", "number"),
        ];

        assert_eq!(
            synthesize(&table, &properties),
            json!({
                "title": "Hello",
                "subtitle": "Lorem ipsum dolor sit amet",
                "visible": true,
                "count": 1
            })
        );
    }

    #[test]
    fn test_configured_placeholders() {
        let table = ReferenceTable::new();
        let placeholders = PlaceholderValues {
            string: "text".to_string(),
            boolean: false,
            number: 42.into(),
        };
        let properties = vec![
            mock_record("a", "string"),
            mock_record("b", "boolean"),
            mock_record("c", "number"),
        ];
        let example = ExampleSynthesizer::new(&table, &placeholders).synthesize(&properties);

        assert_eq!(Value::Object(example), json!({"a": "text", "b": false, "c": 42}));
    }

    #[test]
    fn test_enum_and_union_pick_first_member() {
        let mut table = ReferenceTable::new();
        table.register_enum(
            "Theme",
            &[RawEnumMember::new("LIGHT", 0), RawEnumMember::new("DARK", 1)],
        );
        table.register_string_literal_union("Alignment", &["'left'", "'right'"]);
        table.register_enum("Empty", &[]);
        let properties = vec![
            mock_record("theme", "Theme"),
            mock_record("align", "Alignment"),
            mock_record("empty", "Empty"),
        ];

        assert_eq!(
            synthesize(&table, &properties),
            json!({"theme": 0, "align": "left", "empty": null})
        );
    }

    #[test]
    fn test_nested_object_array_and_unknown() {
        let mut table = ReferenceTable::new();
        let mut url = mock_record("url", "string");
        url.placeholder = "path/to/image.jpg".to_string();
        table.register_object("IImage", vec![url]);

        let mut link = mock_record("link", TYPE_OBJECT);
        link.properties = vec![mock_record("external", "boolean")];
        let mut slides = mock_record("slides", TYPE_ARRAY);
        slides.properties = vec![mock_record("image", "IImage")];
        let properties = vec![link, slides, mock_record("created", "Date")];

        assert_eq!(
            synthesize(&table, &properties),
            json!({
                "link": {"external": true},
                "slides": [{"image": {"url": "path/to/image.jpg"}}],
                "created": "TODO: Date"
            })
        );
    }

    #[test]
    fn test_array_without_children_has_one_empty_element() {
        let table = ReferenceTable::new();
        let properties = vec![mock_record("tags", TYPE_ARRAY)];

        assert_eq!(synthesize(&table, &properties), json!({"tags": [{}]}));
    }

    #[test]
    fn test_self_reference_is_cut() {
        let mut table = ReferenceTable::new();
        table.register_object(
            "IMenuItem",
            vec![mock_record("label", "string"), mock_record("parent", "IMenuItem")],
        );
        let properties = vec![mock_record("menu", "IMenuItem")];

        assert_eq!(
            synthesize(&table, &properties),
            json!({
                "menu": {
                    "label": "Lorem ipsum dolor sit amet",
                    "parent": {}
                }
            })
        );
    }

    #[test]
    fn test_key_order_follows_properties() {
        let table = ReferenceTable::new();
        let properties = vec![
            mock_record("zeta", "number"),
            mock_record("alpha", "number"),
        ];
        let placeholders = PlaceholderValues::default();
        let example = ExampleSynthesizer::new(&table, &placeholders).synthesize(&properties);

        let keys: Vec<_> = example.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }
}
