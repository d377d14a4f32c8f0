//! Property records and the flattener
//!
//! The flattener turns the raw, annotated properties of a declaration into
//! ordered [`PropertyRecord`]s. Named types met along the way are
//! registered in the [`ReferenceTable`] exactly once.

use crate::js_doc::{
    extract_tag, is_ignored, TAG_DEFAULT_VALUE, TAG_DESCRIPTION, TAG_PLACEHOLDER, TAG_RAW_NAME,
};
use crate::reference::ReferenceTable;
use crate::types::{RawProperty, TypeDescriptor, TypeSource};
use serde::{Deserialize, Serialize};

/// Type name of an inline object literal
pub const TYPE_OBJECT: &str = "Object";
/// Type name of an array property
pub const TYPE_ARRAY: &str = "Array";
/// Fallback for a property without `@defaultValue`
pub const NULL_DEFAULT_VALUE: &str = "null";

/// One documented field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    /// Property identifier
    pub name: String,
    /// `string`, `boolean`, `number`, `Object`, `Array`, a reference name,
    /// or any other type text
    #[serde(rename = "type")]
    pub ty: String,
    /// False when the property is declared optional
    pub required: bool,
    /// Value of `@defaultValue`, or the string `"null"`
    pub default_value: String,
    /// Value of `@description`
    pub description: String,
    /// Value of `@placeholder`
    pub placeholder: String,
    /// Children of `Object` and `Array` properties
    pub properties: Vec<PropertyRecord>,
}

impl PropertyRecord {
    /// Create a required record with no annotations
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            required: true,
            default_value: NULL_DEFAULT_VALUE.to_string(),
            description: String::new(),
            placeholder: String::new(),
            properties: Vec::new(),
        }
    }
}

/// Converts raw properties into records, registering references
pub struct Flattener<'a> {
    source: &'a dyn TypeSource,
    table: &'a mut ReferenceTable,
    /// Interfaces whose properties are currently being flattened
    expanding: Vec<String>,
}

impl<'a> Flattener<'a> {
    /// Create a flattener reading shapes from `source`
    pub fn new(source: &'a dyn TypeSource, table: &'a mut ReferenceTable) -> Self {
        Self {
            source,
            table,
            expanding: Vec::new(),
        }
    }

    /// Flatten every property not annotated with `@ignore`, keeping
    /// declaration order
    pub fn flatten_properties(&mut self, raw: &[RawProperty]) -> Vec<PropertyRecord> {
        raw.iter()
            .filter(|p| !is_ignored(&p.doc))
            .map(|p| self.flatten_property(p))
            .collect()
    }

    fn flatten_property(&mut self, raw: &RawProperty) -> PropertyRecord {
        let (ty, properties) = self.classify(raw);

        let default_value = extract_tag(&raw.doc, TAG_DEFAULT_VALUE);
        let default_value = if default_value.is_empty() {
            NULL_DEFAULT_VALUE.to_string()
        } else {
            default_value
        };

        PropertyRecord {
            name: raw.name.clone(),
            ty,
            required: !raw.optional,
            default_value,
            description: extract_tag(&raw.doc, TAG_DESCRIPTION),
            placeholder: extract_tag(&raw.doc, TAG_PLACEHOLDER),
            properties,
        }
    }

    /// Resolve the record type and its children
    fn classify(&mut self, raw: &RawProperty) -> (String, Vec<PropertyRecord>) {
        match &raw.ty {
            TypeDescriptor::Primitive(name) => (name.clone(), Vec::new()),
            TypeDescriptor::AnonymousObject(children) => {
                (TYPE_OBJECT.to_string(), self.flatten_properties(children))
            }
            TypeDescriptor::ArrayOf(element) => {
                (TYPE_ARRAY.to_string(), self.element_properties(element))
            }
            TypeDescriptor::ObjectRef(name) => {
                self.register_object(name);
                (name.clone(), Vec::new())
            }
            TypeDescriptor::EnumRef { name, members } => {
                self.table.register_enum(name, members);
                (name.clone(), Vec::new())
            }
            TypeDescriptor::StringLiteralUnion { alias, variants } => {
                let raw_name = extract_tag(&raw.doc, TAG_RAW_NAME).trim().to_string();
                let name = if raw_name.is_empty() {
                    alias.clone()
                } else {
                    Some(raw_name)
                };

                match name {
                    Some(name) => {
                        self.table.register_string_literal_union(&name, variants);
                        (name, Vec::new())
                    }
                    None => {
                        tracing::debug!(
                            property = raw.name.as_str(),
                            "unnamed string literal union, documenting as string"
                        );
                        ("string".to_string(), Vec::new())
                    }
                }
            }
        }
    }

    /// Children of an array property: the properties of its element type
    fn element_properties(&mut self, element: &TypeDescriptor) -> Vec<PropertyRecord> {
        match element {
            TypeDescriptor::AnonymousObject(children) => self.flatten_properties(children),
            TypeDescriptor::ObjectRef(name) => {
                self.register_object(name);
                self.expand_inline(name)
            }
            _ => Vec::new(),
        }
    }

    /// Register a named object once, flattening its own properties
    fn register_object(&mut self, name: &str) {
        if !self.table.reserve_object(name) {
            return;
        }
        let properties = self.expand_inline(name);
        self.table.complete_object(name, properties);
    }

    /// Flatten the properties of a named object, yielding nothing when the
    /// object is already being expanded further up
    fn expand_inline(&mut self, name: &str) -> Vec<PropertyRecord> {
        if self.expanding.iter().any(|n| n == name) {
            return Vec::new();
        }
        let source = self.source;
        let Some(raw) = source.object_properties(name) else {
            tracing::debug!(reference = name, "no declaration for object reference");
            return Vec::new();
        };

        self.expanding.push(name.to_string());
        let properties = self.flatten_properties(raw);
        self.expanding.pop();
        properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::Reference;
    use crate::test::{mock_dummy_unit, mock_property, mock_theme_enum};
    use crate::types::ParsedUnit;
    use pretty_assertions::assert_eq;

    fn flatten(unit: &ParsedUnit, table: &mut ReferenceTable) -> Vec<PropertyRecord> {
        Flattener::new(unit, table).flatten_properties(unit.root_properties())
    }

    fn names(records: &[PropertyRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_flatten_dummy_block() {
        let unit = mock_dummy_unit();
        let mut table = ReferenceTable::new();
        let records = flatten(&unit, &mut table);

        assert_eq!(names(&records), vec!["header", "image", "theme"]);

        let header = &records[0];
        assert_eq!(header.ty, "string");
        assert!(header.required);
        assert_eq!(
            header.default_value,
            "Define the default value of the property if required"
        );
        assert_eq!(header.description, "The heading displayed");
        assert_eq!(header.placeholder, "This is a defined placeholder value");

        let image = &records[1];
        assert_eq!(image.ty, "IImage");
        assert_eq!(image.default_value, "null");
        assert!(image.properties.is_empty());

        let theme = &records[2];
        assert_eq!(theme.ty, "Theme");
        assert!(!theme.required);

        assert_eq!(table.objects().count(), 1);
        assert_eq!(table.enums().count(), 1);
        let image_ref = table.objects().next().unwrap();
        assert_eq!(image_ref.name, "IImage");
        assert_eq!(image_ref.properties[0].placeholder, "path/to/image.jpg");
    }

    #[test]
    fn test_anonymous_object_children_keep_order() {
        let mut unit = ParsedUnit::new();
        unit.add_object(
            "IRoot",
            vec![RawProperty::new(
                "link",
                TypeDescriptor::AnonymousObject(vec![
                    mock_property("label", "string"),
                    mock_property("target", "string").with_doc("@ignore"),
                    mock_property("url", "string"),
                ]),
            )],
        );
        let mut table = ReferenceTable::new();
        let records = Flattener::new(&unit, &mut table)
            .flatten_properties(unit.object_properties("IRoot").unwrap());

        assert_eq!(records[0].ty, TYPE_OBJECT);
        assert_eq!(names(&records[0].properties), vec!["label", "url"]);
        assert!(table.objects().next().is_none());
    }

    #[test]
    fn test_array_of_interface() {
        let mut unit = ParsedUnit::new();
        unit.add_object(
            "ISlide",
            vec![
                mock_property("title", "string"),
                mock_property("secret", "string").with_doc("@ignore"),
            ],
        );
        let raw = vec![RawProperty::new(
            "slides",
            TypeDescriptor::array_of(TypeDescriptor::object_ref("ISlide")),
        )];
        let mut table = ReferenceTable::new();
        let records = Flattener::new(&unit, &mut table).flatten_properties(&raw);

        assert_eq!(records[0].ty, TYPE_ARRAY);
        assert_eq!(names(&records[0].properties), vec!["title"]);
        match table.lookup("ISlide") {
            Some(Reference::Object(slide)) => assert_eq!(names(&slide.properties), vec!["title"]),
            other => panic!("expected ISlide reference, got {:?}", other),
        }
    }

    #[test]
    fn test_array_of_primitive_has_no_children() {
        let unit = ParsedUnit::new();
        let raw = vec![RawProperty::new(
            "tags",
            TypeDescriptor::array_of(TypeDescriptor::primitive("string")),
        )];
        let mut table = ReferenceTable::new();
        let records = Flattener::new(&unit, &mut table).flatten_properties(&raw);

        assert_eq!(records[0].ty, TYPE_ARRAY);
        assert!(records[0].properties.is_empty());
    }

    #[test]
    fn test_ignore_is_transitive_through_references() {
        let mut unit = ParsedUnit::new();
        unit.add_object(
            "ILink",
            vec![
                mock_property("url", "string"),
                mock_property("tracking", "string").with_doc("@ignore"),
            ],
        );
        let raw = vec![
            RawProperty::new("link", TypeDescriptor::object_ref("ILink")),
            RawProperty::new("hidden", TypeDescriptor::object_ref("IHidden")).with_doc("@ignore"),
        ];
        let mut table = ReferenceTable::new();
        let records = Flattener::new(&unit, &mut table).flatten_properties(&raw);

        assert_eq!(names(&records), vec!["link"]);
        assert!(table.lookup("IHidden").is_none());
        let link = table.objects().next().unwrap();
        assert_eq!(names(&link.properties), vec!["url"]);
    }

    #[test]
    fn test_self_referential_interface_terminates() {
        let mut unit = ParsedUnit::new();
        unit.add_object(
            "IMenuItem",
            vec![
                mock_property("label", "string"),
                RawProperty::new("parent", TypeDescriptor::object_ref("IMenuItem")).optional(),
                RawProperty::new(
                    "children",
                    TypeDescriptor::array_of(TypeDescriptor::object_ref("IMenuItem")),
                ),
            ],
        );
        let raw = vec![RawProperty::new(
            "menu",
            TypeDescriptor::object_ref("IMenuItem"),
        )];
        let mut table = ReferenceTable::new();
        Flattener::new(&unit, &mut table).flatten_properties(&raw);

        let menu = table.objects().next().unwrap();
        assert_eq!(table.objects().count(), 1);
        assert_eq!(names(&menu.properties), vec!["label", "parent", "children"]);
        assert_eq!(menu.properties[1].ty, "IMenuItem");
        assert!(menu.properties[2].properties.is_empty());
    }

    #[test]
    fn test_mutually_referential_interfaces_terminate() {
        let mut unit = ParsedUnit::new();
        unit.add_object(
            "IAuthor",
            vec![RawProperty::new(
                "posts",
                TypeDescriptor::array_of(TypeDescriptor::object_ref("IPost")),
            )],
        );
        unit.add_object(
            "IPost",
            vec![
                mock_property("title", "string"),
                RawProperty::new("author", TypeDescriptor::object_ref("IAuthor")),
            ],
        );
        let raw = vec![RawProperty::new("author", TypeDescriptor::object_ref("IAuthor"))];
        let mut table = ReferenceTable::new();
        Flattener::new(&unit, &mut table).flatten_properties(&raw);

        let order: Vec<_> = table.objects().map(|o| o.name.as_str()).collect();
        assert_eq!(order, vec!["IAuthor", "IPost"]);
        let author = table.objects().next().unwrap();
        assert_eq!(names(&author.properties[0].properties), vec!["title", "author"]);
    }

    #[test]
    fn test_string_literal_union_named_by_raw_name() {
        let unit = ParsedUnit::new();
        let union = TypeDescriptor::StringLiteralUnion {
            alias: Some("AlignAlias".to_string()),
            variants: vec!["'left'".to_string(), "'right'".to_string()],
        };
        let raw = vec![
            RawProperty::new("align", union.clone()).with_doc("@rawName Alignment"),
            RawProperty::new("fallback", union),
            RawProperty::new(
                "inline",
                TypeDescriptor::StringLiteralUnion {
                    alias: None,
                    variants: vec!["'a'".to_string()],
                },
            ),
        ];
        let mut table = ReferenceTable::new();
        let records = Flattener::new(&unit, &mut table).flatten_properties(&raw);

        assert_eq!(records[0].ty, "Alignment");
        assert_eq!(records[1].ty, "AlignAlias");
        assert_eq!(records[2].ty, "string");
        let literal_names: Vec<_> = table.string_literals().map(|s| s.name.as_str()).collect();
        assert_eq!(literal_names, vec!["Alignment", "AlignAlias"]);
    }

    #[test]
    fn test_enum_registered_once() {
        let unit = ParsedUnit::new();
        let raw = vec![
            RawProperty::new("theme", mock_theme_enum()),
            RawProperty::new("alternateTheme", mock_theme_enum()),
        ];
        let mut table = ReferenceTable::new();
        let records = Flattener::new(&unit, &mut table).flatten_properties(&raw);

        assert_eq!(records[1].ty, "Theme");
        assert_eq!(table.enums().count(), 1);
    }
}
