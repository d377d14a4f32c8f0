//! Reference table
//!
//! Named types shared between properties are stored once per run, keyed by
//! name, in first-encounter order. Registration is idempotent: the first
//! registration of a name wins and every later one is a no-op. Object
//! references are reserved before their children are flattened, which is
//! what keeps self-referential interface graphs finite.

use crate::js_doc::is_ignored;
use crate::property::PropertyRecord;
use crate::types::RawEnumMember;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named object shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectReference {
    pub name: String,
    pub properties: Vec<PropertyRecord>,
}

/// One member of an enum reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: String,
    pub value: Value,
}

/// A named enum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumReference {
    pub name: String,
    pub properties: Vec<EnumMember>,
}

/// One literal of a string-literal union
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringLiteralMember {
    pub name: String,
    pub value: String,
}

/// A named union of string literals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringLiteralReference {
    pub name: String,
    pub properties: Vec<StringLiteralMember>,
}

/// Borrowed view of any registered reference
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reference<'a> {
    Object(&'a ObjectReference),
    Enum(&'a EnumReference),
    StringLiteral(&'a StringLiteralReference),
}

/// Per-run store of named references
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    objects: IndexMap<String, ObjectReference>,
    enums: IndexMap<String, EnumReference>,
    string_literals: IndexMap<String, StringLiteralReference>,
}

impl ReferenceTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object reference with already flattened properties.
    ///
    /// Returns `false`, and ignores `properties`, when the name is known.
    pub fn register_object(&mut self, name: &str, properties: Vec<PropertyRecord>) -> bool {
        if !self.reserve_object(name) {
            return false;
        }
        self.complete_object(name, properties);
        true
    }

    /// Claim the slot for `name` before its children are flattened.
    ///
    /// Returns `false` when the name is already registered or reserved.
    pub fn reserve_object(&mut self, name: &str) -> bool {
        if self.objects.contains_key(name) {
            return false;
        }
        tracing::debug!(reference = name, "registering object reference");
        self.objects.insert(
            name.to_string(),
            ObjectReference {
                name: name.to_string(),
                properties: Vec::new(),
            },
        );
        true
    }

    /// Fill a slot claimed with [`reserve_object`](Self::reserve_object)
    pub fn complete_object(&mut self, name: &str, properties: Vec<PropertyRecord>) {
        if let Some(reference) = self.objects.get_mut(name) {
            reference.properties = properties;
        }
    }

    /// Register an enum, dropping members annotated with `@ignore`
    pub fn register_enum(&mut self, name: &str, members: &[RawEnumMember]) -> bool {
        if self.enums.contains_key(name) {
            return false;
        }
        tracing::debug!(reference = name, "registering enum reference");

        let properties = members
            .iter()
            .filter(|m| !is_ignored(&m.doc))
            .map(|m| EnumMember {
                name: m.name.clone(),
                value: m.value.clone(),
            })
            .collect();

        self.enums.insert(
            name.to_string(),
            EnumReference {
                name: name.to_string(),
                properties,
            },
        );
        true
    }

    /// Register a string-literal union; surrounding quotes are stripped
    pub fn register_string_literal_union<S: AsRef<str>>(
        &mut self,
        name: &str,
        variants: &[S],
    ) -> bool {
        if self.string_literals.contains_key(name) {
            return false;
        }
        tracing::debug!(reference = name, "registering string literal reference");

        let properties = variants
            .iter()
            .map(|v| {
                let literal = strip_quotes(v.as_ref());
                StringLiteralMember {
                    name: literal.to_string(),
                    value: literal.to_string(),
                }
            })
            .collect();

        self.string_literals.insert(
            name.to_string(),
            StringLiteralReference {
                name: name.to_string(),
                properties,
            },
        );
        true
    }

    /// Find a reference by name, probing objects, then enums, then
    /// string-literal unions
    pub fn lookup(&self, name: &str) -> Option<Reference<'_>> {
        if let Some(object) = self.objects.get(name) {
            return Some(Reference::Object(object));
        }
        if let Some(en) = self.enums.get(name) {
            return Some(Reference::Enum(en));
        }
        self.string_literals.get(name).map(Reference::StringLiteral)
    }

    /// Registered object references in insertion order
    pub fn objects(&self) -> impl Iterator<Item = &ObjectReference> {
        self.objects.values()
    }

    /// Registered enums in insertion order
    pub fn enums(&self) -> impl Iterator<Item = &EnumReference> {
        self.enums.values()
    }

    /// Registered string-literal unions in insertion order
    pub fn string_literals(&self) -> impl Iterator<Item = &StringLiteralReference> {
        self.string_literals.values()
    }

    /// Split into the three ordered tables
    pub fn into_parts(
        self,
    ) -> (
        Vec<ObjectReference>,
        Vec<EnumReference>,
        Vec<StringLiteralReference>,
    ) {
        (
            self.objects.into_values().collect(),
            self.enums.into_values().collect(),
            self.string_literals.into_values().collect(),
        )
    }
}

/// Remove one pair of surrounding quote characters
fn strip_quotes(literal: &str) -> &str {
    let trimmed = literal.trim();
    for quote in ['\'', '"', '`'] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return &trimmed[1..trimmed.len() - 1];
        }
    }
    trimmed
}
