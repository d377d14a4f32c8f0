//! Parsed type model
//!
//! This is the narrow contract between the TypeScript parser and the
//! flattening engine. A parser turns a file into a [`ParsedUnit`]: the
//! types declared in the file, plus a [`TypeSource`] able to hand out the
//! properties of any interface reachable from it. Type expressions are
//! classified up front into a [`TypeDescriptor`], so the flattener switches
//! on a tag instead of probing shapes.

use crate::diagnostics::Diagnostic;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Classified type expression of a property
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescriptor {
    /// Keyword type or any name the parser could not resolve (`string`,
    /// `number`, `Date`, ...). The text is used as the property type as-is.
    Primitive(String),

    /// A named interface (or alias of an object literal). Properties are
    /// looked up through [`TypeSource::object_properties`] so that
    /// self-referential declarations stay finite.
    ObjectRef(String),

    /// Inline object literal type: `{ url: string }`
    AnonymousObject(Vec<RawProperty>),

    /// `T[]` or `Array<T>`
    ArrayOf(Box<TypeDescriptor>),

    /// A named enum with its members in declaration order
    EnumRef {
        name: String,
        members: Vec<RawEnumMember>,
    },

    /// A union of string literals: `'left' | 'right'`
    StringLiteralUnion {
        /// Name of the type alias the union was reached through, if any
        alias: Option<String>,
        /// Literal texts, quotes included
        variants: Vec<String>,
    },
}

impl TypeDescriptor {
    /// Create a primitive descriptor
    pub fn primitive(name: impl Into<String>) -> Self {
        TypeDescriptor::Primitive(name.into())
    }

    /// Create a named object reference
    pub fn object_ref(name: impl Into<String>) -> Self {
        TypeDescriptor::ObjectRef(name.into())
    }

    /// Create an array of `element`
    pub fn array_of(element: TypeDescriptor) -> Self {
        TypeDescriptor::ArrayOf(Box::new(element))
    }
}

/// A property as declared in source
#[derive(Debug, Clone, PartialEq)]
pub struct RawProperty {
    /// Property identifier
    pub name: String,
    /// Classified type
    pub ty: TypeDescriptor,
    /// Declared with `?`
    pub optional: bool,
    /// Cleaned JSDoc lines attached to the property
    pub doc: Vec<String>,
}

impl RawProperty {
    /// Create a required, undocumented property
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            doc: Vec::new(),
        }
    }

    /// Mark the property optional
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Append an annotation line
    pub fn with_doc(mut self, line: impl Into<String>) -> Self {
        self.doc.push(line.into());
        self
    }
}

/// An enum member as declared in source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEnumMember {
    /// Member identifier
    pub name: String,
    /// Evaluated value: a number, or a string for string enums
    pub value: Value,
    /// Cleaned JSDoc lines attached to the member
    pub doc: Vec<String>,
}

impl RawEnumMember {
    /// Create an undocumented member
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            doc: Vec::new(),
        }
    }
}

/// Body of a top-level type declaration
#[derive(Debug, Clone, PartialEq)]
pub enum DeclaredKind {
    /// `interface X { ... }`
    Interface(Vec<RawProperty>),
    /// `enum X { ... }`
    Enum(Vec<RawEnumMember>),
    /// `type X = 'a' | 'b'`
    StringLiteralUnion(Vec<String>),
    /// `type X = { ... }`
    ObjectAlias(Vec<RawProperty>),
    /// Any other `type X = ...`
    Alias(TypeDescriptor),
}

/// A top-level type declared in a parsed file
#[derive(Debug, Clone, PartialEq)]
pub struct DeclaredType {
    /// Declared identifier
    pub name: String,
    /// Declaration body
    pub kind: DeclaredKind,
    /// Whether this is the file's default export
    pub is_default_export: bool,
}

impl DeclaredType {
    /// Properties, when the declaration describes an object shape
    pub fn properties(&self) -> Option<&[RawProperty]> {
        match &self.kind {
            DeclaredKind::Interface(props) | DeclaredKind::ObjectAlias(props) => {
                Some(props.as_slice())
            }
            _ => None,
        }
    }
}

/// Lookup of object shapes by name
pub trait TypeSource {
    /// Properties of the named interface or object alias
    fn object_properties(&self, name: &str) -> Option<&[RawProperty]>;
}

/// Everything a parser produced for one input file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedUnit {
    /// Types declared in the file itself, in declaration order
    pub declarations: Vec<DeclaredType>,
    /// Object shapes reachable from the file, including imported ones
    pub objects: IndexMap<String, Vec<RawProperty>>,
    /// Problems that degraded the unit, e.g. imports that could not be followed
    pub warnings: Vec<Diagnostic>,
}

impl ParsedUnit {
    /// Create an empty unit
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration of the file itself. Object shapes are also made
    /// available through [`TypeSource`].
    pub fn declare(&mut self, declared: DeclaredType) {
        if let Some(props) = declared.properties() {
            self.objects
                .entry(declared.name.clone())
                .or_insert_with(|| props.to_vec());
        }
        self.declarations.push(declared);
    }

    /// Make an imported object shape available through [`TypeSource`]
    pub fn add_object(&mut self, name: impl Into<String>, properties: Vec<RawProperty>) {
        self.objects.entry(name.into()).or_insert(properties);
    }

    /// The type describing the unit: the default-exported object shape,
    /// else the first interface, else the first object alias.
    pub fn root(&self) -> Option<&DeclaredType> {
        self.declarations
            .iter()
            .find(|d| d.is_default_export && d.properties().is_some())
            .or_else(|| {
                self.declarations
                    .iter()
                    .find(|d| matches!(d.kind, DeclaredKind::Interface(_)))
            })
            .or_else(|| {
                self.declarations
                    .iter()
                    .find(|d| matches!(d.kind, DeclaredKind::ObjectAlias(_)))
            })
    }

    /// Properties of the root type, empty when there is none
    pub fn root_properties(&self) -> &[RawProperty] {
        self.root().and_then(|d| d.properties()).unwrap_or(&[])
    }
}

impl TypeSource for ParsedUnit {
    fn object_properties(&self, name: &str) -> Option<&[RawProperty]> {
        self.objects.get(name).map(Vec::as_slice)
    }
}
