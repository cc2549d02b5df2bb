//! Data structures representing decoded character pool components

use indexmap::IndexMap;
use serde::Serialize;

/// Property name that marks the end of a property group.
pub const TERMINATOR_NAME: &str = "None";

/// The decoded property kinds.
///
/// `ArrayProperty` shares its wire shape with `IntProperty` and reports
/// [`PropertyKind::Int`]; only [`PropertyValue::Array`] keeps the tag apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Terminator,
    Int,
    Str,
    Name,
    Bool,
    Struct,
}

impl PropertyKind {
    /// The wire type tag for this kind, `None` for terminators.
    pub fn type_tag(&self) -> Option<&'static str> {
        match self {
            PropertyKind::Terminator => None,
            PropertyKind::Int => Some("IntProperty"),
            PropertyKind::Str => Some("StrProperty"),
            PropertyKind::Name => Some("NameProperty"),
            PropertyKind::Bool => Some("BoolProperty"),
            PropertyKind::Struct => Some("StructProperty"),
        }
    }
}

/// A single decoded property record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Property {
    /// The `"None"` sentinel. Carries no type and no value.
    Terminator,
    Named(NamedProperty),
}

impl Property {
    pub fn is_terminator(&self) -> bool {
        matches!(self, Property::Terminator)
    }

    pub fn kind(&self) -> PropertyKind {
        match self {
            Property::Terminator => PropertyKind::Terminator,
            Property::Named(p) => p.value.kind(),
        }
    }

    /// The property name; terminators report the sentinel text.
    pub fn name(&self) -> &str {
        match self {
            Property::Terminator => TERMINATOR_NAME,
            Property::Named(p) => &p.name,
        }
    }
}

/// A property with a real name and a typed payload.
///
/// Serializes as `{"name": .., "type": .., "value": .., ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedProperty {
    pub name: String,
    #[serde(flatten)]
    pub value: PropertyValue,
}

/// Kind-dependent payload of a [`NamedProperty`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum PropertyValue {
    #[serde(rename = "IntProperty")]
    Int { value: u32 },

    /// Same payload as `Int`; kept separate so the wire tag survives output.
    #[serde(rename = "ArrayProperty")]
    Array { value: u32 },

    #[serde(rename = "StrProperty")]
    Str { value: String },

    /// Text plus a trailing instance index whose meaning is unknown.
    #[serde(rename = "NameProperty")]
    Name { value: String, instance: u32 },

    #[serde(rename = "BoolProperty")]
    Bool { value: bool },

    /// Nested properties in stream order. Terminators inside the body are dropped.
    #[serde(rename = "StructProperty")]
    Struct {
        #[serde(rename = "value")]
        type_name: String,
        #[serde(rename = "data")]
        fields: Vec<NamedProperty>,
    },
}

impl PropertyValue {
    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyValue::Int { .. } | PropertyValue::Array { .. } => PropertyKind::Int,
            PropertyValue::Str { .. } => PropertyKind::Str,
            PropertyValue::Name { .. } => PropertyKind::Name,
            PropertyValue::Bool { .. } => PropertyKind::Bool,
            PropertyValue::Struct { .. } => PropertyKind::Struct,
        }
    }

    pub fn as_int(&self) -> Option<u32> {
        match self {
            PropertyValue::Int { value } | PropertyValue::Array { value } => Some(*value),
            _ => None,
        }
    }

    /// Text payload of a `Str` or `Name` property.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Str { value } | PropertyValue::Name { value, .. } => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool { value } => Some(*value),
            _ => None,
        }
    }

    /// Struct type name and members.
    pub fn as_struct(&self) -> Option<(&str, &[NamedProperty])> {
        match self {
            PropertyValue::Struct { type_name, fields } => Some((type_name.as_str(), fields.as_slice())),
            _ => None,
        }
    }
}

/// One character: the properties found between two top-level terminators.
///
/// Keeps first-seen order of names. A repeated name replaces the earlier
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Character {
    properties: IndexMap<String, NamedProperty>,
}

impl Character {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a property keyed by its name, returning the one it replaced.
    pub fn insert(&mut self, property: NamedProperty) -> Option<NamedProperty> {
        self.properties.insert(property.name.clone(), property)
    }

    pub fn get(&self, name: &str) -> Option<&NamedProperty> {
        self.properties.get(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Properties in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &NamedProperty> {
        self.properties.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }
}

/// The full decoded pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CharacterPool {
    /// Count stored after the first terminator. Informational only; it is not
    /// checked against `characters.len()`.
    pub(crate) declared_count: Option<u32>,
    pub(crate) characters: Vec<Character>,
}

impl CharacterPool {
    /// Returns the declared character count, if the stream reached it.
    pub fn declared_count(&self) -> Option<u32> {
        self.declared_count
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn into_characters(self) -> Vec<Character> {
        self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

impl<'a> IntoIterator for &'a CharacterPool {
    type Item = &'a Character;
    type IntoIter = std::slice::Iter<'a, Character>;

    fn into_iter(self) -> Self::IntoIter {
        self.characters.iter()
    }
}
