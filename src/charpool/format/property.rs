//! Tagged property decoding.
//!
//! # Property Structure
//! ```text
//! [u32 + N bytes] Name (length-prefixed, null-terminated)
//! [4 bytes]       Reserved, must be zero
//! -- if Name == "None": end of record --
//! [u32 + N bytes] Type tag (length-prefixed, null-terminated)
//! [4 bytes]       Reserved, must be zero
//! [4 bytes]       Declared payload length
//! [4 bytes]       Reserved, must be zero
//! [...]           Type-specific payload
//! ```
//!
//! Payloads by type tag:
//! - `IntProperty`, `ArrayProperty`: `u32`
//! - `StrProperty`: length-prefixed text
//! - `NameProperty`: length-prefixed text, then a `u32` instance index
//! - `BoolProperty`: one byte, `1` is true
//! - `StructProperty`: length-prefixed struct type name, reserved zero, then
//!   exactly `declared length` bytes of nested properties

use log::trace;

use crate::charpool::cursor::Cursor;
use crate::charpool::types::error::{CharPoolError, Result};
use crate::charpool::types::models::{NamedProperty, Property, PropertyValue, TERMINATOR_NAME};

const INT_PROPERTY: &str = "IntProperty";
const ARRAY_PROPERTY: &str = "ArrayProperty";
const STR_PROPERTY: &str = "StrProperty";
const NAME_PROPERTY: &str = "NameProperty";
const BOOL_PROPERTY: &str = "BoolProperty";
const STRUCT_PROPERTY: &str = "StructProperty";

/// Deepest struct nesting accepted before decoding fails.
pub const MAX_STRUCT_DEPTH: usize = 64;

/// Decodes one property at the cursor position.
///
/// On success the cursor has moved past exactly the bytes of this property.
/// For struct properties that is the full declared body length, however many
/// members were found inside it.
pub fn decode_property(cursor: &mut Cursor<'_>) -> Result<Property> {
    decode_property_at_depth(cursor, 0)
}

/// `depth` counts the structs enclosing the cursor.
fn decode_property_at_depth(cursor: &mut Cursor<'_>, depth: usize) -> Result<Property> {
    let start = cursor.absolute_offset();
    let name = cursor.read_length_prefixed_text()?;
    cursor.read_reserved_zero()?;

    if name == TERMINATOR_NAME {
        trace!("Terminator at {:#x}", start);
        return Ok(Property::Terminator);
    }

    let type_offset = cursor.absolute_offset();
    let type_name = cursor.read_length_prefixed_text()?;
    cursor.read_reserved_zero()?;

    let value = decode_value(cursor, type_name, type_offset, depth)?;
    trace!("Property '{}' ({:?}) at {:#x}", name, value.kind(), start);

    Ok(Property::Named(NamedProperty { name, value }))
}

/// Decodes the payload that follows a property's type tag.
fn decode_value(
    cursor: &mut Cursor<'_>,
    type_name: String,
    type_offset: usize,
    depth: usize,
) -> Result<PropertyValue> {
    let value = match type_name.as_str() {
        INT_PROPERTY => {
            read_declared_length(cursor)?;
            PropertyValue::Int { value: cursor.read_u32()? }
        }
        ARRAY_PROPERTY => {
            read_declared_length(cursor)?;
            PropertyValue::Array { value: cursor.read_u32()? }
        }
        STR_PROPERTY => {
            read_declared_length(cursor)?;
            PropertyValue::Str { value: cursor.read_length_prefixed_text()? }
        }
        NAME_PROPERTY => {
            read_declared_length(cursor)?;
            let value = cursor.read_length_prefixed_text()?;
            let instance = cursor.read_u32()?;
            PropertyValue::Name { value, instance }
        }
        BOOL_PROPERTY => {
            read_declared_length(cursor)?;
            PropertyValue::Bool { value: cursor.read_u8()? == 1 }
        }
        STRUCT_PROPERTY => {
            let body_len = read_declared_length(cursor)?;
            let struct_type = cursor.read_length_prefixed_text()?;
            cursor.read_reserved_zero()?;
            let mut body = cursor.slice(body_len as usize)?;
            if depth >= MAX_STRUCT_DEPTH {
                return Err(CharPoolError::MalformedStream {
                    offset: type_offset,
                    reason: format!("struct nesting exceeds {} levels", MAX_STRUCT_DEPTH),
                });
            }
            decode_struct_body(&mut body, struct_type, depth + 1)?
        }
        _ => {
            return Err(CharPoolError::UnknownPropertyType {
                type_name,
                offset: type_offset,
            });
        }
    };
    Ok(value)
}

/// Reads the declared payload length and the reserved field after it.
///
/// The length only bounds decoding for struct bodies.
fn read_declared_length(cursor: &mut Cursor<'_>) -> Result<u32> {
    let len = cursor.read_u32()?;
    cursor.read_reserved_zero()?;
    Ok(len)
}

/// Decodes members until the struct body is exhausted.
///
/// A terminator inside the body is skipped; only the body length ends the struct.
fn decode_struct_body(body: &mut Cursor<'_>, type_name: String, depth: usize) -> Result<PropertyValue> {
    trace!(
        "Struct '{}': {} byte body at {:#x}",
        type_name,
        body.remaining(),
        body.absolute_offset()
    );

    let mut fields = Vec::new();
    while !body.at_end() {
        if let Property::Named(member) = decode_property_at_depth(body, depth)? {
            fields.push(member);
        }
    }

    Ok(PropertyValue::Struct { type_name, fields })
}
