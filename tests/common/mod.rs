//! Byte builders for character pool wire records.

#![allow(dead_code)]

pub fn u32le(value: u32) -> Vec<u8> {
    value.to_le_bytes().to_vec()
}

/// Length-prefixed, null-terminated text.
pub fn text(s: &str) -> Vec<u8> {
    let mut out = u32le(s.len() as u32 + 1);
    out.extend_from_slice(s.as_bytes());
    out.push(0);
    out
}

pub fn terminator() -> Vec<u8> {
    [text("None"), u32le(0)].concat()
}

/// Name, type tag and declared length, each followed by a zero field.
pub fn header(name: &str, type_tag: &str, declared_len: u32) -> Vec<u8> {
    [text(name), u32le(0), text(type_tag), u32le(0), u32le(declared_len), u32le(0)].concat()
}

pub fn int_prop(name: &str, value: u32) -> Vec<u8> {
    [header(name, "IntProperty", 4), u32le(value)].concat()
}

pub fn array_prop(name: &str, value: u32) -> Vec<u8> {
    [header(name, "ArrayProperty", 4), u32le(value)].concat()
}

pub fn str_prop(name: &str, value: &str) -> Vec<u8> {
    let payload = text(value);
    [header(name, "StrProperty", payload.len() as u32), payload].concat()
}

pub fn name_prop(name: &str, value: &str, instance: u32) -> Vec<u8> {
    let payload = text(value);
    [header(name, "NameProperty", payload.len() as u32 + 4), payload, u32le(instance)].concat()
}

pub fn bool_prop(name: &str, byte: u8) -> Vec<u8> {
    [header(name, "BoolProperty", 0), vec![byte]].concat()
}

/// Struct header fields, without the body.
pub fn struct_header(name: &str, struct_type: &str, body_len: u32) -> Vec<u8> {
    [header(name, "StructProperty", body_len), text(struct_type), u32le(0)].concat()
}

pub fn struct_prop(name: &str, struct_type: &str, body: &[u8]) -> Vec<u8> {
    [struct_header(name, struct_type, body.len() as u32), body.to_vec()].concat()
}

/// Magic, the count terminator, the count, then the given byte groups.
pub fn pool(count: u32, groups: &[Vec<u8>]) -> Vec<u8> {
    let mut out = u32le(0xFFFF_FFFF);
    out.extend(terminator());
    out.extend(u32le(count));
    for group in groups {
        out.extend_from_slice(group);
    }
    out
}

/// One character: its properties followed by a terminator.
pub fn character(properties: &[Vec<u8>]) -> Vec<u8> {
    let mut out = properties.concat();
    out.extend(terminator());
    out
}
