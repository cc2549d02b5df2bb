mod common;

use charpool_reader::charpool::format::header::check_magic;
use charpool_reader::{CharPoolError, Cursor, PropertyValue, decode};
use common::*;

#[test]
fn groups_properties_into_characters_in_order() {
    let bytes = pool(
        2,
        &[
            character(&[int_prop("A", 1), str_prop("B", "two")]),
            character(&[bool_prop("C", 1)]),
        ],
    );

    let pool = decode(&bytes).expect("pool decodes");

    assert_eq!(pool.declared_count(), Some(2));
    assert_eq!(pool.len(), 2);

    let first = &pool.characters()[0];
    assert_eq!(first.names().collect::<Vec<_>>(), ["A", "B"]);
    assert_eq!(first.get("A").map(|p| &p.value), Some(&PropertyValue::Int { value: 1 }));
    assert_eq!(first.get("B").and_then(|p| p.value.as_str()), Some("two"));

    let second = &pool.characters()[1];
    assert_eq!(second.len(), 1);
    assert_eq!(second.get("C").and_then(|p| p.value.as_bool()), Some(true));
}

#[test]
fn decoding_is_deterministic() {
    let bytes = pool(
        1,
        &[character(&[
            str_prop("strFirstName", "Jane"),
            struct_prop("kAppearance", "TAppearance", &name_prop("nmHead", "LatFem_C", 0)),
        ])],
    );

    assert_eq!(decode(&bytes).expect("first"), decode(&bytes).expect("second"));
}

#[test]
fn bad_magic_is_rejected_without_consuming() {
    let mut bytes = pool(0, &[]);
    bytes[0] = 0xFE;

    match decode(&bytes) {
        Err(CharPoolError::MagicMismatch { found }) => assert_eq!(found, 0xFFFF_FFFE),
        other => panic!("expected MagicMismatch, got {:?}", other),
    }

    let mut cursor = Cursor::new(&bytes);
    assert!(check_magic(&mut cursor).is_err());
    assert_eq!(cursor.position(), 0);
}

#[test]
fn truncated_magic_is_out_of_bounds() {
    assert!(matches!(
        decode(&[0xFF, 0xFF]),
        Err(CharPoolError::OutOfBounds { offset: 0, requested: 4, remaining: 2 })
    ));
}

#[test]
fn magic_only_yields_empty_pool() {
    let pool = decode(&u32le(0xFFFF_FFFF)).expect("pool decodes");

    assert!(pool.is_empty());
    assert_eq!(pool.declared_count(), None);
}

#[test]
fn unterminated_character_is_discarded() {
    let mut bytes = pool(2, &[character(&[int_prop("A", 1)])]);
    bytes.extend(str_prop("strFirstName", "Lost"));

    let pool = decode(&bytes).expect("pool decodes");

    assert_eq!(pool.declared_count(), Some(2));
    assert_eq!(pool.len(), 1);
    assert!(pool.characters()[0].get("strFirstName").is_none());
}

#[test]
fn declared_count_is_not_enforced() {
    let bytes = pool(5, &[character(&[int_prop("A", 1)])]);
    let pool = decode(&bytes).expect("pool decodes");

    assert_eq!(pool.declared_count(), Some(5));
    assert_eq!(pool.len(), 1);
}

#[test]
fn consecutive_terminators_emit_an_empty_character() {
    let bytes = pool(2, &[character(&[]), character(&[int_prop("A", 1)])]);
    let pool = decode(&bytes).expect("pool decodes");

    assert_eq!(pool.len(), 2);
    assert!(pool.characters()[0].is_empty());
}

#[test]
fn repeated_name_keeps_later_value_in_first_position() {
    let bytes = pool(
        1,
        &[character(&[int_prop("A", 1), int_prop("B", 2), int_prop("A", 3)])],
    );
    let pool = decode(&bytes).expect("pool decodes");
    let character = &pool.characters()[0];

    assert_eq!(character.names().collect::<Vec<_>>(), ["A", "B"]);
    assert_eq!(character.get("A").and_then(|p| p.value.as_int()), Some(3));
}

#[test]
fn property_before_count_is_malformed() {
    let bytes = [u32le(0xFFFF_FFFF), int_prop("A", 1), terminator(), u32le(0)].concat();

    match decode(&bytes) {
        Err(CharPoolError::MalformedStream { offset, .. }) => assert_eq!(offset, 4),
        other => panic!("expected MalformedStream, got {:?}", other),
    }
}

#[test]
fn missing_count_is_out_of_bounds() {
    let bytes = [u32le(0xFFFF_FFFF), terminator()].concat();

    assert!(matches!(
        decode(&bytes),
        Err(CharPoolError::OutOfBounds { requested: 4, remaining: 0, .. })
    ));
}

#[test]
fn errors_inside_characters_report_absolute_offsets() {
    let prefix = pool(1, &[]);
    let bad = header("Mystery", "FooProperty", 0);
    let bytes = [prefix.clone(), bad].concat();

    match decode(&bytes) {
        Err(CharPoolError::UnknownPropertyType { type_name, offset }) => {
            assert_eq!(type_name, "FooProperty");
            assert_eq!(offset, prefix.len() + text("Mystery").len() + 4);
        }
        other => panic!("expected UnknownPropertyType, got {:?}", other),
    }
}

#[test]
fn error_messages_use_hex_offsets() {
    let err = CharPoolError::UnexpectedReservedValue { offset: 0x1c, value: 5 };
    assert_eq!(err.to_string(), "Expected zero padding at offset 0x1c, found 0x00000005");
}
