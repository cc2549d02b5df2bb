//! # charpool-reader
//!
//! A reader for XCOM 2 character pool files (`CharacterPool/*.bin`).
//!
//! A pool file is a 4-byte magic followed by a flat stream of tagged
//! Unreal-style properties. Struct properties embed nested property streams.
//! Terminator properties (`"None"`) split the stream into a pool header and
//! one group per character.
//!
//! Decoding only; there is no writer.
//!
//! ```no_run
//! let pool = charpool_reader::decode_file("CharacterPool/Importable/Soldiers.bin").unwrap();
//! for character in &pool {
//!     if let Some(first) = character.get("strFirstName") {
//!         println!("{:?}", first.value.as_str());
//!     }
//! }
//! ```
pub mod charpool;

// Re-export the main types for convenience
pub use charpool::{
    CharPoolError,
    Result,
    decode,
    decode_file,
    cursor::Cursor,
    types::models::{
        Character,
        CharacterPool,
        NamedProperty,
        Property,
        PropertyKind,
        PropertyValue,
    },
};
