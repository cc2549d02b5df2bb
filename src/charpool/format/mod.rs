//! Wire format decoding layer for character pool files.
//!
//! This module sits between the byte-level [`Cursor`](crate::charpool::cursor::Cursor)
//! and the entry point in [`reader`](crate::charpool::reader).
//!
//! # Module Organization
//!
//! - [`header`]: Validates the 4-byte magic
//! - [`property`]: Decodes one tagged property, recursing into struct bodies
//! - [`pool`]: Groups top-level properties into characters
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌──────────────────────┐
//! │  Magic FF FF FF FF   │ ← header::check_magic()
//! ├──────────────────────┤
//! │  Pool properties     │
//! │  None + u32 count    │ ← pool::assemble()
//! ├──────────────────────┤
//! │  Character 1 ... None│ ← property::decode_property()
//! │  Character 2 ... None│
//! │  ...                 │
//! └──────────────────────┘
//! ```

pub mod header;
pub mod pool;
pub mod property;
