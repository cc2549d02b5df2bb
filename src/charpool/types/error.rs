//! Custom error types for the charpool-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Every variant is fatal: decoding stops at the first failure. Offsets are
/// absolute positions in the full input buffer, also for failures raised
/// while decoding the body of a struct property.
#[derive(Debug, Error)]
pub enum CharPoolError {
    /// An error originating from I/O operations (path-based entry point only).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A read requested more bytes than remain in the current cursor.
    #[error("Out of bounds at offset {offset:#x}: requested {requested} bytes, but only {remaining} remain")]
    OutOfBounds {
        offset: usize,
        requested: usize,
        remaining: usize,
    },

    /// The first four bytes of the file are not `FF FF FF FF`.
    #[error("Magic mismatch: expected 0xffffffff, found {found:#010x}")]
    MagicMismatch { found: u32 },

    /// A field that must be zero held something else.
    #[error("Expected zero padding at offset {offset:#x}, found {value:#010x}")]
    UnexpectedReservedValue { offset: usize, value: u32 },

    /// A property type tag with no known decoding rule.
    #[error("Unknown property type '{type_name}' at offset {offset:#x}")]
    UnknownPropertyType { type_name: String, offset: usize },

    /// The top-level property stream violated the pool layout.
    #[error("Malformed stream at offset {offset:#x}: {reason}")]
    MalformedStream { offset: usize, reason: String },
}

/// A convenience `Result` type alias using the crate's `CharPoolError` type.
pub type Result<T> = std::result::Result<T, CharPoolError>;
