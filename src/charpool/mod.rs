//! Core character pool decoder

pub mod cursor;
pub mod format;
pub mod reader;
pub mod types;

pub use reader::{decode, decode_file};
pub use types::error::{CharPoolError, Result};
