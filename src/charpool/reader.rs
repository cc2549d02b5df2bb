//! Decode entry points: in-memory buffers and files on disk.

use std::fs;
use std::path::Path;

use log::info;

use super::cursor::Cursor;
use super::format;
use super::types::error::Result;
use super::types::models::CharacterPool;

/// Decodes a complete character pool held in memory.
///
/// Checks the magic, then groups the remaining property stream into
/// characters. The first failure aborts the whole decode.
///
/// # Errors
/// Returns an error if:
/// - The buffer does not start with `FF FF FF FF`
/// - A read runs past the end of the buffer or of a struct body
/// - A reserved field is non-zero
/// - A property has an unknown type tag
/// - A named property appears before the character count
pub fn decode(buffer: &[u8]) -> Result<CharacterPool> {
    info!("Decoding character pool: {} bytes", buffer.len());
    let mut cursor = Cursor::new(buffer);

    format::header::check_magic(&mut cursor)?;
    let pool = format::pool::assemble(&mut cursor)?;

    info!(
        "Character pool decoded: {} characters (declared {:?})",
        pool.len(),
        pool.declared_count()
    );
    Ok(pool)
}

/// Reads a character pool file from the given path and decodes it.
pub fn decode_file(path: impl AsRef<Path>) -> Result<CharacterPool> {
    let path = path.as_ref();
    info!("Opening character pool file: {}", path.display());
    let buffer = fs::read(path)?;
    decode(&buffer)
}
