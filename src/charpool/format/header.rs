//! Character pool file header.

use log::trace;

use crate::charpool::cursor::Cursor;
use crate::charpool::types::error::{CharPoolError, Result};

/// Every character pool starts with this little-endian `u32`.
pub const MAGIC: u32 = 0xFFFF_FFFF;

/// Validates the magic at the cursor position and moves past it.
///
/// On mismatch the cursor is left where it was.
pub fn check_magic(cursor: &mut Cursor<'_>) -> Result<()> {
    let found = cursor.peek_u32()?;
    trace!("Magic: {:#010x}", found);
    if found != MAGIC {
        return Err(CharPoolError::MagicMismatch { found });
    }
    cursor.read_u32()?;
    Ok(())
}
