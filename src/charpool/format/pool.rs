//! Grouping of top-level properties into characters.
//!
//! The top level of a pool file is a flat property stream:
//!
//! ```text
//! [pool properties...] None [u32 count]
//! [character 1 properties...] None
//! [character 2 properties...] None
//! ...
//! ```
//!
//! The first terminator closes the pool header and is followed by the declared
//! character count. Every later terminator closes one character.

use log::{debug, info};

use crate::charpool::cursor::Cursor;
use crate::charpool::format::property::decode_property;
use crate::charpool::types::error::{CharPoolError, Result};
use crate::charpool::types::models::{Character, CharacterPool, Property};

/// Where the assembler is in the top-level stream.
#[derive(Debug)]
enum AssemblyState {
    /// Before the first terminator; the count field has not been read.
    AwaitingCount,
    /// Collecting properties for the character being built.
    InCharacter(Character),
}

impl AssemblyState {
    /// Applies one decoded property and returns the next state.
    ///
    /// `offset` is where `property` started, used for error reporting.
    fn step(
        self,
        property: Property,
        offset: usize,
        cursor: &mut Cursor<'_>,
        pool: &mut CharacterPool,
    ) -> Result<Self> {
        match (self, property) {
            (AssemblyState::AwaitingCount, Property::Terminator) => {
                let count = cursor.read_u32()?;
                info!("Declared character count: {}", count);
                pool.declared_count = Some(count);
                Ok(AssemblyState::InCharacter(Character::new()))
            }
            (AssemblyState::AwaitingCount, Property::Named(p)) => Err(CharPoolError::MalformedStream {
                offset,
                reason: format!("property '{}' appears before the character count", p.name),
            }),
            (AssemblyState::InCharacter(current), Property::Terminator) => {
                debug!(
                    "Character {} complete: {} properties",
                    pool.characters.len(),
                    current.len()
                );
                pool.characters.push(current);
                Ok(AssemblyState::InCharacter(Character::new()))
            }
            (AssemblyState::InCharacter(mut current), Property::Named(p)) => {
                if let Some(previous) = current.insert(p) {
                    debug!("Property '{}' repeated at {:#x}, keeping the later value", previous.name, offset);
                }
                Ok(AssemblyState::InCharacter(current))
            }
        }
    }
}

/// Decodes properties until the cursor is exhausted and groups them into characters.
///
/// Properties after the last terminator are dropped, and the declared count
/// is not compared with the number of characters found.
pub fn assemble(cursor: &mut Cursor<'_>) -> Result<CharacterPool> {
    let mut pool = CharacterPool::default();
    let mut state = AssemblyState::AwaitingCount;

    while !cursor.at_end() {
        let offset = cursor.absolute_offset();
        let property = decode_property(cursor)?;
        state = state.step(property, offset, cursor, &mut pool)?;
    }

    if let AssemblyState::InCharacter(current) = state
        && !current.is_empty()
    {
        debug!(
            "Stream ended inside a character; discarding {} unterminated properties",
            current.len()
        );
    }

    Ok(pool)
}
