//! Low-level byte reading primitives over a borrowed buffer.
//!
//! All multi-byte fields are little-endian. A [`Cursor`] only moves forward;
//! nested struct bodies are read through a bounded sub-cursor obtained with
//! [`Cursor::slice`], which can never read past the struct's declared extent.

use byteorder::{ByteOrder, LittleEndian};

use super::types::error::{CharPoolError, Result};

/// A forward-only reader over a byte slice.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
    /// Absolute offset of `data[0]` in the top-level buffer, for error reporting.
    base: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0, base: 0 }
    }

    /// Current read position relative to this cursor's start.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Current read position in the top-level buffer.
    pub fn absolute_offset(&self) -> usize {
        self.base + self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn at_end(&self) -> bool {
        self.pos == self.data.len()
    }

    /// Borrows the next `len` bytes without advancing.
    fn peek(&self, len: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(CharPoolError::OutOfBounds {
                offset: self.absolute_offset(),
                requested: len,
                remaining,
            });
        }
        let data = self.data;
        Ok(&data[self.pos..self.pos + len])
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let bytes = self.peek(len)?;
        self.pos += len;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    /// Reads a `u32` without consuming it.
    pub fn peek_u32(&self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.peek(4)?))
    }

    /// Consumes a 4-byte field that must be zero.
    pub fn read_reserved_zero(&mut self) -> Result<()> {
        let offset = self.absolute_offset();
        let value = self.read_u32()?;
        if value != 0 {
            return Err(CharPoolError::UnexpectedReservedValue { offset, value });
        }
        Ok(())
    }

    /// Reads a `u32` length `L` followed by `L` bytes of text.
    ///
    /// The last of the `L` bytes is the null terminator and is not part of the
    /// returned string, but the cursor still moves past all `L` bytes. Invalid
    /// UTF-8 is replaced rather than rejected. `L == 0` yields an empty string.
    pub fn read_length_prefixed_text(&mut self) -> Result<String> {
        let len = self.read_u32()? as usize;
        let bytes = self.take(len)?;
        let text = &bytes[..len.saturating_sub(1)];
        Ok(String::from_utf8_lossy(text).into_owned())
    }

    /// Splits off a sub-cursor over the next `len` bytes and skips them here.
    pub fn slice(&mut self, len: usize) -> Result<Cursor<'a>> {
        let base = self.absolute_offset();
        let data = self.take(len)?;
        Ok(Cursor { data, pos: 0, base })
    }
}
