use crate::bencode::enums::bencode_error::BencodeError;
use crate::bencode::structs::byte_cursor::ByteCursor;

impl<'a> ByteCursor<'a> {
    /// Cursor at the start of `buffer`.
    pub fn new(buffer: &'a [u8]) -> ByteCursor<'a> {
        ByteCursor { buffer, position: 0 }
    }

    /// Cursor at `position` within `buffer`. A position past the end is
    /// allowed; the first read from it reports `TruncatedInput`.
    pub fn at(buffer: &'a [u8], position: usize) -> ByteCursor<'a> {
        ByteCursor { buffer, position }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn buffer(&self) -> &'a [u8] {
        self.buffer
    }

    /// Exclusive end bound of the buffer.
    pub fn end(&self) -> usize {
        self.buffer.len()
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the byte under the cursor without consuming it.
    pub fn peek(&self) -> Result<u8, BencodeError> {
        self.buffer
            .get(self.position)
            .copied()
            .ok_or(BencodeError::TruncatedInput { offset: self.position })
    }

    /// Moves the cursor forward by `count` bytes, which must all be in bounds.
    pub fn advance_by(&mut self, count: usize) -> Result<(), BencodeError> {
        if count > self.remaining() {
            return Err(BencodeError::TruncatedInput { offset: self.position });
        }
        self.position += count;
        Ok(())
    }

    /// Consumes and returns the next `count` bytes.
    pub fn take(&mut self, count: usize) -> Result<&'a [u8], BencodeError> {
        let start = self.position;
        self.advance_by(count)?;
        self.buffer
            .get(start..self.position)
            .ok_or(BencodeError::TruncatedInput { offset: start })
    }

    /// Consumes `expected` or fails with `MalformedStructure` describing `reason`.
    pub fn expect_byte(&mut self, expected: u8, reason: &'static str) -> Result<(), BencodeError> {
        if self.peek()? != expected {
            return Err(BencodeError::MalformedStructure { offset: self.position, reason });
        }
        self.advance_by(1)
    }
}
