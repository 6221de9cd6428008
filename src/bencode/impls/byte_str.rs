use std::borrow::Cow;
use std::fmt;
use crate::bencode::structs::byte_str::ByteStr;

impl<'a> ByteStr<'a> {
    pub fn new(bytes: &'a [u8], offset: usize) -> ByteStr<'a> {
        ByteStr { bytes, offset }
    }

    /// Offset of the first payload byte in the source buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// UTF-8 view of the payload; invalid sequences become U+FFFD.
    pub fn to_string_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.bytes)
    }
}

impl PartialEq<[u8]> for ByteStr<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl fmt::Display for ByteStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}
