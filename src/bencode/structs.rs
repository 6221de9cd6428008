//! Bencode data structures.

/// Bounds-checked read position within an immutable byte buffer.
pub mod byte_cursor;

/// Borrowed view of a bencoded byte string.
pub mod byte_str;
