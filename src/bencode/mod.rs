//! Bencode primitives.
//!
//! Byte-level decoding of the bencode grammar used by `.torrent` files:
//! integers (`i42e`), byte strings (`4:spam`), lists (`l...e`) and
//! dictionaries (`d...e`).
//!
//! Every read goes through a [`ByteCursor`](structs::byte_cursor::ByteCursor),
//! which carries both the current position and the end bound of the caller
//! owned buffer. Nothing at this layer allocates except
//! [`decode_value`](bencode::decode_value), which materializes list and
//! dictionary containers while still borrowing every byte string.
//!
//! # Example
//!
//! ```rust
//! use rawbit::bencode::bencode::{find_key, read_integer};
//! use rawbit::bencode::structs::byte_cursor::ByteCursor;
//!
//! let data = b"d3:agei42e4:name3:fooe";
//! let cursor = ByteCursor::at(data, 1);
//! let mut value = find_key(&cursor, b"age").unwrap().unwrap();
//! assert_eq!(read_integer(&mut value).unwrap(), 42);
//! ```

/// Bencode read, skip and lookup functions.
#[allow(clippy::module_inception)]
pub mod bencode;

/// Bencode enumerations (errors, decoded values).
pub mod enums;

/// Implementation blocks for bencode types.
pub mod impls;

/// Bencode data structures (cursor, borrowed byte strings).
pub mod structs;

/// Unit tests for the bencode primitives.
pub mod tests;
