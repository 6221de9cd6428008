//! Implementation blocks for bencode types.

pub mod bencode_error;
pub mod bencode_value;
pub mod byte_cursor;
pub mod byte_str;
