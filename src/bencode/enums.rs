//! Bencode enumerations.

/// Errors raised while reading bencoded data.
pub mod bencode_error;

/// A decoded bencode value borrowing from the source buffer.
pub mod bencode_value;
