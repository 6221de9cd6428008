use thiserror::Error;

/// Grammar violations found while reading bencode.
///
/// Every variant carries the byte offset (from the start of the buffer) at
/// which the problem was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BencodeError {
    #[error("truncated input at offset {offset}")]
    TruncatedInput { offset: usize },

    #[error("malformed byte string length at offset {offset}")]
    MalformedLength { offset: usize },

    #[error("malformed integer at offset {offset}")]
    MalformedInteger { offset: usize },

    #[error("malformed structure at offset {offset}: {reason}")]
    MalformedStructure { offset: usize, reason: &'static str },
}
