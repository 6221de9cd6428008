use crate::bencode::enums::bencode_error::BencodeError;

impl BencodeError {
    /// Byte offset at which the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            BencodeError::TruncatedInput { offset }
            | BencodeError::MalformedLength { offset }
            | BencodeError::MalformedInteger { offset }
            | BencodeError::MalformedStructure { offset, .. } => *offset,
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, BencodeError::TruncatedInput { .. })
    }
}
