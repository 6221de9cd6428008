use crate::bencode::structs::byte_str::ByteStr;

/// A fully decoded bencode value.
///
/// Byte strings and dictionary keys borrow from the source buffer.
/// Dictionaries keep their entries in declared order; lookups are a linear
/// scan and never assume the keys are sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BencodeValue<'a> {
    Integer(i64),
    ByteString(ByteStr<'a>),
    List(Vec<BencodeValue<'a>>),
    Dictionary(Vec<(ByteStr<'a>, BencodeValue<'a>)>),
}
