use crate::bencode::enums::bencode_value::BencodeValue;
use crate::bencode::structs::byte_str::ByteStr;

impl<'a> BencodeValue<'a> {
    /// First value stored under `key`, if this is a dictionary.
    pub fn get(&self, key: &[u8]) -> Option<&BencodeValue<'a>> {
        match self {
            BencodeValue::Dictionary(entries) => entries
                .iter()
                .find(|(entry_key, _)| entry_key.as_bytes() == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            BencodeValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_byte_str(&self) -> Option<ByteStr<'a>> {
        match self {
            BencodeValue::ByteString(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[BencodeValue<'a>]> {
        match self {
            BencodeValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&[(ByteStr<'a>, BencodeValue<'a>)]> {
        match self {
            BencodeValue::Dictionary(entries) => Some(entries),
            _ => None,
        }
    }
}
