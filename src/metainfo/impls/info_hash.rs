use std::fmt;
use std::fmt::Formatter;
use sha1::{Digest, Sha1};
use crate::metainfo::structs::info_hash::InfoHash;

impl InfoHash {
    /// SHA-1 of the raw bencoded `info` dictionary bytes.
    pub fn from_info_bytes(info: &[u8]) -> InfoHash {
        let digest = Sha1::digest(info);
        let mut hash = InfoHash([0u8; 20]);
        hash.0.copy_from_slice(digest.as_slice());
        hash
    }
}

impl fmt::Display for InfoHash {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl std::str::FromStr for InfoHash {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut result = InfoHash([0u8; 20]);
        hex::decode_to_slice(s, &mut result.0)?;
        Ok(result)
    }
}

impl From<[u8; 20]> for InfoHash {
    fn from(data: [u8; 20]) -> Self {
        InfoHash(data)
    }
}

impl serde::ser::Serialize for InfoHash {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::de::Deserialize<'de> for InfoHash {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        struct InfoHashVisitor;

        impl serde::de::Visitor<'_> for InfoHashVisitor {
            type Value = InfoHash;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("a 40 character hex string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse::<InfoHash>().map_err(|error| E::custom(format!("invalid info hash: {error}")))
            }
        }

        des.deserialize_str(InfoHashVisitor)
    }
}
