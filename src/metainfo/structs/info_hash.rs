//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// The SHA-1 digest of the exact bytes of the bencoded `info` dictionary,
/// including its `d` and `e` delimiters. It identifies a torrent across the
/// BitTorrent network.
///
/// # Example
///
/// ```rust
/// use rawbit::metainfo::structs::info_hash::InfoHash;
///
/// let hash = InfoHash([0u8; 20]);
/// assert_eq!(hash.to_string(), "0000000000000000000000000000000000000000");
/// ```
///
/// # Serialization
///
/// Serialized as a 40 character lowercase hexadecimal string.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
