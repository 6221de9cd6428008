//! Metainfo data structures.

/// One fallback-priority tier of tracker URLs.
pub mod announce_tier;

/// Capacity ceilings applied while decoding.
pub mod decode_limits;

/// 20-byte SHA-1 digest of the raw `info` dictionary.
pub mod info_hash;

/// The validated torrent descriptor.
pub mod torrent;

/// A single file within a torrent.
pub mod torrent_file;
