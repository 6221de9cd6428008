use serde::Serialize;
use crate::metainfo::enums::decode_warning::DecodeWarning;
use crate::metainfo::structs::announce_tier::AnnounceTier;
use crate::metainfo::structs::info_hash::InfoHash;
use crate::metainfo::structs::torrent_file::TorrentFile;

/// A decoded and validated `.torrent` descriptor.
///
/// Built in one piece by [`decode_torrent`](crate::metainfo::metainfo::decode_torrent);
/// a value of this type is always complete.
///
/// # Invariants
///
/// - `pieces.len() == piece_count * 20`
/// - `total_size` is the sum of `files[..].length`
/// - `files` is never empty for a single-file torrent
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Torrent {
    pub name: String,
    pub info_hash: InfoHash,
    pub piece_length: u32,
    #[serde(skip_serializing)]
    pub pieces: Vec<u8>,
    pub piece_count: usize,
    pub total_size: u64,
    pub files: Vec<TorrentFile>,
    /// Set when the info dictionary carried `length` rather than `files`.
    pub single_file: bool,
    pub announce: Option<String>,
    pub announce_list: Vec<AnnounceTier>,
    pub comment: Option<String>,
    pub created_by: Option<String>,
    pub creation_date: Option<i64>,
    pub encoding: Option<String>,
    pub private: bool,
    #[serde(skip_serializing)]
    pub warnings: Vec<DecodeWarning>,
}
