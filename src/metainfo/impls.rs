//! Implementation blocks for metainfo types.

pub mod announce_tier;
pub mod capacity_kind;
pub mod decode_limits;
pub mod info_hash;
pub mod torrent;
pub mod torrent_file;
