use serde::Serialize;
use thiserror::Error;
use crate::metainfo::enums::capacity_kind::CapacityKind;

/// Non-fatal problems found while decoding.
///
/// Each warning is logged when it is raised and kept on the decoded torrent.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DecodeWarning {
    #[error("capacity exceeded for {kind}: kept {limit}, dropped {dropped}")]
    CapacityExceeded { kind: CapacityKind, limit: usize, dropped: usize },

    #[error("tracker URL of {length} bytes dropped, limit is {limit}")]
    UrlTooLong { length: usize, limit: usize },

    #[error("total size {total_size} does not match {piece_count} pieces of {piece_length} bytes")]
    SizeMismatch { total_size: u64, piece_count: usize, piece_length: u32 },

    #[error("{remaining} trailing bytes after root dictionary at offset {offset}")]
    TrailingData { offset: usize, remaining: usize },

    #[error("duplicate 'info' dictionary at offset {offset} ignored")]
    DuplicateInfoDictionary { offset: usize },
}
