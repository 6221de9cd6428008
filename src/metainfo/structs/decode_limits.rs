use serde::{Deserialize, Serialize};

/// Capacity ceilings applied while decoding metainfo.
///
/// Overflowing `max_name_length` or `max_piece_count` is fatal because the
/// name and piece table are required data. The other limits truncate with a
/// warning.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct DecodeLimits {
    pub max_files: usize,
    pub max_path_components: usize,
    pub max_announce_tiers: usize,
    pub max_trackers_per_tier: usize,
    pub max_name_length: usize,
    pub max_url_length: usize,
    pub max_piece_count: usize,
}
