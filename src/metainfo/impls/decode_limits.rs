use crate::metainfo::structs::decode_limits::DecodeLimits;

impl Default for DecodeLimits {
    fn default() -> Self {
        DecodeLimits {
            max_files: 256,
            max_path_components: 16,
            max_announce_tiers: 10,
            max_trackers_per_tier: 10,
            max_name_length: 255,
            max_url_length: 511,
            max_piece_count: 4_194_304,
        }
    }
}
