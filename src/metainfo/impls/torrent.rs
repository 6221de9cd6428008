use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use crate::metainfo::structs::torrent::Torrent;

const MAGNET_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

impl Torrent {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn announce_tier_count(&self) -> usize {
        self.announce_list.len()
    }

    pub fn is_single_file(&self) -> bool {
        self.single_file
    }

    /// SHA-1 hash of piece `index`.
    pub fn piece_hash(&self, index: usize) -> Option<&[u8; 20]> {
        let start = index.checked_mul(20)?;
        let slice = self.pieces.get(start..start.checked_add(20)?)?;
        <&[u8; 20]>::try_from(slice).ok()
    }

    pub fn piece_hashes(&self) -> impl Iterator<Item = &[u8]> {
        self.pieces.chunks_exact(20)
    }

    /// Size in bytes of piece `index`; only the last piece may be shorter
    /// than `piece_length`.
    pub fn piece_size(&self, index: usize) -> Option<u64> {
        if index >= self.piece_count {
            return None;
        }
        let piece_length = u64::from(self.piece_length);
        if index + 1 < self.piece_count {
            return Some(piece_length);
        }
        let preceding = piece_length.saturating_mul(index as u64);
        Some(self.total_size.saturating_sub(preceding).min(piece_length))
    }

    /// Every tracker URL in priority order: `announce` first, then the
    /// tiers of `announce-list`, without duplicates.
    pub fn trackers(&self) -> Vec<&str> {
        let mut trackers: Vec<&str> = Vec::new();
        let candidates = self
            .announce
            .as_deref()
            .into_iter()
            .chain(self.announce_list.iter().flat_map(|tier| tier.iter()));
        for url in candidates {
            if !trackers.contains(&url) {
                trackers.push(url);
            }
        }
        trackers
    }

    /// `magnet:` URI carrying the info hash, display name and trackers.
    pub fn magnet_link(&self) -> String {
        let mut link = format!("magnet:?xt=urn:btih:{}", self.info_hash);
        link.push_str("&dn=");
        link.push_str(&utf8_percent_encode(&self.name, MAGNET_COMPONENT).to_string());
        for tracker in self.trackers() {
            link.push_str("&tr=");
            link.push_str(&utf8_percent_encode(tracker, MAGNET_COMPONENT).to_string());
        }
        link
    }
}
