use serde::{Deserialize, Serialize};

/// One file of a torrent.
///
/// For single-file torrents the only entry has the torrent name as its sole
/// path component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentFile {
    pub length: u64,
    pub path: Vec<String>,
}
