use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    pub torrent_count: usize,
    /// Entries neither paused nor complete.
    #[serde(rename = "active")]
    pub active_count: usize,
    pub download_rate: u64,
    pub upload_rate: u64,
}
