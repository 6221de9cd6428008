use crate::session::structs::session_snapshot::SessionSnapshot;
use crate::session::structs::torrent_status::TorrentStatus;

impl SessionSnapshot {
    pub fn get(&self, id: u64) -> Option<&TorrentStatus> {
        self.torrents.iter().find(|torrent| torrent.id == id)
    }

    /// Serializes to `{"stats": {...}, "torrents": [...]}`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
