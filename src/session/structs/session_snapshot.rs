use serde::Serialize;
use crate::session::structs::session_stats::SessionStats;
use crate::session::structs::torrent_status::TorrentStatus;

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct SessionSnapshot {
    pub stats: SessionStats,
    pub torrents: Vec<TorrentStatus>,
}
