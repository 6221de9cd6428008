use crate::session::enums::torrent_state::TorrentState;
use crate::session::structs::torrent_status::TorrentStatus;

impl TorrentStatus {
    pub fn state(&self) -> TorrentState {
        TorrentState::from_flags(self.paused, self.complete)
    }
}
