use std::fmt;
use crate::session::enums::torrent_state::TorrentState;

impl TorrentState {
    /// Paused wins over complete; a complete entry that is not paused seeds.
    pub fn from_flags(paused: bool, complete: bool) -> TorrentState {
        match (paused, complete) {
            (true, _) => TorrentState::Paused,
            (false, true) => TorrentState::Seeding,
            (false, false) => TorrentState::Downloading,
        }
    }

    pub fn is_active(&self) -> bool {
        *self == TorrentState::Downloading
    }
}

impl fmt::Display for TorrentState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TorrentState::Downloading => write!(f, "downloading"),
            TorrentState::Seeding => write!(f, "seeding"),
            TorrentState::Paused => write!(f, "paused"),
        }
    }
}
