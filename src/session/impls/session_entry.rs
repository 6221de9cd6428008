use log::info;
use crate::session::enums::torrent_state::TorrentState;
use crate::session::session::{DOWNLOAD_RATE, PROGRESS_BELOW_COMPLETE, TICK_STEPS, UPLOAD_RATE};
use crate::session::structs::session_entry::SessionEntry;
use crate::session::structs::torrent_status::TorrentStatus;

impl SessionEntry {
    pub fn state(&self) -> TorrentState {
        TorrentState::from_flags(self.paused, self.complete)
    }

    pub fn status(&self) -> TorrentStatus {
        TorrentStatus {
            id: self.id,
            name: self.name.clone(),
            magnet: self.magnet_uri.clone(),
            progress: self.progress,
            size: self.size,
            downloaded: self.downloaded,
            download_rate: self.download_rate,
            upload_rate: self.upload_rate,
            paused: self.paused,
            complete: self.complete,
        }
    }

    /// One simulated transfer step. Only downloading entries progress;
    /// rates are refreshed for every entry.
    pub(crate) fn tick(&mut self) {
        if !self.paused && !self.complete {
            let step = (self.size / TICK_STEPS).max(1);
            self.downloaded = self.downloaded.saturating_add(step).min(self.size);
            if self.downloaded >= self.size {
                self.complete = true;
                self.progress = 1.0;
                info!("[SESSION] Torrent {} '{}' completed", self.id, self.name);
            } else {
                self.progress = ((self.downloaded as f64 / self.size as f64) as f32).min(PROGRESS_BELOW_COMPLETE);
            }
        }
        self.refresh_rates();
    }

    pub(crate) fn refresh_rates(&mut self) {
        let (download_rate, upload_rate) = match self.state() {
            TorrentState::Downloading => (DOWNLOAD_RATE, 0),
            TorrentState::Seeding => (0, UPLOAD_RATE),
            TorrentState::Paused => (0, 0),
        };
        self.download_rate = download_rate;
        self.upload_rate = upload_rate;
    }
}
