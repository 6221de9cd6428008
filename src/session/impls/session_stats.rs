use crate::session::structs::session_entry::SessionEntry;
use crate::session::structs::session_stats::SessionStats;

impl SessionStats {
    pub fn from_entries<'a, I: IntoIterator<Item = &'a SessionEntry>>(entries: I) -> SessionStats {
        entries.into_iter().fold(SessionStats::default(), |mut stats, entry| {
            stats.torrent_count += 1;
            if entry.state().is_active() {
                stats.active_count += 1;
            }
            stats.download_rate = stats.download_rate.saturating_add(entry.download_rate);
            stats.upload_rate = stats.upload_rate.saturating_add(entry.upload_rate);
            stats
        })
    }
}
