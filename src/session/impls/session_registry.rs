use std::collections::BTreeMap;
use log::{debug, info};
use parking_lot::Mutex;
use crate::common::common::truncate_at_char_boundary;
use crate::session::enums::session_error::SessionError;
use crate::session::session::{derive_display_name, MAX_MAGNET_LENGTH};
use crate::session::structs::add_torrent_options::AddTorrentOptions;
use crate::session::structs::registry_state::RegistryState;
use crate::session::structs::session_entry::SessionEntry;
use crate::session::structs::session_registry::SessionRegistry;
use crate::session::structs::session_snapshot::SessionSnapshot;
use crate::session::structs::session_stats::SessionStats;
use crate::session::structs::torrent_status::TorrentStatus;

impl SessionRegistry {
    pub fn new(default_size: u64) -> SessionRegistry {
        SessionRegistry {
            state: Mutex::new(RegistryState {
                next_id: 1,
                entries: BTreeMap::new(),
                closed: false,
            }),
            default_size,
        }
    }

    pub fn default_size(&self) -> u64 {
        self.default_size
    }

    /// Registers a new entry and returns its id.
    ///
    /// Ids start at 1 and are never handed out twice, even after removal.
    pub fn add_torrent(&self, options: AddTorrentOptions) -> Result<u64, SessionError> {
        let name = derive_display_name(&options);
        let magnet_uri = Some(options.magnet_uri.as_str())
            .filter(|magnet_uri| !magnet_uri.is_empty())
            .map(|magnet_uri| truncate_at_char_boundary(magnet_uri, MAX_MAGNET_LENGTH).to_string());
        let size = options.size_bytes.filter(|size| *size > 0).unwrap_or(self.default_size);

        let mut state = self.state.lock();
        if state.closed {
            return Err(SessionError::Unavailable);
        }
        let id = state.next_id;
        state.next_id += 1;
        info!("[SESSION] Added torrent {} '{}' ({} bytes)", id, name, size);
        state.entries.insert(id, SessionEntry {
            id,
            name,
            magnet_uri,
            size,
            downloaded: 0,
            download_rate: 0,
            upload_rate: 0,
            progress: 0.0,
            paused: false,
            complete: false,
        });
        Ok(id)
    }

    /// Stops progress and zeroes the rates of `id`. Pausing twice is fine.
    pub fn pause_torrent(&self, id: u64) -> Result<(), SessionError> {
        self.with_entry(id, |entry| {
            entry.paused = true;
            entry.refresh_rates();
            debug!("[SESSION] Paused torrent {}", id);
        })
    }

    /// Clears the paused flag of `id`; a complete entry is left untouched.
    pub fn resume_torrent(&self, id: u64) -> Result<(), SessionError> {
        self.with_entry(id, |entry| {
            if entry.complete {
                return;
            }
            entry.paused = false;
            entry.refresh_rates();
            debug!("[SESSION] Resumed torrent {}", id);
        })
    }

    pub fn remove_torrent(&self, id: u64) -> Result<(), SessionError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SessionError::Unavailable);
        }
        match state.entries.remove(&id) {
            None => Err(SessionError::NotFound(id)),
            Some(entry) => {
                info!("[SESSION] Removed torrent {} '{}'", id, entry.name);
                Ok(())
            }
        }
    }

    /// Advances every downloading entry by one step.
    pub fn tick(&self) {
        let mut state = self.state.lock();
        if state.closed {
            return;
        }
        for entry in state.entries.values_mut() {
            entry.tick();
        }
    }

    /// Copies every entry plus freshly computed aggregates.
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.lock();
        SessionSnapshot {
            stats: SessionStats::from_entries(state.entries.values()),
            torrents: state.entries.values().map(SessionEntry::status).collect(),
        }
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats::from_entries(self.state.lock().entries.values())
    }

    pub fn get(&self, id: u64) -> Option<TorrentStatus> {
        self.state.lock().entries.get(&id).map(SessionEntry::status)
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().entries.is_empty()
    }

    /// Rejects further changes. Entries stay readable through snapshots.
    pub fn close(&self) {
        self.state.lock().closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    fn with_entry<F: FnOnce(&mut SessionEntry)>(&self, id: u64, update: F) -> Result<(), SessionError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SessionError::Unavailable);
        }
        let entry = state.entries.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        update(entry);
        Ok(())
    }
}
