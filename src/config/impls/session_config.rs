use std::time::Duration;
use crate::config::structs::session_config::SessionConfig;
use crate::session::session::{DEFAULT_TORRENT_SIZE, MIN_TICK_INTERVAL};

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            tick_interval: 500,
            default_size: DEFAULT_TORRENT_SIZE,
        }
    }
}

impl SessionConfig {
    /// Tick interval clamped to the minimum the session accepts.
    pub fn tick_interval_duration(&self) -> Duration {
        Duration::from_millis(self.tick_interval).max(MIN_TICK_INTERVAL)
    }
}
