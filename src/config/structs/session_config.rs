use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    /// Milliseconds between two ticks; values under 250 are raised to 250.
    pub tick_interval: u64,
    /// Size in bytes assumed for torrents added without one.
    pub default_size: u64,
}
