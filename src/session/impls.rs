pub mod add_torrent_options;

pub mod add_torrent_request;

pub mod session_entry;

pub mod session_registry;

pub mod session_snapshot;

pub mod torrent_session;

pub mod torrent_state;

pub mod torrent_status;

pub mod session_stats;
