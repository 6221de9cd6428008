/// Parameters for adding a torrent to the registry.
pub mod add_torrent_options;

/// JSON body of an add-torrent request.
pub mod add_torrent_request;

/// Lock protected registry contents.
pub mod registry_state;

/// One tracked transfer.
pub mod session_entry;

/// Thread safe registry of session entries.
pub mod session_registry;

/// Point in time copy of the registry.
pub mod session_snapshot;

/// Aggregate counters of a snapshot.
pub mod session_stats;

/// Registry plus its tick worker thread.
pub mod torrent_session;

/// Reported status of one entry.
pub mod torrent_status;
