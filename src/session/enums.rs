/// Failures returned by session operations.
pub mod session_error;

/// Reporting state derived from the paused and complete flags.
pub mod torrent_state;
