//! Torrent session registry.
//!
//! Tracks the transfers an external download engine would drive. Every entry
//! lives in a [`SessionRegistry`] behind a single `parking_lot` mutex, so
//! add, pause, resume, remove, tick and snapshot may be called from any
//! number of threads. A [`TorrentSession`] owns a registry together with a
//! background thread that calls `tick()` on a fixed interval.
//!
//! Snapshots are plain values: once taken they no longer follow the registry.
//!
//! [`SessionRegistry`]: structs::session_registry::SessionRegistry
//! [`TorrentSession`]: structs::torrent_session::TorrentSession
//!
//! # Example
//!
//! ```rust
//! use rawbit::session::structs::add_torrent_options::AddTorrentOptions;
//! use rawbit::session::structs::session_registry::SessionRegistry;
//!
//! let registry = SessionRegistry::new(1000);
//! let id = registry.add_torrent(AddTorrentOptions::from_magnet("magnet:?dn=demo")).unwrap();
//! registry.tick();
//!
//! let snapshot = registry.snapshot();
//! assert_eq!(snapshot.stats.torrent_count, 1);
//! assert_eq!(snapshot.torrents[0].id, id);
//! assert_eq!(snapshot.torrents[0].name, "demo");
//! assert_eq!(snapshot.torrents[0].downloaded, 10);
//! ```

/// Session enumerations (errors, torrent states).
pub mod enums;

/// Implementation blocks for session types.
pub mod impls;

/// Session constants and display name derivation.
#[allow(clippy::module_inception)]
pub mod session;

/// Session data structures.
pub mod structs;
