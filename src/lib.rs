//! # rawbit
//!
//! BitTorrent metainfo decoding and torrent session state.
//!
//! ## Overview
//!
//! rawbit turns `.torrent` files into validated torrent descriptors and keeps
//! the state of the transfers an external download engine drives. Parsing is
//! done by a bounds checked bencode reader working directly on the caller's
//! buffer; the session registry is a lock protected map of entries advanced
//! by a background tick.
//!
//! ## Features
//!
//! - **Bencode**: zero copy cursor based reader with skip and key lookup
//! - **Metainfo**: single and multi-file torrents, tiered trackers, SHA-1
//!   info hash over the raw `info` bytes, magnet links
//! - **Capacity limits**: optional data over the configured limits is
//!   truncated with a warning instead of failing the decode
//! - **Session**: thread safe add, pause, resume, remove and snapshot with a
//!   JSON reporting payload
//!
//! ## Quick Start
//!
//! ```rust
//! use rawbit::metainfo::metainfo::decode_torrent;
//! use rawbit::session::structs::add_torrent_options::AddTorrentOptions;
//! use rawbit::session::structs::session_registry::SessionRegistry;
//!
//! let data = b"d4:infod6:lengthi100e4:name3:foo12:piece lengthi16384e6:pieces20:AAAAAAAAAAAAAAAAAAAAee";
//! let torrent = decode_torrent(data).unwrap();
//!
//! let registry = SessionRegistry::new(256 * 1024 * 1024);
//! let id = registry.add_torrent(AddTorrentOptions::from_torrent(&torrent)).unwrap();
//! assert_eq!(registry.get(id).unwrap().name, "foo");
//! ```
//!
//! ## Modules
//!
//! - [`bencode`] - Bencode primitives (cursor, read, skip, lookup)
//! - [`common`] - Logging setup, error type and string helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`metainfo`] - `.torrent` decoding
//! - [`session`] - Session registry and tick worker
//! - [`structs`] - CLI argument parsing

/// Bencode primitives.
///
/// Bounds checked reads of integers, byte strings, lists and dictionaries
/// over a caller owned buffer.
pub mod bencode;

/// Common utilities and shared functionality.
///
/// Logging setup, the binary level error type and UTF-8 safe clamping.
pub mod common;

/// Configuration management module.
///
/// Loads and validates `config.toml`, creating a default one on request.
pub mod config;

/// Torrent metainfo decoding.
///
/// Two pass decoder producing a [`metainfo::structs::torrent::Torrent`].
pub mod metainfo;

/// Torrent session registry.
pub mod session;

/// Command line interface definition.
pub mod structs;
