//! Torrent metainfo (`.torrent`) decoding.
//!
//! Turns the raw bytes of a `.torrent` file into a validated [`Torrent`]
//! descriptor: display name, piece layout, file list, trackers and the SHA-1
//! info hash of the raw `info` dictionary.
//!
//! Decoding walks the buffer twice. The first pass scans the root dictionary,
//! collecting tracker URLs and recording the exact byte span of the `info`
//! value. That span is hashed as-is (never re-encoded) and then walked again
//! to decode the piece and file layout.
//!
//! Capacity overflows on optional data (tiers, trackers, files, path
//! components) truncate and produce a [`DecodeWarning`]; anything else that is
//! wrong aborts the decode and no partial torrent is returned.
//!
//! [`Torrent`]: structs::torrent::Torrent
//! [`DecodeWarning`]: enums::decode_warning::DecodeWarning
//!
//! # Example
//!
//! ```rust
//! use rawbit::metainfo::metainfo::decode_torrent;
//!
//! let data = b"d8:announce14:http://tracker4:infod6:lengthi100e4:name3:foo12:piece lengthi16384e6:pieces20:AAAAAAAAAAAAAAAAAAAAee";
//! let torrent = decode_torrent(data).unwrap();
//! assert_eq!(torrent.name, "foo");
//! assert_eq!(torrent.total_size, 100);
//! assert_eq!(torrent.file_count(), 1);
//! ```

/// Metainfo enumerations (errors, warnings).
pub mod enums;

/// Implementation blocks for metainfo types.
pub mod impls;

/// Torrent decoding entry points.
#[allow(clippy::module_inception)]
pub mod metainfo;

/// Metainfo data structures.
pub mod structs;
