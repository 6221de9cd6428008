use std::path::PathBuf;
use crate::metainfo::structs::torrent::Torrent;
use crate::session::structs::add_torrent_options::AddTorrentOptions;

impl AddTorrentOptions {
    pub fn from_magnet(magnet_uri: &str) -> AddTorrentOptions {
        AddTorrentOptions {
            magnet_uri: magnet_uri.to_string(),
            ..AddTorrentOptions::default()
        }
    }

    /// Options for a decoded `.torrent`: its magnet link, name and total size.
    pub fn from_torrent(torrent: &Torrent) -> AddTorrentOptions {
        AddTorrentOptions {
            magnet_uri: torrent.magnet_link(),
            file_path: None,
            display_name: Some(torrent.name.clone()),
            size_bytes: Some(torrent.total_size),
        }
    }

    pub fn with_file_path<P: Into<PathBuf>>(mut self, path: P) -> AddTorrentOptions {
        self.file_path = Some(path.into());
        self
    }

    pub fn with_display_name(mut self, name: &str) -> AddTorrentOptions {
        self.display_name = Some(name.to_string());
        self
    }

    pub fn with_size(mut self, size_bytes: u64) -> AddTorrentOptions {
        self.size_bytes = Some(size_bytes);
        self
    }
}
