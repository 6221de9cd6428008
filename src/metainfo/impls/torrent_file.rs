use std::path::PathBuf;
use crate::metainfo::structs::torrent_file::TorrentFile;

impl TorrentFile {
    pub fn path_depth(&self) -> usize {
        self.path.len()
    }

    /// Path components joined with `/`, as shown to users.
    pub fn display_path(&self) -> String {
        self.path.join("/")
    }

    /// Relative path of the file below the download directory.
    pub fn to_path_buf(&self) -> PathBuf {
        self.path.iter().collect()
    }
}
