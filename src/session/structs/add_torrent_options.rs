use std::path::PathBuf;

/// What is known about a torrent when it is added.
///
/// Empty strings count as absent. `size_bytes` of `None` or `Some(0)` falls
/// back to the registry default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddTorrentOptions {
    pub magnet_uri: String,
    pub file_path: Option<PathBuf>,
    pub display_name: Option<String>,
    pub size_bytes: Option<u64>,
}
