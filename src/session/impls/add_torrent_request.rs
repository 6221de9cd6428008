use crate::session::structs::add_torrent_options::AddTorrentOptions;
use crate::session::structs::add_torrent_request::AddTorrentRequest;

impl AddTorrentRequest {
    pub fn from_json(data: &[u8]) -> Result<AddTorrentRequest, serde_json::Error> {
        serde_json::from_slice(data)
    }
}

impl From<AddTorrentRequest> for AddTorrentOptions {
    fn from(request: AddTorrentRequest) -> Self {
        AddTorrentOptions {
            magnet_uri: request.magnet,
            file_path: None,
            display_name: request.name,
            // Only a positive, finite size counts; anything else uses the default.
            size_bytes: request.size.filter(|size| size.is_finite() && *size >= 1.0).map(|size| size as u64),
        }
    }
}
