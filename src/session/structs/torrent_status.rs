use serde::Serialize;

/// One row of the reporting payload.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TorrentStatus {
    pub id: u64,
    pub name: String,
    pub magnet: Option<String>,
    pub progress: f32,
    pub size: u64,
    pub downloaded: u64,
    pub download_rate: u64,
    pub upload_rate: u64,
    pub paused: bool,
    pub complete: bool,
}
