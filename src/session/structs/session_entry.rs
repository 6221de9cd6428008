#[derive(Debug, Clone, PartialEq)]
pub struct SessionEntry {
    pub id: u64,
    pub name: String,
    pub magnet_uri: Option<String>,
    pub size: u64,
    pub downloaded: u64,
    pub download_rate: u64,
    pub upload_rate: u64,
    pub progress: f32,
    pub paused: bool,
    pub complete: bool,
}
