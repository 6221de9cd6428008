use serde::Deserialize;

/// `{"magnet": str, "name"?: str, "size"?: number}` as posted by API clients.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AddTorrentRequest {
    pub magnet: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub size: Option<f64>,
}
