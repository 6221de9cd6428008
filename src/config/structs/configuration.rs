use serde::{Deserialize, Serialize};
use crate::config::structs::session_config::SessionConfig;
use crate::metainfo::structs::decode_limits::DecodeLimits;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: Option<u64>,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub metainfo: DecodeLimits,
}
