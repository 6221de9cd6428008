use serde::{Deserialize, Serialize};

/// Tracker URLs sharing one fallback priority, in declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnounceTier {
    pub urls: Vec<String>,
}
