use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapacityKind {
    AnnounceTiers,
    TrackersPerTier,
    Files,
    PathComponents,
}
