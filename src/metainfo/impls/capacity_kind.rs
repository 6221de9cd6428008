use std::fmt;
use crate::metainfo::enums::capacity_kind::CapacityKind;

impl fmt::Display for CapacityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CapacityKind::AnnounceTiers => write!(f, "announce tiers"),
            CapacityKind::TrackersPerTier => write!(f, "trackers per tier"),
            CapacityKind::Files => write!(f, "files"),
            CapacityKind::PathComponents => write!(f, "path components"),
        }
    }
}
