//! Metainfo enumerations.

/// Which bounded collection overflowed during decoding.
pub mod capacity_kind;

/// Fatal decode failures.
pub mod decode_error;

/// Non-fatal decode diagnostics.
pub mod decode_warning;
