//! Common utilities and shared functionality.
//!
//! Helpers used across the other modules and by the binary.
//!
//! # Utilities
//!
//! - Logging setup (`fern` dispatcher with coloured levels)
//! - UTF-8 safe string clamping
//!
//! # Data Structures
//!
//! - `CustomError` - Custom error type for binary level failures
//!
//! # Example
//!
//! ```rust
//! use rawbit::common::common::truncate_at_char_boundary;
//!
//! assert_eq!(truncate_at_char_boundary("héllo", 2), "h");
//! assert_eq!(truncate_at_char_boundary("hello", 10), "hello");
//! ```

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
