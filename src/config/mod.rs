//! Configuration management module.
//!
//! Loads, saves and validates `config.toml`.
//!
//! # Configuration Structure
//!
//! - **log_level** / **log_console_interval**: logging verbosity and how
//!   often session statistics are printed
//! - **session**: tick interval and default torrent size for the session
//!   registry
//! - **metainfo**: capacity limits applied while decoding `.torrent` files
//!
//! Every section falls back to its defaults when omitted.
//!
//! # Example
//!
//! ```rust
//! use rawbit::config::structs::configuration::Configuration;
//!
//! let config = Configuration::init();
//! let text = toml::to_string(&config).unwrap();
//! let loaded = Configuration::load(text.as_bytes()).unwrap();
//! assert_eq!(loaded, config);
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
