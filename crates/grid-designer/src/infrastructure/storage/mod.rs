//! Storage infrastructure: configuration file persistence.
//!
//! The `config` sub-module handles:
//!
//! - Reading the TOML configuration file from the platform-appropriate
//!   directory (or an explicit path).
//! - Writing the configuration back to disk.
//! - Providing defaults when the file does not exist yet (first run).
//!
//! Layouts themselves are never written to disk; only designer settings are.

pub mod config;
