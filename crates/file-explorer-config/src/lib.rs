//! Configuration for the file explorer
//!
//! This crate provides:
//! - Config file lookup (CWD, home directory, platform config directory)
//! - The explorer configuration (ExplorerConfig) and its mapping to
//!   runtime options

pub mod config_file;
pub mod explorer_config;
pub mod paths;

pub use config_file::{find_config_file, load_config_file};
pub use explorer_config::{ConfigError, ExplorerConfig};
