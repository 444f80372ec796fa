//! CLI Command Implementations
//!
//! - census: fetch, classify and save a channel's members
//! - config: configuration management commands

pub mod census;
pub mod config;

pub use census::{census_command, reclassify_command};
pub use config::{init_config, print_default_config, validate_config};
