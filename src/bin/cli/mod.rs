//! CLI Module Organization
//!
//! - args: CLI argument structures
//! - commands: command execution logic
//! - config_loader: configuration file discovery and loading
//! - display: console rendering of census outcomes and settings

pub mod args;
pub mod commands;
pub mod config_loader;
pub mod display;

// Re-export commonly used items for convenience
pub use args::*;
pub use commands::*;
