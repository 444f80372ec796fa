//! CLI Argument Structures
//!
//! This module contains the CLI argument definitions and command structures
//! used by the rollcall binary.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Channel member census
#[derive(Parser)]
#[command(name = "rollcall")]
#[command(version = VERSION)]
#[command(about = "📋 rollcall - classify a channel's members by first name")]
#[command(long_about = "
Fetch the member list of a channel or group, classify members by first name
against two name lists, and save the result under chatUsers/<channel>_users/.

Common Usage:

  # Census a channel (prompts for the name when omitted)
  rollcall census rustlang

  # Re-run classification on a saved census after editing the name lists
  rollcall reclassify chatUsers/rustlang_users

  # Write a starter configuration file
  rollcall init-config
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a channel's members, classify and save them
    Census(CensusArgs),

    /// Classify members saved by an earlier census again
    Reclassify(ReclassifyArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Initialize a configuration file with defaults
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),

    /// Validate a rollcall configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),
}

#[derive(Args)]
pub struct CensusArgs {
    /// Channel or group name (prompted for when omitted)
    pub channel: Option<String>,

    /// Configuration file [default: rollcall.yml when present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ReclassifyArgs {
    /// Census directory containing members.json
    pub dir: PathBuf,

    /// Configuration file [default: rollcall.yml when present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct InitConfigArgs {
    /// Output configuration file name
    #[arg(short, long, default_value = "rollcall.yml")]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Path to configuration file to validate
    #[arg(short, long, required = true)]
    pub config: PathBuf,

    /// Show detailed configuration breakdown
    #[arg(short, long)]
    pub verbose: bool,
}
