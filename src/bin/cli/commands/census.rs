//! Census command implementations.
//!
//! Platform and pipeline failures are printed and end the command with a
//! zero exit status; only configuration problems are returned as errors.

use dialoguer::Input;
use tracing::info;

use crate::cli::args::{CensusArgs, ReclassifyArgs};
use crate::cli::config_loader::load_configuration;
use crate::cli::display::{display_census_footer, print_header};
use rollcall::core::pipeline::{reclassify, run_census};
use rollcall::platform::{HttpMemberSource, Session};

/// Fetch a channel's members, classify them and save the results.
pub fn census_command(args: CensusArgs) -> anyhow::Result<()> {
    let config = load_configuration(args.config.as_deref())?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    print_header();
    let channel = match args.channel {
        Some(channel) => channel,
        None => Input::<String>::new()
            .with_prompt("Enter the channel or group name")
            .interact_text()?,
    };
    let channel = channel.trim().to_string();

    let source = match HttpMemberSource::new(config.platform.clone()) {
        Ok(source) => source,
        Err(e) => {
            println!("{}", e.console_message());
            return Ok(());
        }
    };
    let session = match Session::open(source) {
        Ok(session) => session,
        Err(e) => {
            println!("{}", e.console_message());
            return Ok(());
        }
    };

    info!("Starting census of '{}'", channel);
    if let Some(outcome) = run_census(session.source(), &channel, &config.paths) {
        display_census_footer(&outcome);
    }

    Ok(())
}

/// Classify a saved census again without contacting the platform.
pub fn reclassify_command(args: ReclassifyArgs) -> anyhow::Result<()> {
    let config = load_configuration(args.config.as_deref())?;
    config
        .paths
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!("Reclassifying {}", args.dir.display());
    if let Some(outcome) = reclassify(&args.dir, &config.paths) {
        display_census_footer(&outcome);
    }

    Ok(())
}
