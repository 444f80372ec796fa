//! Configuration management commands.
//!
//! This module contains commands for managing rollcall configuration files,
//! including initialization, validation, and printing defaults.

use owo_colors::OwoColorize;

use crate::cli::args::{InitConfigArgs, ValidateConfigArgs};
use crate::cli::config_loader::load_configuration;
use crate::cli::display::display_config_summary;
use rollcall::core::config::{RollcallConfig, API_HASH_ENV, API_ID_ENV};

/// Print default configuration in YAML format
pub fn print_default_config() -> anyhow::Result<()> {
    println!("{}", "# Default rollcall configuration".dimmed());
    println!(
        "{}",
        "# Save this to a file and fill in the platform credentials".dimmed()
    );
    println!(
        "{}",
        "# Usage: rollcall census --config your-config.yml <channel>".dimmed()
    );
    println!();

    let yaml_output = serde_yaml::to_string(&RollcallConfig::default())?;
    println!("{}", yaml_output);

    Ok(())
}

/// Initialize a configuration file with defaults
pub fn init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    // Check if file exists and force not specified
    if args.output.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Configuration file already exists: {}. Use --force to overwrite or choose a different name with --output",
            args.output.display()
        ));
    }

    RollcallConfig::default().to_yaml_file(&args.output)?;

    println!(
        "{} {}",
        "✅ Configuration saved to:".bright_green().bold(),
        args.output.display().to_string().cyan()
    );
    println!();
    println!("{}", "📝 Next steps:".bright_blue().bold());
    println!("   1. Fill in platform.api_id and platform.api_hash");
    println!(
        "      (or export {} and {})",
        API_ID_ENV.cyan(),
        API_HASH_ENV.cyan()
    );
    println!("   2. Point platform.endpoint at your gateway");
    println!(
        "   3. Run a census with: {}",
        format!("rollcall census --config {} <channel>", args.output.display()).cyan()
    );

    Ok(())
}

/// Validate a rollcall configuration file
pub fn validate_config(args: ValidateConfigArgs) -> anyhow::Result<()> {
    println!(
        "{} {}",
        "🔍 Validating configuration:".bright_blue().bold(),
        args.config.display().to_string().cyan()
    );
    println!();

    let config = load_configuration(Some(&args.config))
        .and_then(|config| config.validate().map(|()| config).map_err(Into::into));

    let config = match config {
        Ok(config) => {
            println!(
                "{}",
                "✅ Configuration file is valid!".bright_green().bold()
            );
            println!();
            config
        }
        Err(e) => {
            eprintln!("{} {}", "❌ Configuration validation failed:".red(), e);
            println!();
            println!("{}", "🔧 Common issues:".bright_blue().bold());
            println!("   • Check YAML syntax (indentation, colons, quotes)");
            println!("   • platform.api_id and platform.api_hash must be set");
            println!("   • platform.endpoint must be an http(s) URL");
            println!();
            println!(
                "{}",
                "💡 Tip: Use 'rollcall print-default-config' to see valid format".dimmed()
            );
            return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
        }
    };

    if args.verbose {
        display_config_summary(&config);
    }

    Ok(())
}
