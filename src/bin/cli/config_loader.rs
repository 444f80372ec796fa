//! Configuration discovery and loading for CLI commands.

use std::path::Path;

use anyhow::Context;
use tracing::debug;

use rollcall::core::config::{RollcallConfig, DEFAULT_CONFIG_PATH};

/// Load configuration from `config_path`, or from `rollcall.yml` when it
/// exists, or fall back to defaults. Environment credentials apply last.
pub fn load_configuration(config_path: Option<&Path>) -> anyhow::Result<RollcallConfig> {
    let config = match config_path {
        Some(path) => read_config_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.is_file() {
                read_config_file(default_path)?
            } else {
                debug!("No {} found, using default configuration", DEFAULT_CONFIG_PATH);
                RollcallConfig::default()
            }
        }
    };

    Ok(config.with_env_overrides())
}

fn read_config_file(path: &Path) -> anyhow::Result<RollcallConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content)?,
        _ => serde_yaml::from_str(&content)?,
    };
    debug!("Loaded configuration from {}", path.display());
    Ok(config)
}
