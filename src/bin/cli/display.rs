//! Display functions for census outcomes and configuration.

use owo_colors::OwoColorize;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use rollcall::core::config::RollcallConfig;
use rollcall::core::pipeline::CensusOutcome;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print rollcall header with version info
pub fn print_header() {
    println!("rollcall v{VERSION}");
}

/// Closing line after the summary: where the files went, or that they didn't.
pub fn display_census_footer(outcome: &CensusOutcome) {
    let dir = outcome.layout.dir().display().to_string();
    if outcome.persisted.is_complete() {
        println!();
        println!(
            "{} {}",
            "✅ Census saved to:".bright_green().bold(),
            dir.cyan()
        );
    } else {
        println!();
        println!(
            "{} {} ({} of 4 files written)",
            "⚠️  Census incomplete in".yellow().bold(),
            dir.cyan(),
            outcome.persisted.written.len()
        );
    }
}

/// Row type for the configuration summary table.
#[derive(Tabled)]
struct SettingRow {
    setting: &'static str,
    value: String,
}

/// Tabulate the effective settings. Credentials are masked.
pub fn display_config_summary(config: &RollcallConfig) {
    let rows = vec![
        SettingRow {
            setting: "platform.api_id",
            value: mask(&config.platform.api_id),
        },
        SettingRow {
            setting: "platform.api_hash",
            value: mask(&config.platform.api_hash),
        },
        SettingRow {
            setting: "platform.endpoint",
            value: config.platform.endpoint.clone(),
        },
        SettingRow {
            setting: "platform.page_size",
            value: config.platform.page_size.to_string(),
        },
        SettingRow {
            setting: "platform.timeout_seconds",
            value: config.platform.timeout_seconds.to_string(),
        },
        SettingRow {
            setting: "paths.male_names",
            value: config.paths.male_names.display().to_string(),
        },
        SettingRow {
            setting: "paths.female_names",
            value: config.paths.female_names.display().to_string(),
        },
        SettingRow {
            setting: "paths.output_root",
            value: config.paths.output_root.display().to_string(),
        },
    ];

    let mut table = Table::new(rows);
    table.with(TableStyle::rounded());
    println!("{}", table);
}

/// Keep the last two characters of a secret.
pub fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    match chars.len() {
        0 => "(unset)".to_string(),
        n if n <= 2 => "*".repeat(n),
        n => format!("{}{}", "*".repeat(n - 2), chars[n - 2..].iter().collect::<String>()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_hides_all_but_tail() {
        assert_eq!(mask(""), "(unset)");
        assert_eq!(mask("ab"), "**");
        assert_eq!(mask("0123abcd"), "******cd");
    }
}
