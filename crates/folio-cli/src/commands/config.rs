//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use folio_core::config::SiteConfig;
use folio_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration
    Validate,
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    match &args.command {
        ConfigCommand::Show => match format {
            OutputFormat::Json => output::print_json(&config)?,
            OutputFormat::Table => {
                output::print_section("listing", &listing_rows(&config));
                output::print_section("logging", &logging_rows(&config));
            }
        },
        ConfigCommand::Validate => {
            let settings = config.listing.settings()?;
            output::print_success(&format!("Configuration '{}' is valid", config_path));
            output::print_kv("Base slug", settings.base_slug());
            output::print_kv("Base title", settings.base_title());
            output::print_kv("Page size", &settings.page_size().to_string());
        }
    }

    Ok(())
}

/// Rows shown for the `[listing]` section
fn listing_rows(config: &SiteConfig) -> Vec<(&'static str, String)> {
    let listing = &config.listing;
    vec![
        ("base_slug", listing.base_slug.clone()),
        ("base_title", listing.base_title.clone()),
        ("page_size", listing.page_size.to_string()),
        ("items_file", listing.items_file.clone()),
        ("output_dir", listing.output_dir.clone()),
    ]
}

/// Rows shown for the `[logging]` section
fn logging_rows(config: &SiteConfig) -> Vec<(&'static str, String)> {
    vec![
        ("level", config.logging.level.clone()),
        ("format", config.logging.format.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_rows_use_config_keys() {
        let mut config = SiteConfig::default();
        config.listing.page_size = 25;

        let rows = listing_rows(&config);
        let keys: Vec<_> = rows.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            ["base_slug", "base_title", "page_size", "items_file", "output_dir"]
        );
        assert_eq!(rows[0].1, "/blog");
        assert_eq!(rows[2].1, "25");
    }

    #[test]
    fn test_logging_rows() {
        let rows = logging_rows(&SiteConfig::default());
        assert_eq!(rows, [("level", "info".to_string()), ("format", "pretty".to_string())]);
    }
}
