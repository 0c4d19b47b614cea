//! CLI command definitions and dispatch.

pub mod config;
pub mod page;
pub mod plan;

use clap::{Args, Parser, Subcommand};

use folio_core::config::SiteConfig;
use folio_core::config::listing::ListingSettings;
use folio_core::error::AppError;
use folio_core::traits::SliceSource;
use folio_generator::MemorySource;
use serde::Serialize;
use tabled::Tabled;

use crate::output::OutputFormat;

/// Folio — paginated listing inspector
#[derive(Debug, Parser)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "folio.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the window and links of one listing page
    Page(page::PageArgs),
    /// Show every page of a listing
    Plan(plan::PlanArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Page(args) => page::execute(args, &self.config, self.format).await,
            Commands::Plan(args) => plan::execute(args, &self.config, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
        }
    }
}

/// Listing parameters shared by `page` and `plan`; unset values come from
/// the configuration file.
#[derive(Debug, Args)]
pub struct ListingArgs {
    /// Slug of the first listing page
    #[arg(long)]
    pub slug: Option<String>,

    /// Base title of the listing
    #[arg(long)]
    pub title: Option<String>,

    /// Entries per page
    #[arg(long)]
    pub page_size: Option<u64>,

    /// Total number of entries
    #[arg(long, conflicts_with = "items")]
    pub total: Option<u64>,

    /// Entries JSON file to count instead of `--total`
    #[arg(long)]
    pub items: Option<String>,
}

impl ListingArgs {
    /// Merge arguments over configuration and determine the listing size.
    pub async fn resolve(&self, config: &SiteConfig) -> Result<(ListingSettings, u64), AppError> {
        let listing = &config.listing;
        let settings = ListingSettings::new(
            self.slug.as_deref().unwrap_or(&listing.base_slug),
            self.title.as_deref().unwrap_or(&listing.base_title),
            self.page_size.unwrap_or(listing.page_size),
        )?;

        let total = match self.total {
            Some(total) => total,
            None => {
                let path = self.items.as_deref().unwrap_or(&listing.items_file);
                MemorySource::from_json_file(path)
                    .await?
                    .total_items()
                    .await?
            }
        };

        Ok((settings, total))
    }
}

/// One page as shown in tables.
#[derive(Debug, Serialize, Tabled)]
pub struct PageRow {
    /// Page number
    #[tabled(rename = "Page")]
    pub page: u64,
    /// Page path
    #[tabled(rename = "Path")]
    pub path: String,
    /// Offset
    #[tabled(rename = "Offset")]
    pub offset: u64,
    /// Entries on the page
    #[tabled(rename = "Items")]
    pub items: u64,
    /// Previous page path
    #[tabled(rename = "Prev")]
    pub prev: String,
    /// Next page path
    #[tabled(rename = "Next")]
    pub next: String,
    /// Display title
    #[tabled(rename = "Title")]
    pub title: String,
}

impl PageRow {
    /// Build a row for a computed page.
    pub fn new(page: &folio_core::types::PageResult, base_title: &str) -> Self {
        Self {
            page: page.page_number,
            path: page.path.clone(),
            offset: page.offset,
            items: page.item_count(),
            prev: page.prev_path.clone().unwrap_or_else(|| "-".to_string()),
            next: page.next_path.clone().unwrap_or_else(|| "-".to_string()),
            title: page.display_title(base_title),
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<SiteConfig, AppError> {
    SiteConfig::load(config_path)
        .map_err(|e| AppError::configuration(format!("Failed to load config: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::PagePlan;

    fn args(total: Option<u64>) -> ListingArgs {
        ListingArgs {
            slug: Some("/news".to_string()),
            title: None,
            page_size: Some(4),
            total,
            items: None,
        }
    }

    #[tokio::test]
    async fn test_resolve_prefers_arguments() {
        let (settings, total) = args(Some(9))
            .resolve(&SiteConfig::default())
            .await
            .expect("resolves");
        assert_eq!(settings.base_slug(), "/news");
        assert_eq!(settings.base_title(), "Blog");
        assert_eq!(settings.page_size(), 4);
        assert_eq!(total, 9);
    }

    #[tokio::test]
    async fn test_resolve_rejects_zero_page_size() {
        let mut bad = args(Some(9));
        bad.page_size = Some(0);
        assert!(bad.resolve(&SiteConfig::default()).await.is_err());
    }

    #[test]
    fn test_page_rows() {
        let rows: Vec<_> = PagePlan::new("/news", 4, 9)
            .expect("valid")
            .map(|p| PageRow::new(&p, "News"))
            .collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].prev, "-");
        assert_eq!(rows[1].prev, "/news");
        assert_eq!(rows[2].items, 1);
        assert_eq!(rows[2].next, "-");
        assert_eq!(rows[2].title, "News - 3");
    }
}
