//! Single-page inspection command.

use clap::Args;

use folio_core::error::AppError;
use folio_core::pager::compute_page;
use folio_core::types::{Navigation, PageRequest};

use super::ListingArgs;
use crate::output::{self, OutputFormat};

/// Arguments for the page command
#[derive(Debug, Args)]
pub struct PageArgs {
    /// Page number (1-based)
    pub number: u64,

    /// Listing parameters
    #[command(flatten)]
    pub listing: ListingArgs,
}

/// Execute the page command
pub async fn execute(
    args: &PageArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let (settings, total) = args.listing.resolve(&config).await?;

    let request = PageRequest::new(
        settings.base_slug(),
        settings.page_size(),
        total,
        args.number,
    )?;
    let page = compute_page(&request)?;

    match format {
        OutputFormat::Json => output::print_json(&page)?,
        OutputFormat::Table => {
            let nav = Navigation::from_page(&page, settings.base_title());
            println!("Page {} of {}", page.page_number, page.num_pages);
            output::print_kv("Path", &page.path);
            output::print_kv("Title", &nav.title);
            output::print_kv("Offset", &page.offset.to_string());
            output::print_kv("Limit", &page.limit.to_string());
            output::print_kv("Items", &page.item_count().to_string());
            for link in nav.links() {
                output::print_kv(link.rel.as_str(), &format!("{} ({})", link.path, link.label));
            }
        }
    }

    Ok(())
}
