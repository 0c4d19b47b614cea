//! Whole-listing inspection command.

use clap::Args;

use folio_core::PagePlan;
use folio_core::error::AppError;

use super::{ListingArgs, PageRow};
use crate::output::{self, OutputFormat};

/// Arguments for the plan command
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Listing parameters
    #[command(flatten)]
    pub listing: ListingArgs,
}

/// Execute the plan command
pub async fn execute(
    args: &PlanArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let (settings, total) = args.listing.resolve(&config).await?;

    let plan = PagePlan::new(settings.base_slug(), settings.page_size(), total)?;
    tracing::debug!("Planned {} page(s) for {} item(s)", plan.num_pages(), total);

    match format {
        OutputFormat::Json => {
            let pages: Vec<_> = plan.collect();
            output::print_json(&pages)?;
        }
        OutputFormat::Table => {
            let rows: Vec<_> = plan
                .map(|p| PageRow::new(&p, settings.base_title()))
                .collect();
            output::print_table(&rows);
        }
    }

    Ok(())
}
