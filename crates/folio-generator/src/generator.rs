//! The page-generation loop.

use serde::Serialize;

use folio_core::PagePlan;
use folio_core::config::listing::ListingSettings;
use folio_core::error::AppError;
use folio_core::pager::compute_page;
use folio_core::result::AppResult;
use folio_core::traits::{Renderer, SliceSource};
use folio_core::types::{Navigation, PageResult};

/// One materialised listing page.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPage<D> {
    /// Path the page is served at.
    pub path: String,
    /// Page number (1-based).
    pub page_number: u64,
    /// Rendered document.
    pub document: D,
}

/// Generates listing pages from a slice source and a renderer.
#[derive(Debug)]
pub struct ListingGenerator<S, R> {
    source: S,
    renderer: R,
    settings: ListingSettings,
}

impl<S, R> ListingGenerator<S, R>
where
    S: SliceSource,
    R: Renderer,
{
    /// Creates a new generator.
    pub fn new(source: S, renderer: R, settings: ListingSettings) -> Self {
        Self {
            source,
            renderer,
            settings,
        }
    }

    /// Plans the listing against the source's current size.
    pub async fn plan(&self) -> AppResult<PagePlan> {
        let total = self.source.total_items().await?;
        PagePlan::new(self.settings.base_slug(), self.settings.page_size(), total)
    }

    /// Generates every page, first to last.
    pub async fn generate(&self) -> AppResult<Vec<GeneratedPage<R::Document>>> {
        let plan = self.plan().await?;
        let num_pages = plan.num_pages();
        tracing::info!(
            "Generating {} listing page(s) under '{}'",
            num_pages,
            self.settings.base_slug()
        );

        let mut pages = Vec::new();
        for page in plan {
            pages.push(self.materialise(page).await?);
        }

        tracing::info!("Generated {} listing page(s)", pages.len());
        Ok(pages)
    }

    /// Generates a single page.
    ///
    /// Fails with `OutOfRange` when the listing has no such page.
    pub async fn generate_page(&self, page_number: u64) -> AppResult<GeneratedPage<R::Document>> {
        let plan = self.plan().await?;
        let page = compute_page(&plan.request(page_number))?;
        self.materialise(page).await
    }

    async fn materialise(&self, page: PageResult) -> AppResult<GeneratedPage<R::Document>> {
        let items = self.source.fetch_slice(page.offset, page.limit).await?;
        if items.len() as u64 > page.limit {
            return Err(AppError::external_service(format!(
                "Slice source returned {} items for page {} (limit {})",
                items.len(),
                page.page_number,
                page.limit
            )));
        }

        tracing::debug!(
            page = page.page_number,
            offset = page.offset,
            items = items.len(),
            "Rendering listing page '{}'",
            page.path
        );

        let navigation = Navigation::from_page(&page, self.settings.base_title());
        let document = self.renderer.render(items, &navigation).await?;

        Ok(GeneratedPage {
            path: page.path,
            page_number: page.page_number,
            document,
        })
    }
}
