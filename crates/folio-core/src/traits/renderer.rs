//! Render collaborator for listing pages.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::item::ListingItem;
use crate::types::navigation::Navigation;

/// Turns one page of entries plus its navigation into a document.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// The rendered output for one page.
    type Document: Send;

    /// Render a page.
    async fn render(
        &self,
        items: Vec<ListingItem>,
        navigation: &Navigation,
    ) -> AppResult<Self::Document>;
}
