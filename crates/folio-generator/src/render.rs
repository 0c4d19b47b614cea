//! Structured renderer producing serializable listing documents.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use folio_core::result::AppResult;
use folio_core::traits::Renderer;
use folio_core::types::{ListingItem, NavLink, Navigation};

/// A rendered listing page: its navigation and the entries on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingDocument {
    /// Navigation for this page.
    pub navigation: Navigation,
    /// Sibling links, previous before next.
    pub links: Vec<NavLink>,
    /// Entries on this page.
    pub items: Vec<ListingItem>,
}

/// Renders pages into [`ListingDocument`]s for downstream templating.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[async_trait]
impl Renderer for JsonRenderer {
    type Document = ListingDocument;

    async fn render(
        &self,
        items: Vec<ListingItem>,
        navigation: &Navigation,
    ) -> AppResult<Self::Document> {
        Ok(ListingDocument {
            navigation: navigation.clone(),
            links: navigation.links(),
            items,
        })
    }
}
