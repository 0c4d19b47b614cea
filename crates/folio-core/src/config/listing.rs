//! Listing generation settings.

use serde::{Deserialize, Serialize};

use crate::result::AppResult;
use crate::types::pagination::{validate_base_slug, validate_page_size};

/// Listing section as read from configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Slug of the first listing page.
    #[serde(default = "default_base_slug")]
    pub base_slug: String,
    /// Title of the first listing page; later pages append ` - {n}`.
    #[serde(default = "default_base_title")]
    pub base_title: String,
    /// Entries per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    /// JSON file holding the listing entries, already ordered.
    #[serde(default = "default_items_file")]
    pub items_file: String,
    /// Directory generated pages are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            base_slug: default_base_slug(),
            base_title: default_base_title(),
            page_size: default_page_size(),
            items_file: default_items_file(),
            output_dir: default_output_dir(),
        }
    }
}

impl ListingConfig {
    /// Validate into the settings the generator runs with.
    pub fn settings(&self) -> AppResult<ListingSettings> {
        ListingSettings::new(&self.base_slug, &self.base_title, self.page_size)
    }
}

/// Validated pagination settings for one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSettings {
    base_slug: String,
    base_title: String,
    page_size: u64,
}

impl ListingSettings {
    /// Create validated settings.
    pub fn new(
        base_slug: impl Into<String>,
        base_title: impl Into<String>,
        page_size: u64,
    ) -> AppResult<Self> {
        let base_slug = base_slug.into();
        validate_base_slug(&base_slug)?;
        validate_page_size(page_size)?;
        Ok(Self {
            base_slug,
            base_title: base_title.into(),
            page_size,
        })
    }

    /// Slug of the first listing page.
    pub fn base_slug(&self) -> &str {
        &self.base_slug
    }

    /// Title of the first listing page.
    pub fn base_title(&self) -> &str {
        &self.base_title
    }

    /// Entries per page.
    pub fn page_size(&self) -> u64 {
        self.page_size
    }
}

fn default_base_slug() -> String {
    "/blog".to_string()
}

fn default_base_title() -> String {
    "Blog".to_string()
}

fn default_page_size() -> u64 {
    10
}

fn default_items_file() -> String {
    "data/items.json".to_string()
}

fn default_output_dir() -> String {
    "public".to_string()
}
