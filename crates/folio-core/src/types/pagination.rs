//! Pagination request and result types for listing pages.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Parameters for one generated listing page.
///
/// Built once per page by the generator. The base slug and page size are
/// validated here; the page number is checked against the page count by
/// [`compute_page`](crate::pager::compute_page), which reports
/// [`ErrorKind::OutOfRange`](crate::error::ErrorKind::OutOfRange).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PageRequest {
    base_slug: String,
    page_size: u64,
    total_items: u64,
    page_number: u64,
}

impl PageRequest {
    /// Create a new page request.
    pub fn new(
        base_slug: impl Into<String>,
        page_size: u64,
        total_items: u64,
        page_number: u64,
    ) -> AppResult<Self> {
        let base_slug = base_slug.into();
        validate_base_slug(&base_slug)?;
        validate_page_size(page_size)?;
        Ok(Self {
            base_slug,
            page_size,
            total_items,
            page_number,
        })
    }

    /// Create a request whose slug and page size were already validated.
    pub(crate) fn from_validated(
        base_slug: String,
        page_size: u64,
        total_items: u64,
        page_number: u64,
    ) -> Self {
        Self {
            base_slug,
            page_size,
            total_items,
            page_number,
        }
    }

    /// Slug of the listing's first page, e.g. `/blog`.
    pub fn base_slug(&self) -> &str {
        &self.base_slug
    }

    /// Number of items per page.
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Total number of items across all pages.
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Requested page number (1-based).
    pub fn page_number(&self) -> u64 {
        self.page_number
    }
}

/// Window and navigation data for one listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// Page number (1-based).
    pub page_number: u64,
    /// Total number of pages, never less than one.
    pub num_pages: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Number of items to skip before this page.
    pub offset: u64,
    /// Maximum number of items on this page.
    pub limit: u64,
    /// Whether this is the first page.
    pub is_first: bool,
    /// Whether this is the last page.
    pub is_last: bool,
    /// Path of this page itself.
    pub path: String,
    /// Path of the previous page, absent on the first page.
    pub prev_path: Option<String>,
    /// Path of the next page, absent on the last page.
    pub next_path: Option<String>,
    /// Suffix appended to the base title; empty on the first page.
    pub title_suffix: String,
}

impl PageResult {
    /// Number of items actually shown on this page.
    ///
    /// Equals `limit` except on a partial last page or an empty listing.
    pub fn item_count(&self) -> u64 {
        self.total_items.saturating_sub(self.offset).min(self.limit)
    }

    /// The base title with this page's suffix appended.
    pub fn display_title(&self, base_title: &str) -> String {
        format!("{base_title}{}", self.title_suffix)
    }
}

/// Check that a slug can be used as a listing base path.
pub fn validate_base_slug(slug: &str) -> AppResult<()> {
    if slug.is_empty() {
        return Err(AppError::validation("Base slug must not be empty"));
    }
    if slug.ends_with('/') {
        return Err(AppError::validation(format!(
            "Base slug '{slug}' must not end with '/'"
        )));
    }
    if slug.chars().any(char::is_whitespace) {
        return Err(AppError::validation(format!(
            "Base slug '{slug}' must not contain whitespace"
        )));
    }
    Ok(())
}

/// Check that a page size is positive.
pub fn validate_page_size(page_size: u64) -> AppResult<()> {
    if page_size == 0 {
        return Err(AppError::validation("Page size must be at least 1"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_rejects_bad_slugs() {
        for slug in ["", "/", "/blog/", "my blog"] {
            let err = PageRequest::new(slug, 10, 25, 1).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation, "slug {slug:?}");
        }
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let err = PageRequest::new("/blog", 0, 25, 1).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_page_number_not_checked_at_construction() {
        let req = PageRequest::new("/blog", 10, 25, 0).expect("constructs");
        assert_eq!(req.page_number(), 0);
    }

    #[test]
    fn test_item_count_partial_last_page() {
        let result = PageResult {
            page_number: 3,
            num_pages: 3,
            total_items: 25,
            offset: 20,
            limit: 10,
            is_first: false,
            is_last: true,
            path: "/blog/3".to_string(),
            prev_path: Some("/blog/2".to_string()),
            next_path: None,
            title_suffix: " - 3".to_string(),
        };
        assert_eq!(result.item_count(), 5);
        assert_eq!(result.display_title("Blog"), "Blog - 3");
    }
}
