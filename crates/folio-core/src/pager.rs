//! Page window and sibling-link computation for sequentially paged listings.
//!
//! Page 1 lives at the base slug itself; every later page `n` lives at
//! `{base_slug}/{n}`. All functions here are pure.

use crate::error::AppError;
use crate::result::AppResult;
use crate::types::pagination::{PageRequest, PageResult, validate_base_slug, validate_page_size};

/// Number of pages needed for `total_items`, floored at one so an empty
/// listing still yields a single empty page.
///
/// `page_size` must be positive.
pub fn num_pages(total_items: u64, page_size: u64) -> u64 {
    total_items.div_ceil(page_size).max(1)
}

/// Path of page `page_number` of the listing at `base_slug`.
pub fn page_path(base_slug: &str, page_number: u64) -> String {
    if page_number == 1 {
        // The first page carries no numeric suffix.
        base_slug.to_string()
    } else {
        format!("{base_slug}/{page_number}")
    }
}

/// Compute the window and navigation for the requested page.
///
/// Fails with `OutOfRange` when the page number is `0` or greater than
/// the page count. The page number is never clamped.
pub fn compute_page(request: &PageRequest) -> AppResult<PageResult> {
    let num_pages = num_pages(request.total_items(), request.page_size());
    let page_number = request.page_number();
    if !(1..=num_pages).contains(&page_number) {
        return Err(AppError::out_of_range(page_number, num_pages));
    }

    Ok(build_page(
        request.base_slug(),
        request.page_size(),
        request.total_items(),
        page_number,
        num_pages,
    ))
}

/// Assemble a result for a page number already known to be in range.
fn build_page(
    base_slug: &str,
    page_size: u64,
    total_items: u64,
    page_number: u64,
    num_pages: u64,
) -> PageResult {
    let is_first = page_number == 1;
    let is_last = page_number == num_pages;

    let prev_path = if is_first {
        None
    } else {
        Some(page_path(base_slug, page_number - 1))
    };
    let next_path = if is_last {
        None
    } else {
        Some(format!("{base_slug}/{}", page_number + 1))
    };
    let title_suffix = if is_first {
        String::new()
    } else {
        format!(" - {page_number}")
    };

    PageResult {
        page_number,
        num_pages,
        total_items,
        offset: (page_number - 1) * page_size,
        limit: page_size,
        is_first,
        is_last,
        path: page_path(base_slug, page_number),
        prev_path,
        next_path,
        title_suffix,
    }
}

/// Iterator over every page of a listing, first to last.
#[derive(Debug, Clone)]
pub struct PagePlan {
    base_slug: String,
    page_size: u64,
    total_items: u64,
    num_pages: u64,
    next_page: u64,
    remaining: u64,
}

impl PagePlan {
    /// Plan all pages for a listing of `total_items` at `base_slug`.
    pub fn new(base_slug: impl Into<String>, page_size: u64, total_items: u64) -> AppResult<Self> {
        let base_slug = base_slug.into();
        validate_base_slug(&base_slug)?;
        validate_page_size(page_size)?;
        let num_pages = num_pages(total_items, page_size);
        Ok(Self {
            num_pages,
            base_slug,
            page_size,
            total_items,
            next_page: 1,
            remaining: num_pages,
        })
    }

    /// Total number of pages in the plan.
    pub fn num_pages(&self) -> u64 {
        self.num_pages
    }

    /// Build the request for a given page of this listing.
    pub fn request(&self, page_number: u64) -> PageRequest {
        PageRequest::from_validated(
            self.base_slug.clone(),
            self.page_size,
            self.total_items,
            page_number,
        )
    }
}

impl Iterator for PagePlan {
    type Item = PageResult;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let page = build_page(
            &self.base_slug,
            self.page_size,
            self.total_items,
            self.next_page,
            self.num_pages,
        );
        self.remaining -= 1;
        // Only advance while pages remain so the last page may be u64::MAX.
        if self.remaining > 0 {
            self.next_page += 1;
        }
        Some(page)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let skip = u64::try_from(n).unwrap_or(u64::MAX);
        if skip >= self.remaining {
            self.remaining = 0;
            return None;
        }
        self.next_page += skip;
        self.remaining -= skip;
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for PagePlan {}
