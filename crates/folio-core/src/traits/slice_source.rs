//! Data-fetch collaborator for listing pages.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::item::ListingItem;

/// Supplies the ordered entries of a listing one window at a time.
///
/// Ordering and filtering (published entries only, newest first, and so
/// on) are the implementation's business; the generator only asks for
/// windows by offset and limit.
#[async_trait]
pub trait SliceSource: Send + Sync {
    /// Total number of entries in the listing.
    async fn total_items(&self) -> AppResult<u64>;

    /// Return at most `limit` entries starting at `offset`.
    async fn fetch_slice(&self, offset: u64, limit: u64) -> AppResult<Vec<ListingItem>>;
}
