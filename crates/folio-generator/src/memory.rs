//! In-memory slice source.

use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

use folio_core::error::{AppError, ErrorKind};
use folio_core::result::AppResult;
use folio_core::traits::SliceSource;
use folio_core::types::ListingItem;

/// Slice source over an already ordered vector of entries.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    items: Vec<ListingItem>,
}

impl MemorySource {
    /// Create a source over the given entries, kept in the given order.
    pub fn new(items: Vec<ListingItem>) -> Self {
        Self { items }
    }

    /// Load entries from a JSON array file.
    pub async fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let data = fs::read(path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Io,
                format!("Failed to read items file: {}", path.display()),
                e,
            )
        })?;
        let items: Vec<ListingItem> = serde_json::from_slice(&data)?;
        tracing::debug!("Loaded {} item(s) from '{}'", items.len(), path.display());
        Ok(Self::new(items))
    }
}

#[async_trait]
impl SliceSource for MemorySource {
    async fn total_items(&self) -> AppResult<u64> {
        Ok(self.items.len() as u64)
    }

    async fn fetch_slice(&self, offset: u64, limit: u64) -> AppResult<Vec<ListingItem>> {
        let len = self.items.len();
        let start = usize::try_from(offset).unwrap_or(usize::MAX).min(len);
        let end = start
            .saturating_add(usize::try_from(limit).unwrap_or(usize::MAX))
            .min(len);
        Ok(self.items[start..end].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<ListingItem> {
        (0..n)
            .map(|i| ListingItem {
                id: format!("id-{i}"),
                title: format!("Entry {i}"),
                path: format!("/entries/{i}"),
                excerpt: String::new(),
                date: None,
                draft: false,
                authors: Vec::new(),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_fetch_slice_windows() {
        let source = MemorySource::new(items(25));
        assert_eq!(source.total_items().await.unwrap(), 25);

        let page = source.fetch_slice(10, 10).await.unwrap();
        assert_eq!(page.len(), 10);
        assert_eq!(page[0].id, "id-10");

        let last = source.fetch_slice(20, 10).await.unwrap();
        assert_eq!(last.len(), 5);

        assert!(source.fetch_slice(30, 10).await.unwrap().is_empty());
        assert_eq!(source.fetch_slice(0, u64::MAX).await.unwrap().len(), 25);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = MemorySource::from_json_file("/definitely/not/here.json")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Io);
    }

    #[tokio::test]
    async fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = MemorySource::from_json_file(&path).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Serialization);
    }
}
