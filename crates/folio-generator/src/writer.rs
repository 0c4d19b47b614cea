//! Writes generated pages to an output directory.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use tokio::fs;

use folio_core::error::{AppError, ErrorKind};
use folio_core::result::AppResult;

use crate::generator::GeneratedPage;

/// File name each page's document is written to inside its directory.
const INDEX_FILE: &str = "index.json";

/// Persists generated pages as `<root>/<page path>/index.json`.
#[derive(Debug, Clone)]
pub struct DocumentWriter {
    /// Output root directory.
    root: PathBuf,
}

impl DocumentWriter {
    /// Create a writer rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the file a page path is written to.
    ///
    /// Rejects paths that would climb out of the output root.
    pub fn resolve(&self, page_path: &str) -> AppResult<PathBuf> {
        let relative = Path::new(page_path.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(AppError::validation(format!(
                "Page path '{page_path}' escapes the output directory"
            )));
        }
        Ok(self.root.join(relative).join(INDEX_FILE))
    }

    /// Write one page and return the file it was written to.
    pub async fn write<D: Serialize>(&self, page: &GeneratedPage<D>) -> AppResult<PathBuf> {
        let target = self.resolve(&page.path)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Io,
                    format!("Failed to create directory: {}", parent.display()),
                    e,
                )
            })?;
        }

        let data = serde_json::to_vec_pretty(&page.document)?;
        fs::write(&target, data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Io,
                format!("Failed to write page: {}", target.display()),
                e,
            )
        })?;

        tracing::debug!("Wrote page {} to '{}'", page.page_number, target.display());
        Ok(target)
    }

    /// Write every page, in order.
    pub async fn write_all<D: Serialize>(
        &self,
        pages: &[GeneratedPage<D>],
    ) -> AppResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(pages.len());
        for page in pages {
            written.push(self.write(page).await?);
        }
        tracing::info!(
            "Wrote {} page(s) to '{}'",
            written.len(),
            self.root.display()
        );
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_page_paths() {
        let writer = DocumentWriter::new("/out");
        assert_eq!(
            writer.resolve("/blog").unwrap(),
            PathBuf::from("/out/blog/index.json")
        );
        assert_eq!(
            writer.resolve("/blog/2").unwrap(),
            PathBuf::from("/out/blog/2/index.json")
        );
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let writer = DocumentWriter::new("/out");
        let err = writer.resolve("/blog/../../etc").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_write_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DocumentWriter::new(dir.path());
        let page = GeneratedPage {
            path: "/news/3".to_string(),
            page_number: 3,
            document: serde_json::json!({ "title": "News - 3" }),
        };

        let target = writer.write(&page).await.unwrap();
        assert_eq!(target, dir.path().join("news/3/index.json"));

        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&target).unwrap()).unwrap();
        assert_eq!(written["title"], "News - 3");
    }
}
