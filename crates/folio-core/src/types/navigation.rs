//! Navigation data handed to a renderer for one listing page.

use serde::{Deserialize, Serialize};

use crate::types::pagination::PageResult;

/// Relation of a navigation link to the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkRel {
    /// Newer entries.
    Prev,
    /// Older entries.
    Next,
}

impl LinkRel {
    /// Value for an HTML `rel` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prev => "prev",
            Self::Next => "next",
        }
    }

    /// Default link label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Prev => "← Newer",
            Self::Next => "Older →",
        }
    }
}

/// A sibling-page link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Link relation.
    pub rel: LinkRel,
    /// Target path.
    pub path: String,
    /// Link label.
    pub label: String,
}

/// Everything a renderer needs to link a listing page into its sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    /// Path of this page.
    pub path: String,
    /// Display title, base title plus page suffix.
    pub title: String,
    /// Page number (1-based).
    pub page_number: u64,
    /// Total number of pages.
    pub num_pages: u64,
    /// Previous page path.
    pub prev_path: Option<String>,
    /// Next page path.
    pub next_path: Option<String>,
}

impl Navigation {
    /// Build navigation for a computed page.
    pub fn from_page(page: &PageResult, base_title: &str) -> Self {
        Self {
            path: page.path.clone(),
            title: page.display_title(base_title),
            page_number: page.page_number,
            num_pages: page.num_pages,
            prev_path: page.prev_path.clone(),
            next_path: page.next_path.clone(),
        }
    }

    /// Present links, previous before next.
    pub fn links(&self) -> Vec<NavLink> {
        [
            (LinkRel::Prev, self.prev_path.as_ref()),
            (LinkRel::Next, self.next_path.as_ref()),
        ]
        .into_iter()
        .filter_map(|(rel, path)| {
            path.map(|p| NavLink {
                rel,
                path: p.clone(),
                label: rel.label().to_string(),
            })
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pager::compute_page;
    use crate::types::pagination::PageRequest;

    fn nav(number: u64) -> Navigation {
        let req = PageRequest::new("/blog", 10, 25, number).expect("valid");
        Navigation::from_page(&compute_page(&req).expect("in range"), "Blog")
    }

    #[test]
    fn test_first_page_only_links_forward() {
        let n = nav(1);
        assert_eq!(n.title, "Blog");
        let links = n.links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].rel, LinkRel::Next);
        assert_eq!(links[0].path, "/blog/2");
        assert_eq!(links[0].label, "Older →");
    }

    #[test]
    fn test_middle_page_links_both_ways() {
        let n = nav(2);
        assert_eq!(n.title, "Blog - 2");
        let rels: Vec<_> = n.links().iter().map(|l| l.rel.as_str()).collect();
        assert_eq!(rels, ["prev", "next"]);
        assert_eq!(n.links()[0].path, "/blog");
    }
}
