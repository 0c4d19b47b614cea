//! Listing entries as handed back by a slice source.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry shown on a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingItem {
    /// Stable identifier of the entry.
    pub id: String,
    /// Entry title.
    pub title: String,
    /// Path of the entry's own page.
    pub path: String,
    /// Short excerpt shown under the title.
    #[serde(default)]
    pub excerpt: String,
    /// Publication date.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Whether the entry is still a draft.
    #[serde(default)]
    pub draft: bool,
    /// Author slugs.
    #[serde(default)]
    pub authors: Vec<String>,
}
