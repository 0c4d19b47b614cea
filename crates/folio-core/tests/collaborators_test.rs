//! Drives the collaborator traits by hand the way a generator would.

use async_trait::async_trait;

use folio_core::pager::num_pages;
use folio_core::traits::{Renderer, SliceSource};
use folio_core::types::{ListingItem, Navigation};
use folio_core::{AppResult, PagePlan};

struct NumberedSource {
    count: u64,
}

#[async_trait]
impl SliceSource for NumberedSource {
    async fn total_items(&self) -> AppResult<u64> {
        Ok(self.count)
    }

    async fn fetch_slice(&self, offset: u64, limit: u64) -> AppResult<Vec<ListingItem>> {
        let end = (offset + limit).min(self.count);
        Ok((offset..end)
            .map(|i| ListingItem {
                id: i.to_string(),
                title: format!("Post {i}"),
                path: format!("/posts/{i}"),
                excerpt: String::new(),
                date: None,
                draft: false,
                authors: Vec::new(),
            })
            .collect())
    }
}

struct TitleRenderer;

#[async_trait]
impl Renderer for TitleRenderer {
    type Document = (String, Vec<String>);

    async fn render(
        &self,
        items: Vec<ListingItem>,
        navigation: &Navigation,
    ) -> AppResult<Self::Document> {
        Ok((
            navigation.title.clone(),
            items.into_iter().map(|i| i.title).collect(),
        ))
    }
}

#[tokio::test]
async fn test_every_item_rendered_exactly_once() {
    let source = NumberedSource { count: 23 };
    let total = source.total_items().await.expect("total");
    let plan = PagePlan::new("/posts", 10, total).expect("valid");
    assert_eq!(plan.num_pages(), num_pages(23, 10));

    let mut titles = Vec::new();
    let mut rendered = Vec::new();
    for page in plan {
        let items = source
            .fetch_slice(page.offset, page.limit)
            .await
            .expect("slice");
        assert_eq!(items.len() as u64, page.item_count());
        let nav = Navigation::from_page(&page, "Posts");
        let (title, entries) = TitleRenderer.render(items, &nav).await.expect("render");
        titles.push(title);
        rendered.extend(entries);
    }

    assert_eq!(titles, ["Posts", "Posts - 2", "Posts - 3"]);
    assert_eq!(rendered.len(), 23);
    assert_eq!(rendered.first().map(String::as_str), Some("Post 0"));
    assert_eq!(rendered.last().map(String::as_str), Some("Post 22"));
}
