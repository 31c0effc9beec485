//! Sequential page walk that drives fetching and mapping.

use crate::fetch::PageOutcome;
use crate::mapper;
use crate::models::{ProductRecord, SearchFilter};

/// Anything that can produce one page of search results.
///
/// Implemented by [`PageFetcher`](crate::fetch::PageFetcher); tests substitute
/// scripted sources.
pub trait PageSource {
    fn fetch_page(&self, page: u32, filter: &SearchFilter) -> PageOutcome;
}

/// Why the page walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// This page decoded with no products.
    EmptyPage(u32),
    /// The page limit was reached; holds the limit.
    PageLimit(u32),
}

/// Everything gathered by one walk.
#[derive(Debug, Clone)]
pub struct Collected {
    /// Records in page order, upstream order within each page.
    pub records: Vec<ProductRecord>,
    pub pages_with_data: u32,
    /// Pages skipped because every fetch attempt failed.
    pub failed_pages: Vec<u32>,
    pub stop: StopReason,
}

impl Collected {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Walk pages `1..=max_pages` until an empty page or the limit.
///
/// A page that fails after retries contributes nothing and the walk moves on;
/// only a successfully decoded empty page ends it early.
pub fn collect<S>(source: &S, filter: &SearchFilter, max_pages: u32) -> Collected
where
    S: PageSource + ?Sized,
{
    let mut records = Vec::new();
    let mut pages_with_data = 0;
    let mut failed_pages = Vec::new();
    let mut stop = StopReason::PageLimit(max_pages);

    for page in 1..=max_pages {
        match source.fetch_page(page, filter) {
            PageOutcome::Products(products) => {
                tracing::debug!(page, count = products.len(), "page fetched");
                records.extend(mapper::map_products(&products));
                pages_with_data += 1;
            }
            PageOutcome::Empty => {
                tracing::debug!(page, "empty page, stopping");
                stop = StopReason::EmptyPage(page);
                break;
            }
            PageOutcome::Failed(e) => {
                tracing::warn!(page, "skipping page: {}", e);
                failed_pages.push(page);
            }
        }
    }

    tracing::info!(
        records = records.len(),
        pages_with_data,
        failed = failed_pages.len(),
        ?stop,
        "collection finished for {}",
        filter
    );

    Collected {
        records,
        pages_with_data,
        failed_pages,
        stop,
    }
}
