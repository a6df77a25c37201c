//! Offset pagination over a countable, windowable query source.
//!
//! The persistence layer owns filtering and sorting; this module only
//! counts the full sequence, fetches the requested window, and packages
//! the page with its metadata.

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::errors::ApiError;

/// A filtered, sorted record source that can be counted and read in
/// bounded windows without materializing the rest.
pub trait PageSource {
    type Item;

    /// Count every record matching the source's filter.
    async fn count(&self) -> Result<u64, ApiError>;

    /// Fetch up to `limit` records starting at `skip`, in the source's
    /// sort order.
    async fn fetch_window(&self, skip: u64, limit: i64) -> Result<Vec<Self::Item>, ApiError>;
}

/// Requested page window.
///
/// Out-of-range input is clamped on construction: `page` to at least 1,
/// `per_page` to `1..=MAX_PAGE_SIZE`. Clamping (rather than rejecting)
/// keeps negative offsets from ever reaching the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    per_page: u64,
}

impl PageRequest {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page: page.max(DEFAULT_PAGE_NUMBER),
            per_page: per_page.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Number of records to skip before the requested window.
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.per_page
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus the metadata describing the full sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> PagedList<T> {
    /// Run the paged query: exactly one count and one bounded fetch
    /// against the source. A page past the end yields empty items while
    /// the metadata still reflects the true totals.
    pub async fn create<S>(source: &S, request: PageRequest) -> Result<Self, ApiError>
    where
        S: PageSource<Item = T>,
    {
        let total = source.count().await?;
        let items = source
            .fetch_window(request.offset(), request.per_page() as i64)
            .await?;

        Ok(Self {
            items,
            page: request.page(),
            per_page: request.per_page(),
            total,
            total_pages: total.div_ceil(request.per_page()),
        })
    }

    /// Project the items into another shape, keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> PagedList<U>
    where
        F: FnMut(T) -> U,
    {
        PagedList {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct VecSource {
        records: Vec<u32>,
    }

    impl PageSource for VecSource {
        type Item = u32;

        async fn count(&self) -> Result<u64, ApiError> {
            Ok(self.records.len() as u64)
        }

        async fn fetch_window(&self, skip: u64, limit: i64) -> Result<Vec<u32>, ApiError> {
            Ok(self
                .records
                .iter()
                .skip(skip as usize)
                .take(limit as usize)
                .copied()
                .collect())
        }
    }

    fn source(total: u32) -> VecSource {
        VecSource {
            records: (0..total).collect(),
        }
    }

    #[test]
    fn page_request_clamps_out_of_range_input() {
        let request = PageRequest::new(0, 0);
        assert_eq!(request.page(), 1);
        assert_eq!(request.per_page(), 1);

        let request = PageRequest::new(2, 500);
        assert_eq!(request.per_page(), MAX_PAGE_SIZE);

        let request = PageRequest::default();
        assert_eq!(request.page(), 1);
        assert_eq!(request.per_page(), 10);
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 20);
        assert_eq!(PageRequest::new(0, 10).offset(), 0);
    }

    #[actix_web::test]
    async fn twenty_five_records_with_page_size_ten() {
        let source = source(25);

        let page1 = PagedList::create(&source, PageRequest::new(1, 10))
            .await
            .unwrap();
        assert_eq!(page1.items, (0..10).collect::<Vec<_>>());
        assert_eq!(page1.total, 25);
        assert_eq!(page1.total_pages, 3);

        let page3 = PagedList::create(&source, PageRequest::new(3, 10))
            .await
            .unwrap();
        assert_eq!(page3.items, (20..25).collect::<Vec<_>>());
        assert_eq!(page3.total_pages, 3);

        let page4 = PagedList::create(&source, PageRequest::new(4, 10))
            .await
            .unwrap();
        assert!(page4.items.is_empty());
        assert_eq!(page4.total, 25);
        assert_eq!(page4.total_pages, 3);
    }

    #[actix_web::test]
    async fn empty_source_has_zero_pages() {
        let list = PagedList::create(&source(0), PageRequest::new(1, 10))
            .await
            .unwrap();
        assert!(list.items.is_empty());
        assert_eq!(list.total, 0);
        assert_eq!(list.total_pages, 0);
    }

    #[actix_web::test]
    async fn exact_multiple_of_page_size() {
        let list = PagedList::create(&source(20), PageRequest::new(2, 10))
            .await
            .unwrap();
        assert_eq!(list.items.len(), 10);
        assert_eq!(list.total_pages, 2);
    }

    #[actix_web::test]
    async fn window_length_matches_remaining_records() {
        let source = source(7);
        for page in 1..=3u64 {
            let list = PagedList::create(&source, PageRequest::new(page, 3))
                .await
                .unwrap();
            let expected = (7u64.saturating_sub((page - 1) * 3)).min(3);
            assert_eq!(list.items.len() as u64, expected);
            assert_eq!(list.total_pages, 3);
        }
    }

    #[actix_web::test]
    async fn repeated_calls_return_identical_pages() {
        let source = source(25);
        let request = PageRequest::new(2, 10);
        let first = PagedList::create(&source, request).await.unwrap();
        let second = PagedList::create(&source, request).await.unwrap();
        assert_eq!(first, second);
    }

    #[actix_web::test]
    async fn projection_keeps_metadata() {
        let list = PagedList::create(&source(25), PageRequest::new(3, 10))
            .await
            .unwrap()
            .map(|n| n.to_string());
        assert_eq!(list.items, vec!["20", "21", "22", "23", "24"]);
        assert_eq!(list.total, 25);
        assert_eq!(list.total_pages, 3);
    }
}
