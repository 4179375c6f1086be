use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of pages needed to hold `total_items` at `page_size` items per page.
///
/// A page size of zero yields zero pages.
pub fn total_pages(total_items: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Navigation metadata for a page of results, sent in the `X-Pagination` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagedMeta {
    pub total_items: u64,
    pub current_page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PagedMeta {
    pub fn new(total_items: u64, current_page: u64, page_size: u64) -> Self {
        let total_pages = total_pages(total_items, page_size);
        Self {
            total_items,
            current_page,
            page_size,
            total_pages,
            has_next_page: current_page < total_pages,
            has_previous_page: current_page > 1,
        }
    }
}

/// One page of items plus the repository-reported total.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total_items: u64,
    pub page: u64,
    pub page_size: u64,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, total_items: u64, page: u64, page_size: u64) -> Self {
        Self {
            items,
            total_items,
            page,
            page_size,
        }
    }

    pub fn meta(&self) -> PagedMeta {
        PagedMeta::new(self.total_items, self.page, self.page_size)
    }

    pub fn total_pages(&self) -> u64 {
        total_pages(self.total_items, self.page_size)
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(15, 10), 2);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(21, 10), 3);
        assert_eq!(total_pages(1, 50), 1);
    }

    #[test]
    fn test_total_pages_empty() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn test_meta_first_of_two_pages() {
        let meta = PagedMeta::new(15, 1, 10);
        assert_eq!(meta.total_pages, 2);
        assert!(meta.has_next_page);
        assert!(!meta.has_previous_page);
    }

    #[test]
    fn test_meta_last_page() {
        let meta = PagedMeta::new(15, 2, 10);
        assert!(!meta.has_next_page);
        assert!(meta.has_previous_page);
    }

    #[test]
    fn test_meta_page_beyond_end() {
        let meta = PagedMeta::new(15, 5, 10);
        assert!(!meta.has_next_page);
        assert!(meta.has_previous_page);
    }

    #[test]
    fn test_meta_serializes_camel_case() {
        let json = serde_json::to_value(PagedMeta::new(14, 1, 10)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "totalItems": 14,
                "currentPage": 1,
                "pageSize": 10,
                "totalPages": 2,
                "hasNextPage": true,
                "hasPreviousPage": false
            })
        );
    }

    #[test]
    fn test_paged_result_uses_reported_total() {
        let result = PagedResult::new(vec![1, 2, 3], 15, 1, 3);
        assert_eq!(result.items.len(), 3);
        assert_eq!(result.total_pages(), 5);
        assert!(result.has_next_page());
        assert!(!result.has_previous_page());
        assert_eq!(result.meta().total_items, 15);
    }

    proptest! {
        #[test]
        fn prop_total_pages_is_ceiling(total in 0u64..100_000, size in 1u64..=50) {
            let pages = total_pages(total, size);
            prop_assert!(pages * size >= total);
            prop_assert!(pages == 0 || (pages - 1) * size < total);
        }

        #[test]
        fn prop_has_next_iff_before_last_page(
            total in 0u64..10_000,
            size in 1u64..=50,
            page in 1u64..500,
        ) {
            let meta = PagedMeta::new(total, page, size);
            prop_assert_eq!(meta.has_next_page, page < meta.total_pages);
            prop_assert_eq!(meta.has_previous_page, page > 1);
        }
    }
}
