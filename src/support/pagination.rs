//! Page-based pagination primitives

/// Default page size when a request does not specify one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size a request may ask for
pub const MAX_PAGE_SIZE: u32 = 100;

/// A 1-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page: u64, page_size: u32) -> Self {
        debug_assert!(page >= 1, "page is 1-based");
        debug_assert!(page_size >= 1, "page_size must be positive");
        Self { page, page_size }
    }

    /// Index of the first element on this page
    pub fn offset(&self) -> usize {
        let offset = self
            .page
            .saturating_sub(1)
            .saturating_mul(self.page_size as u64);
        usize::try_from(offset).unwrap_or(usize::MAX)
    }

    /// Half-open `[start, end)` bounds of this page, clamped to `len`
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let start = self.offset().min(len);
        let end = start.saturating_add(self.page_size as usize).min(len);
        (start, end)
    }

    /// Number of pages needed to hold `total` elements (0 when `total` is 0)
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.page_size.max(1) as u64)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus pagination metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub page_size: u32,
    /// Element count across all pages
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_items: u64) -> Self {
        Self {
            items,
            page: request.page,
            page_size: request.page_size,
            total_items,
            total_pages: request.total_pages(total_items),
        }
    }

    /// Result for a request that matched nothing
    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let req = PageRequest::new(1, 10);
        assert_eq!(req.total_pages(0), 0);
        assert_eq!(req.total_pages(1), 1);
        assert_eq!(req.total_pages(10), 1);
        assert_eq!(req.total_pages(11), 2);
        assert_eq!(req.total_pages(150), 15);
    }

    #[test]
    fn bounds_clamp_to_length() {
        assert_eq!(PageRequest::new(1, 10).bounds(150), (0, 10));
        assert_eq!(PageRequest::new(15, 10).bounds(150), (140, 150));
        assert_eq!(PageRequest::new(7, 7).bounds(45), (42, 45));
        assert_eq!(PageRequest::new(9, 10).bounds(45), (45, 45));
    }

    #[test]
    fn empty_result_has_no_pages() {
        let result: PaginatedResult<u8> = PaginatedResult::empty(PageRequest::new(4, 25));
        assert!(result.items.is_empty());
        assert_eq!(result.page, 4);
        assert_eq!(result.page_size, 25);
        assert_eq!(result.total_items, 0);
        assert_eq!(result.total_pages, 0);
    }

    #[test]
    fn offset_saturates_for_huge_pages() {
        let req = PageRequest::new(u64::MAX, 100);
        assert_eq!(req.offset(), usize::MAX);
        assert_eq!(req.bounds(150), (150, 150));
    }
}
