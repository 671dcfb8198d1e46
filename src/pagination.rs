//! Pagination
//!
//! Page bookkeeping for the streamer table. Pages are 1-based.

use serde::Serialize;

/// Current page of a listing and the total it was cut from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    page: u64,
    page_size: u64,
    total: u64,
}

impl Pagination {
    /// Start on page 1 with nothing loaded yet. A zero page size is bumped to 1.
    pub fn new(page_size: u64) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total: 0,
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Row offset of the first item on the current page
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.page_size
    }

    /// Number of pages needed for `total`; zero when empty
    pub fn max_page(&self) -> u64 {
        self.total.div_ceil(self.page_size)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.max_page()
    }

    /// Record the total reported with the latest page
    pub fn set_total(&mut self, total: u64) {
        self.total = total;
    }

    /// Back to page 1, used whenever a filter changes
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Advance one page if there is one
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page if not on the first
    pub fn prev(&mut self) -> bool {
        if self.has_prev() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// "Page 2 of 5 (93 total)"; an empty listing still reads "of 1"
    pub fn label(&self) -> String {
        format!(
            "Page {} of {} ({} total)",
            self.page,
            self.max_page().max(1),
            self.total
        )
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_total(page_size: u64, total: u64) -> Pagination {
        let mut pager = Pagination::new(page_size);
        pager.set_total(total);
        pager
    }

    #[test]
    fn test_first_page_disables_prev() {
        let pager = with_total(20, 93);
        assert_eq!(pager.page(), 1);
        assert!(!pager.has_prev());
        assert!(pager.has_next());
        assert_eq!(pager.offset(), 0);
    }

    #[test]
    fn test_last_page_disables_next() {
        let mut pager = with_total(20, 93);
        while pager.next() {}
        assert_eq!(pager.page(), 5);
        assert_eq!(pager.offset(), 80);
        assert!(!pager.has_next());
        assert!(pager.has_prev());
    }

    #[test]
    fn test_exact_multiple() {
        let mut pager = with_total(20, 40);
        assert_eq!(pager.max_page(), 2);
        assert!(pager.next());
        assert!(!pager.next());
    }

    #[test]
    fn test_empty_listing() {
        let pager = with_total(20, 0);
        assert_eq!(pager.max_page(), 0);
        assert!(!pager.has_prev());
        assert!(!pager.has_next());
        assert_eq!(pager.label(), "Page 1 of 1 (0 total)");
    }

    #[test]
    fn test_prev_on_first_page_is_noop() {
        let mut pager = with_total(10, 5);
        assert!(!pager.prev());
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_reset() {
        let mut pager = with_total(10, 55);
        pager.next();
        pager.next();
        assert_eq!(pager.label(), "Page 3 of 6 (55 total)");
        pager.reset();
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_zero_page_size() {
        let pager = with_total(0, 3);
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.max_page(), 3);
    }
}
