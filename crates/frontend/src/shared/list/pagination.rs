//! Page window over a filtered collection

use std::fmt;

/// Zero-based page index plus page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub rows_per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(10)
    }
}

/// Human readable "start–end de total" window, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mostrando {}–{} de {}", self.start, self.end, self.total)
    }
}

impl Pagination {
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            page: 0,
            rows_per_page: rows_per_page.max(1),
        }
    }

    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.rows_per_page)
    }

    /// Rows of the current page; empty when the page is past the end
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.rows_per_page).min(items.len());
        &items[start..end]
    }

    /// Always at least one page so the controls have something to show
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.rows_per_page).max(1)
    }

    pub fn set_page(&mut self, page: usize, total: usize) {
        self.page = page.min(self.total_pages(total) - 1);
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = rows_per_page.max(1);
        self.page = 0;
    }

    /// Pulls the page back inside the collection after it shrank
    pub fn clamp(&mut self, total: usize) {
        let last = self.total_pages(total) - 1;
        if self.page > last {
            self.page = last;
        }
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page + 1 < self.total_pages(total)
    }

    pub fn summary(&self, total: usize) -> PageSummary {
        PageSummary {
            start: (self.offset() + 1).min(total),
            end: (self.offset() + self.rows_per_page).min(total),
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_slice_last_partial_page() {
        let items: Vec<u32> = (0..23).collect();
        let mut p = Pagination::new(10);
        p.set_page(2, items.len());
        assert_eq!(p.slice(&items), &[20, 21, 22]);
        assert_eq!(p.summary(items.len()).to_string(), "Mostrando 21–23 de 23");
    }

    #[test]
    fn test_empty_collection() {
        let items: Vec<u32> = Vec::new();
        let p = Pagination::new(10);
        assert!(p.slice(&items).is_empty());
        assert_eq!(p.total_pages(0), 1);
        assert_eq!(p.summary(0), PageSummary { start: 0, end: 0, total: 0 });
        assert!(!p.has_next(0));
    }

    #[test]
    fn test_set_page_clamps_and_rows_reset() {
        let mut p = Pagination::new(5);
        p.set_page(99, 12);
        assert_eq!(p.page, 2);
        p.set_rows_per_page(25);
        assert_eq!(p.page, 0);
        assert_eq!(p.rows_per_page, 25);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut p = Pagination::new(10);
        p.set_page(4, 50);
        p.clamp(15);
        assert_eq!(p.page, 1);
        p.clamp(0);
        assert_eq!(p.page, 0);
    }

    proptest! {
        #[test]
        fn prop_slice_length_is_bounded(count in 0usize..200, rpp in prop_oneof![Just(5usize), Just(10), Just(25), Just(50)], page in 0usize..50) {
            let items: Vec<usize> = (0..count).collect();
            let p = Pagination { page, rows_per_page: rpp };
            let expected = rpp.min(count.saturating_sub(page * rpp));
            prop_assert_eq!(p.slice(&items).len(), expected);
        }

        #[test]
        fn prop_summary_within_total(count in 0usize..200, rpp in 1usize..60, page in 0usize..50) {
            let p = Pagination { page, rows_per_page: rpp };
            let s = p.summary(count);
            prop_assert!(s.start <= s.end);
            prop_assert!(s.end <= count);
        }
    }
}
