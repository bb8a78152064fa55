//! Client-side pagination over a list that was fetched whole.

/// Default number of rows per page in history tables.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page cursor. Pages are 1-based; `page` is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// A row of the current page with its 1-based serial number across all pages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRow<'a, T> {
    pub serial: usize,
    pub item: &'a T,
}

/// The visible slice of a list.
#[derive(Debug, Clone, PartialEq)]
pub struct PageWindow<'a, T> {
    pub rows: Vec<PageRow<'a, T>>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> PageWindow<'_, T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// `Showing 11-20 of 45`, or `No records` when empty.
    pub fn summary(&self) -> String {
        match (self.rows.first(), self.rows.last()) {
            (Some(first), Some(last)) => format!(
                "Showing {}-{} of {}",
                first.serial, last.serial, self.total_items
            ),
            _ => "No records".to_string(),
        }
    }
}

impl Paginator {
    /// A zero page size is treated as one row per page.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page: 1,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for `total_items` rows; an empty list still has one page.
    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size).max(1)
    }

    /// Jump to `page`, clamped into `1..=total_pages`.
    pub fn set_page(&mut self, page: usize, total_items: usize) {
        self.page = page.clamp(1, self.total_pages(total_items));
    }

    pub fn next(&mut self, total_items: usize) {
        self.set_page(self.page + 1, total_items);
    }

    pub fn prev(&mut self, total_items: usize) {
        self.set_page(self.page.saturating_sub(1), total_items);
    }

    /// Back to the first page (after the underlying list is refetched).
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Slice out the current page. A cursor past the end (the list shrank
    /// after a refetch) is clamped to the last page.
    pub fn window<'a, T>(&self, items: &'a [T]) -> PageWindow<'a, T> {
        let total_pages = self.total_pages(items.len());
        let page = self.page.min(total_pages);
        let start = (page - 1) * self.page_size;

        let rows = items
            .iter()
            .enumerate()
            .skip(start)
            .take(self.page_size)
            .map(|(i, item)| PageRow {
                serial: i + 1,
                item,
            })
            .collect();

        PageWindow {
            rows,
            page,
            total_pages,
            total_items: items.len(),
        }
    }
}
