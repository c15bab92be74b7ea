/// Default number of entries per admin list page.
pub const DEFAULT_PER_PAGE: u64 = 20;

/// Upper bound on entries per page accepted from clients.
pub const MAX_PER_PAGE: u64 = 100;

/// One page of results along with totals for the whole listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, per_page: u64) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            items,
            total,
            page,
            per_page,
            total_pages,
        }
    }

    /// Converts every item while keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Clamps a requested page size into `1..=MAX_PER_PAGE`, defaulting when absent.
pub fn clamp_per_page(entries: Option<u64>) -> u64 {
    entries.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_total_pages() {
        let page = Page::new(vec![1, 2], 41, 0, 20);
        assert_eq!(page.total_pages, 3);

        let empty: Page<i32> = Page::new(vec![], 0, 0, 20);
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn clamps_page_size() {
        assert_eq!(clamp_per_page(None), DEFAULT_PER_PAGE);
        assert_eq!(clamp_per_page(Some(0)), 1);
        assert_eq!(clamp_per_page(Some(5_000)), MAX_PER_PAGE);
    }
}
