use serde::Serialize;

/// Query parameters of a paged listing. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// Request for a 1-based page index as clicked in the pager.
    pub fn for_page(page_index: u32, page_size: u32) -> Self {
        Self {
            page: page_index.max(1),
            page_size: page_size.max(1),
        }
    }
}

/// Pager state rendered under a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub current: u32,
    pub total_pages: u32,
    pub total_items: i64,
}

impl Pager {
    pub fn new(request: PageRequest, total_items: i64) -> Self {
        let total = total_items.max(0) as u64;
        let size = u64::from(request.page_size);
        let total_pages = total.div_ceil(size).max(1) as u32;
        Self {
            current: request.page.min(total_pages),
            total_pages,
            total_items,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    pub fn previous(&self) -> u32 {
        self.current.saturating_sub(1).max(1)
    }

    pub fn next(&self) -> u32 {
        (self.current + 1).min(self.total_pages)
    }
}
