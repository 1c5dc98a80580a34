use serde::{Deserialize, Serialize};

/// 1-based page request used by every listing query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Page {
    pub number: usize,
    pub limit: usize,
}

impl Page {
    pub fn new(number: usize, limit: usize) -> Self {
        Self {
            number: number.max(1),
            limit: limit.max(1),
        }
    }

    pub fn offset(&self) -> usize {
        (self.number - 1) * self.limit
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            number: 1,
            limit: 20,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub current_page: usize,
    pub items_per_page: usize,
}

impl<T> Paginated<T> {
    /// Slice a fully sorted result set down to the requested page.
    pub fn slice(all: Vec<T>, page: Page) -> Self {
        let total_items = all.len();
        let items = all
            .into_iter()
            .skip(page.offset())
            .take(page.limit)
            .collect();
        Self {
            items,
            total_items,
            current_page: page.number,
            items_per_page: page.limit,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page)
    }
}
