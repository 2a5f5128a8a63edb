//! Paged list results

use serde::{Deserialize, Serialize};

/// Pagination block returned when both `page` and `page_size` were requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u64,
}

impl Pagination {
    #[inline]
    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages
    }

    #[inline]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// A list response together with its optional pagination block
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
}

impl<T> Page<T> {
    /// An unpaged result
    pub fn all(items: Vec<T>) -> Self {
        Self {
            items,
            pagination: None,
        }
    }
}
