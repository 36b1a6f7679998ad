/// Pagination support for list fetches
///
/// Standard page envelope used by every paged endpoint.
use serde::{Deserialize, Serialize};

/// First page of any paged listing. Pages are 1-based.
pub const FIRST_PAGE: u32 = 1;

/// Paginated result wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u64,
}

impl<T> PaginatedResult<T> {
    /// Normalizes the envelope: page and total_pages are at least 1 and page
    /// never exceeds total_pages.
    pub fn new(items: Vec<T>, page: u32, total_pages: u32, total_results: u64) -> Self {
        let total_pages = total_pages.max(FIRST_PAGE);
        Self {
            items,
            page: page.clamp(FIRST_PAGE, total_pages),
            total_pages,
            total_results,
        }
    }
}
