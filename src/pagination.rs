use serde::Serialize;

/// Fixed page size of the client list.
pub const CLIENTS_PER_PAGE: usize = 100;

/// Number of pages needed to show `total` items, `per_page` at a time.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Zero-based row offset of a one-based page.
///
/// `None` when the page is zero or the offset does not fit an SQL integer.
pub fn page_offset(page: usize, per_page: usize) -> Option<i64> {
    page.checked_sub(1)?
        .checked_mul(per_page)
        .and_then(|offset| i64::try_from(offset).ok())
}

/// Pagination metadata returned next to a page of items.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Requested page, `None` when the whole result set was returned.
    pub current_page: Option<usize>,
    pub page_size: usize,
    pub num_clients: usize,
    pub num_pages: usize,
}

impl PageInfo {
    pub fn new(current_page: Option<usize>, page_size: usize, total: usize) -> Self {
        Self {
            current_page,
            page_size,
            num_clients: total,
            num_pages: total_pages(total, page_size),
        }
    }
}
