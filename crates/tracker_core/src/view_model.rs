/// Rows per page served by the listing endpoints.
pub const PAGE_SIZE: u64 = 10;

/// One-based position of a row across all pages.
pub fn row_number(page: u32, index: usize) -> u64 {
    PAGE_SIZE * u64::from(page) + index as u64 + 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    FetchFailed,
    NoResults,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingView<T> {
    pub rows: Vec<RowView<T>>,
    pub page: u32,
    pub total_pages: u32,
    pub term: String,
    pub is_fetching: bool,
    pub can_fetch: bool,
    pub search_enabled: bool,
    pub pagination_visible: bool,
    pub notice: Option<Notice>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowView<T> {
    pub number: u64,
    pub item: T,
}
