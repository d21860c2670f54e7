use crate::{FetchOutcome, FetchRequest};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg<T> {
    /// The listing view became visible; load the first page.
    Mounted,
    /// User pressed search with the given term.
    SearchSubmitted { term: String },
    /// User picked a (zero-based) page.
    PageChanged { page: u32 },
    /// Engine completion for a previously issued fetch.
    FetchCompleted {
        request: FetchRequest,
        outcome: FetchOutcome<T>,
    },
}

impl<T> Msg<T> {
    pub fn submit_search(term: impl Into<String>) -> Self {
        Msg::SearchSubmitted { term: term.into() }
    }

    pub fn change_page(page: u32) -> Self {
        Msg::PageChanged { page }
    }
}
