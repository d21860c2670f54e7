use crate::query::{Event, QueryState};
use crate::view_model::{ListingView, Notice, RowView};
use crate::{FetchOutcome, FetchRequest, ListingItem, Seq};

/// Controller state for one listing: the query state plus what the
/// coordinator needs to order fetches.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingState<T> {
    query: QueryState<T>,
    term: String,
    last_seq: Seq,
    dirty: bool,
}

impl<T> Default for ListingState<T> {
    fn default() -> Self {
        Self {
            query: QueryState::default(),
            term: String::new(),
            last_seq: 0,
            dirty: false,
        }
    }
}

impl<T: ListingItem> ListingState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &QueryState<T> {
        &self.query
    }

    /// The last submitted search term, trimmed.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Sequence number of the most recently issued fetch (0 before the first).
    pub fn current_seq(&self) -> Seq {
        self.last_seq
    }

    pub fn view(&self) -> ListingView<T> {
        let query = &self.query;
        let rows = query
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| RowView {
                number: crate::view_model::row_number(query.page(), index),
                item: item.clone(),
            })
            .collect::<Vec<_>>();

        let notice = if !query.can_fetch() {
            Some(Notice::FetchFailed)
        } else if rows.is_empty() && !query.is_fetching() {
            Some(Notice::NoResults)
        } else {
            None
        };

        ListingView {
            pagination_visible: !rows.is_empty() && query.can_fetch(),
            rows,
            page: query.page(),
            total_pages: query.total_pages(),
            term: self.term.clone(),
            is_fetching: query.is_fetching(),
            can_fetch: query.can_fetch(),
            search_enabled: !query.is_fetching(),
            notice,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything visible changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub(crate) fn set_term(&mut self, term: &str) {
        if self.term != term {
            self.term = term.to_string();
            self.dirty = true;
        }
    }

    pub(crate) fn set_page(&mut self, page: u32) {
        self.apply(Event::PageSet { page });
    }

    /// Assigns the next sequence number and marks it in flight.
    pub(crate) fn issue_fetch(&mut self) -> FetchRequest {
        self.last_seq += 1;
        let seq = self.last_seq;
        self.apply(Event::FetchRequested { seq });
        FetchRequest {
            seq,
            page: self.query.page(),
            term: self.term.clone(),
        }
    }

    pub(crate) fn apply_outcome(&mut self, seq: Seq, outcome: FetchOutcome<T>) {
        self.apply(Event::Completed { seq, outcome });
    }

    fn apply(&mut self, event: Event<T>) {
        let before = std::mem::take(&mut self.query);
        let after = before.clone().transition(event);
        if after != before {
            self.dirty = true;
        }
        self.query = after;
    }
}
