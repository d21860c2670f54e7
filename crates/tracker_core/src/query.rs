use crate::{FetchOutcome, Seq};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Fetching,
    Error,
}

/// Inputs to [`QueryState::transition`].
#[derive(Debug, Clone, PartialEq)]
pub enum Event<T> {
    /// A fetch tagged `seq` has been launched.
    FetchRequested { seq: Seq },
    /// The user picked a page; applied before any fetch resolves.
    PageSet { page: u32 },
    /// A fetch finished.
    Completed { seq: Seq, outcome: FetchOutcome<T> },
}

/// Observable state of one paginated listing.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    items: Vec<T>,
    page: u32,
    total_pages: u32,
    is_fetching: bool,
    can_fetch: bool,
    in_flight: Option<Seq>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            total_pages: 1,
            is_fetching: false,
            can_fetch: true,
            in_flight: None,
        }
    }
}

impl<T> QueryState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    pub fn can_fetch(&self) -> bool {
        self.can_fetch
    }

    pub fn in_flight(&self) -> Option<Seq> {
        self.in_flight
    }

    pub fn phase(&self) -> Phase {
        if self.is_fetching {
            Phase::Fetching
        } else if !self.can_fetch {
            Phase::Error
        } else {
            Phase::Idle
        }
    }

    /// Pure transition function. Outcomes for anything but the in-flight
    /// sequence number leave the state untouched.
    pub fn transition(mut self, event: Event<T>) -> Self {
        match event {
            Event::FetchRequested { seq } => {
                self.is_fetching = true;
                self.in_flight = Some(seq);
            }
            Event::PageSet { page } => {
                self.page = page;
            }
            Event::Completed { seq, outcome } => {
                if self.in_flight != Some(seq) {
                    return self;
                }
                self.in_flight = None;
                self.is_fetching = false;
                match outcome {
                    FetchOutcome::Success { items, total_pages } => {
                        self.items = items;
                        self.total_pages = total_pages.max(1);
                        self.can_fetch = true;
                    }
                    FetchOutcome::Failure { .. } => {
                        self.can_fetch = false;
                    }
                }
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FailureReason;

    fn success(items: Vec<u32>, total_pages: u32) -> FetchOutcome<u32> {
        FetchOutcome::Success { items, total_pages }
    }

    #[test]
    fn starts_idle_on_first_page() {
        let state = QueryState::<u32>::new();
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.page(), 0);
        assert_eq!(state.total_pages(), 1);
        assert!(state.can_fetch());
    }

    #[test]
    fn error_state_accepts_a_new_fetch() {
        let state = QueryState::<u32>::new()
            .transition(Event::FetchRequested { seq: 1 })
            .transition(Event::Completed {
                seq: 1,
                outcome: FetchOutcome::failure(FailureReason::Unreachable {
                    detail: "offline".into(),
                }),
            });
        assert_eq!(state.phase(), Phase::Error);

        let state = state.transition(Event::FetchRequested { seq: 2 });
        assert_eq!(state.phase(), Phase::Fetching);
        assert!(!state.can_fetch());
    }

    #[test]
    fn outcome_without_matching_flight_is_dropped() {
        let state = QueryState::<u32>::new().transition(Event::FetchRequested { seq: 3 });
        let next = state
            .clone()
            .transition(Event::Completed {
                seq: 2,
                outcome: success(vec![9], 4),
            });
        assert_eq!(next, state);

        let idle = QueryState::<u32>::new();
        let next = idle.clone().transition(Event::Completed {
            seq: 0,
            outcome: success(vec![9], 4),
        });
        assert_eq!(next, idle);
    }

    #[test]
    fn zero_total_pages_is_clamped() {
        let state = QueryState::<u32>::new()
            .transition(Event::FetchRequested { seq: 1 })
            .transition(Event::Completed {
                seq: 1,
                outcome: success(Vec::new(), 0),
            });
        assert_eq!(state.total_pages(), 1);
        assert!(state.items().is_empty());
    }

    #[test]
    fn page_set_applies_while_fetching() {
        let state = QueryState::<u32>::new()
            .transition(Event::FetchRequested { seq: 1 })
            .transition(Event::PageSet { page: 6 });
        assert_eq!(state.page(), 6);
        assert!(state.is_fetching());
    }
}
