use crate::{Effect, FetchOutcome, ListingItem, ListingState, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// Every intent issues exactly one fetch under a fresh sequence number.
/// Completions are applied only when they carry the latest number; anything
/// older is dropped without touching state.
pub fn update<T: ListingItem>(
    mut state: ListingState<T>,
    msg: Msg<T>,
) -> (ListingState<T>, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => vec![Effect::Fetch(state.issue_fetch())],
        Msg::SearchSubmitted { term } => {
            state.set_term(term.trim());
            // A new search always starts from the first page.
            state.set_page(0);
            vec![Effect::Fetch(state.issue_fetch())]
        }
        Msg::PageChanged { page } => {
            state.set_page(page);
            vec![Effect::Fetch(state.issue_fetch())]
        }
        Msg::FetchCompleted { request, outcome } => {
            if request.seq != state.current_seq() {
                return (state, Vec::new());
            }
            let failure = match &outcome {
                FetchOutcome::Failure { reason } => Some(reason.clone()),
                FetchOutcome::Success { .. } => None,
            };
            state.apply_outcome(request.seq, outcome);
            failure
                .map(|reason| vec![Effect::ReportFailure { reason }])
                .unwrap_or_default()
        }
    };

    (state, effects)
}
