use std::sync::Once;

use tracker_core::{
    update, Effect, FailureReason, FetchOutcome, FetchRequest, ListingState, Msg, Notice, Phase,
    StockInfo,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(tracker_logging::initialize_for_tests);
}

fn stock(id: u64, symbol: &str) -> StockInfo {
    StockInfo {
        id,
        symbol: symbol.to_string(),
        name: format!("{symbol} Inc."),
        exchange: "NASDAQ".to_string(),
        country: "United States".to_string(),
        currency: "USD".to_string(),
        mic_code: "XNGS".to_string(),
    }
}

fn fetch_request(effects: &[Effect]) -> FetchRequest {
    match effects {
        [Effect::Fetch(request)] => request.clone(),
        other => panic!("expected a single fetch, got {other:?}"),
    }
}

fn complete(
    state: ListingState<StockInfo>,
    request: FetchRequest,
    outcome: FetchOutcome<StockInfo>,
) -> (ListingState<StockInfo>, Vec<Effect>) {
    update(state, Msg::FetchCompleted { request, outcome })
}

fn mounted_with(items: Vec<StockInfo>, total_pages: u32) -> ListingState<StockInfo> {
    let (state, effects) = update(ListingState::new(), Msg::Mounted);
    let request = fetch_request(&effects);
    let (state, _) = complete(
        state,
        request,
        FetchOutcome::Success { items, total_pages },
    );
    state
}

#[test]
fn mount_fetches_first_page_and_applies_success() {
    init_logging();
    let (state, effects) = update(ListingState::<StockInfo>::new(), Msg::Mounted);

    let request = fetch_request(&effects);
    assert_eq!(request.page, 0);
    assert_eq!(request.term, "");
    assert_eq!(request.search(), None);
    assert_eq!(state.query().phase(), Phase::Fetching);

    let items = vec![stock(1, "A"), stock(2, "B")];
    let (mut state, effects) = complete(
        state,
        request,
        FetchOutcome::Success {
            items: items.clone(),
            total_pages: 3,
        },
    );

    assert!(effects.is_empty());
    let query = state.query();
    assert_eq!(query.items(), items.as_slice());
    assert_eq!(query.page(), 0);
    assert_eq!(query.total_pages(), 3);
    assert!(!query.is_fetching());
    assert!(query.can_fetch());
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn search_resets_page_to_zero() {
    init_logging();
    let state = mounted_with(vec![stock(1, "A")], 8);
    let (state, effects) = update(state, Msg::change_page(3));
    let request = fetch_request(&effects);
    let (state, _) = complete(
        state,
        request,
        FetchOutcome::Success {
            items: vec![stock(31, "C")],
            total_pages: 8,
        },
    );
    assert_eq!(state.query().page(), 3);

    let (state, effects) = update(state, Msg::submit_search("AAPL"));
    let request = fetch_request(&effects);
    assert_eq!(request.page, 0);
    assert_eq!(request.term, "AAPL");
    assert_eq!(request.search(), Some("AAPL"));
    assert_eq!(state.query().page(), 0);
}

#[test]
fn search_resets_page_even_while_fetching() {
    init_logging();
    let state = mounted_with(vec![stock(1, "A")], 8);
    let (state, _) = update(state, Msg::PageChanged { page: 5 });
    let (state, effects) = update(
        state,
        Msg::SearchSubmitted {
            term: "  msft ".to_string(),
        },
    );
    let request = fetch_request(&effects);
    assert_eq!(request.page, 0);
    assert_eq!(request.term, "msft");
    assert_eq!(state.term(), "msft");
}

#[test]
fn page_change_keeps_submitted_term() {
    init_logging();
    let state = mounted_with(vec![stock(1, "A")], 4);
    let (state, effects) = update(
        state,
        Msg::SearchSubmitted {
            term: "tesla".to_string(),
        },
    );
    let request = fetch_request(&effects);
    let (state, _) = complete(
        state,
        request,
        FetchOutcome::Success {
            items: vec![stock(7, "TSLA")],
            total_pages: 2,
        },
    );

    let (state, effects) = update(state, Msg::PageChanged { page: 1 });
    let request = fetch_request(&effects);
    assert_eq!(request.page, 1);
    assert_eq!(request.term, "tesla");
    assert_eq!(state.query().page(), 1);
    assert_eq!(state.query().total_pages(), 2);
}

#[test]
fn page_change_is_visible_before_fetch_resolves() {
    init_logging();
    let state = mounted_with(vec![stock(1, "A")], 9);
    let (mut state, _) = update(state, Msg::PageChanged { page: 4 });

    let view = state.view();
    assert_eq!(view.page, 4);
    assert!(view.is_fetching);
    assert!(!view.search_enabled);
    // Old rows stay until the new page lands, numbered for the new page.
    assert_eq!(view.rows[0].number, 41);
    assert!(state.consume_dirty());
}

#[test]
fn rejected_fetch_keeps_last_good_data() {
    init_logging();
    let items = vec![stock(1, "A"), stock(2, "B")];
    let state = mounted_with(items.clone(), 3);
    let (state, effects) = update(state, Msg::PageChanged { page: 2 });
    let request = fetch_request(&effects);
    let before_page = state.query().page();

    let reason = FailureReason::Rejected {
        status: 429,
        message: Some("rate limited".to_string()),
    };
    let (state, effects) = complete(state, request, FetchOutcome::failure(reason.clone()));

    assert_eq!(effects, vec![Effect::ReportFailure { reason }]);
    let query = state.query();
    assert!(!query.can_fetch());
    assert!(!query.is_fetching());
    assert_eq!(query.items(), items.as_slice());
    assert_eq!(query.page(), before_page);
    assert_eq!(query.total_pages(), 3);
    assert_eq!(query.phase(), Phase::Error);

    let view = state.view();
    assert_eq!(view.notice, Some(Notice::FetchFailed));
    assert!(!view.pagination_visible);
}

#[test]
fn success_after_failure_restores_can_fetch() {
    init_logging();
    let state = mounted_with(vec![stock(1, "A")], 3);
    let (state, effects) = update(state, Msg::PageChanged { page: 1 });
    let (state, _) = complete(
        state,
        fetch_request(&effects),
        FetchOutcome::failure(FailureReason::Unreachable {
            detail: "connection refused".to_string(),
        }),
    );
    assert!(!state.query().can_fetch());

    let (state, effects) = update(state, Msg::PageChanged { page: 1 });
    assert_eq!(state.query().phase(), Phase::Fetching);
    let (state, effects) = complete(
        state,
        fetch_request(&effects),
        FetchOutcome::Success {
            items: vec![stock(11, "K")],
            total_pages: 3,
        },
    );

    assert!(effects.is_empty());
    assert!(state.query().can_fetch());
    assert_eq!(state.query().items(), [stock(11, "K")].as_slice());
}

#[test]
fn success_replaces_items_without_merging() {
    init_logging();
    let state = mounted_with(vec![stock(1, "A"), stock(2, "B")], 2);
    let (state, effects) = update(state, Msg::PageChanged { page: 1 });
    let (state, _) = complete(
        state,
        fetch_request(&effects),
        FetchOutcome::Success {
            items: vec![stock(3, "C")],
            total_pages: 2,
        },
    );
    assert_eq!(state.query().items(), [stock(3, "C")].as_slice());
}

#[test]
fn empty_result_shows_no_results_notice() {
    init_logging();
    let state = mounted_with(Vec::new(), 0);
    let view = state.view();
    assert_eq!(view.notice, Some(Notice::NoResults));
    assert!(!view.pagination_visible);
    assert_eq!(view.total_pages, 1);
}
