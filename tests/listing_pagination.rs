//! Paging behaviour of the listing controller against a scripted gateway.

mod common;

use common::{event, performers, RecordingSink, ScriptedGateway};
use musiclist::listing::{CategoryFilter, ListingController, Phase, SearchCriteria};
use musiclist::{Event, GatewayError, Performer, PerformerCategory};

type Controller = ListingController<Performer, RecordingSink<Performer>>;

fn controller() -> Controller {
    ListingController::new(10, RecordingSink::default())
}

fn by_name(name: &str) -> SearchCriteria {
    SearchCriteria::new(name, "", CategoryFilter::Any)
}

#[test]
fn full_page_then_short_page_exhausts_listing() {
    let gateway = ScriptedGateway::new();
    gateway
        .push_performers(Ok(performers("a", 10)))
        .push_performers(Ok(performers("b", 4)));
    let mut listing = controller();

    assert!(listing.search_with(&gateway, by_name("blur")));
    assert_eq!(listing.sink().items.len(), 10);
    assert!(listing.has_more());
    assert_eq!(listing.state().offset(), 10);

    assert!(listing.load_more_with(&gateway));
    assert_eq!(listing.sink().items.len(), 14);
    assert!(!listing.has_more());
    assert_eq!(listing.sink().renders, vec![(10, true, true), (4, false, false)]);

    assert!(!listing.load_more_with(&gateway));
    assert_eq!(gateway.offsets(), vec![0, 10]);
    assert!(gateway.calls().iter().all(|call| call.name == "blur" && call.limit == 10));
}

#[test]
fn filtered_page_keeps_pagination_open() {
    let gateway = ScriptedGateway::new();
    gateway.push_performers(Ok(performers("p", 10)));
    let mut listing = controller();

    let criteria = SearchCriteria::new("", "", CategoryFilter::Only("group".into()));
    listing.search_with(&gateway, criteria);

    let sink = listing.sink();
    assert_eq!(sink.items.len(), 4);
    assert!(sink.items.iter().all(|p| p.category == PerformerCategory::Group));
    assert_eq!(sink.no_results, 0);
    assert!(listing.has_more());
}

#[test]
fn page_filtered_to_nothing_is_not_no_results() {
    let gateway = ScriptedGateway::new();
    gateway.push_performers(Ok(performers("p", 10)));
    let mut listing = controller();

    listing.search_with(&gateway, SearchCriteria::new("", "", CategoryFilter::Only("Other".into())));

    assert_eq!(listing.sink().no_results, 0);
    assert_eq!(listing.sink().renders, vec![(0, true, true)]);
}

#[test]
fn empty_first_page_reports_no_results() {
    let gateway = ScriptedGateway::new();
    gateway.push_performers(Ok(Vec::new()));
    let mut listing = controller();

    listing.search_with(&gateway, by_name("zzz"));

    assert_eq!(listing.sink().no_results, 1);
    assert!(listing.sink().renders.is_empty());
    assert!(!listing.has_more());
    assert!(!listing.load_more_with(&gateway));
    assert_eq!(gateway.calls().len(), 1);
}

#[test]
fn failure_keeps_items_and_retries_same_offset() {
    let gateway = ScriptedGateway::new();
    gateway
        .push_performers(Ok(performers("a", 10)))
        .push_performers(Err(GatewayError::Transport("connection reset".into())))
        .push_performers(Ok(performers("b", 10)));
    let mut listing = controller();

    listing.search_with(&gateway, by_name(""));
    listing.load_more_with(&gateway);

    assert_eq!(listing.sink().items.len(), 10);
    assert_eq!(listing.sink().errors.len(), 1);
    assert!(listing.sink().errors[0].contains("connection reset"));
    assert_eq!(listing.state().offset(), 10);
    assert_eq!(listing.state().phase(), Phase::Idle);
    assert!(listing.has_more());

    assert!(listing.load_more_with(&gateway));
    assert_eq!(gateway.offsets(), vec![0, 10, 10]);
    assert_eq!(listing.sink().items.len(), 20);
}

#[test]
fn requests_while_in_flight_are_ignored() {
    let gateway = ScriptedGateway::new();
    let mut listing = controller();

    let request = listing.search(by_name("first")).expect("search dispatched");
    assert!(listing.is_in_flight());
    assert!(listing.search(by_name("second")).is_none());
    assert!(listing.load_more().is_none());
    assert!(!listing.load_more_with(&gateway));
    assert!(gateway.calls().is_empty());

    assert!(listing.complete(request.id, Ok(performers("a", 10))));
    assert!(!listing.is_in_flight());
    assert_eq!(listing.state().criteria().name, "first");
}

#[test]
fn new_search_after_exhaustion_starts_over() {
    let gateway = ScriptedGateway::new();
    gateway
        .push_performers(Ok(performers("a", 3)))
        .push_performers(Ok(performers("b", 10)));
    let mut listing = controller();

    listing.search_with(&gateway, by_name("a"));
    assert!(!listing.has_more());

    listing.search_with(&gateway, by_name("b"));
    assert!(listing.has_more());
    assert_eq!(gateway.offsets(), vec![0, 0]);
    assert_eq!(listing.sink().items.len(), 10);
    assert!(listing.sink().items.iter().all(|p| p.id.starts_with("b-")));
}

#[test]
fn stale_completion_does_not_touch_the_listing() {
    let mut listing = controller();

    let first = listing.search(by_name("x")).expect("dispatched");
    assert!(listing.complete(first.id, Ok(performers("a", 10))));
    let second = listing.load_more().expect("dispatched");

    assert!(!listing.complete(first.id, Ok(performers("stale", 10))));
    assert!(listing.is_in_flight());
    assert!(listing.complete(second.id, Ok(performers("b", 2))));
    assert_eq!(listing.sink().items.len(), 12);
}

#[test]
fn search_after_failed_load_more_starts_over() {
    let gateway = ScriptedGateway::new();
    gateway
        .push_performers(Ok(performers("a", 10)))
        .push_performers(Err(GatewayError::Remote("503".into())))
        .push_performers(Ok(performers("b", 10)));
    let mut listing = controller();

    listing.search_with(&gateway, by_name("a"));
    listing.load_more_with(&gateway);
    assert_eq!(listing.state().offset(), 10);
    assert_eq!(listing.sink().errors.len(), 1);

    assert!(listing.search_with(&gateway, by_name("b")));

    assert_eq!(gateway.offsets(), vec![0, 10, 0]);
    assert_eq!(listing.state().offset(), 10);
    assert!(listing.has_more());
    assert_eq!(listing.sink().renders.last(), Some(&(10, true, true)));
    assert_eq!(listing.sink().items.len(), 10);
    assert!(listing.sink().items.iter().all(|p| p.id.starts_with("b-")));
}

#[test]
fn search_resets_offset_before_dispatch_even_after_failure() {
    let gateway = ScriptedGateway::new();
    gateway
        .push_performers(Ok(performers("a", 10)))
        .push_performers(Err(GatewayError::Transport("timeout".into())));
    let mut listing = controller();
    listing.search_with(&gateway, by_name("a"));
    listing.load_more_with(&gateway);

    let request = listing.search(by_name("c")).expect("search dispatched");

    assert_eq!(request.offset, 0);
    assert_eq!(listing.state().offset(), 0);
    assert!(listing.has_more());
}

#[test]
fn event_listing_pages_by_location() {
    let gateway = ScriptedGateway::new();
    let first: Vec<Event> = (0..3)
        .map(|n| event(&format!("e{n}"), &format!("Gig {n}"), "Harpa"))
        .collect();
    gateway
        .push_events(Ok(first))
        .push_events(Ok(vec![event("e3", "Gig 3", "Harpa")]));
    let mut listing: ListingController<Event, RecordingSink<Event>> =
        ListingController::new(3, RecordingSink::default());

    listing.search_with(&gateway, SearchCriteria::new("gig", "Harpa", CategoryFilter::Any));
    assert!(listing.has_more());
    listing.load_more_with(&gateway);

    assert_eq!(listing.sink().items.len(), 4);
    assert!(!listing.has_more());
    assert_eq!(gateway.offsets(), vec![0, 3]);
    assert!(gateway
        .calls()
        .iter()
        .all(|call| call.name == "gig" && call.secondary == "Harpa" && call.limit == 3));
}
