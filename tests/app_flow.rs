//! End-to-end screen flows through the event handler and the worker.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{event, RecordingNavigator};
use musiclist::app::{handle_event, Action, AppState, Application, Screen, UiEvent};
use musiclist::domain::Recording;
use musiclist::gateway::{CatalogData, DataGateway, JsonGateway, StoreHandle};
use musiclist::listing::Indicator;
use musiclist::worker::{ListingWorker, WorkerHandle};
use musiclist::{NavigationTarget, Performer, PerformerCategory, Session, SessionStore};

fn gateway() -> Arc<dyn DataGateway> {
    let mut data = CatalogData::default();
    data.performers = vec![
        Performer::new("p1", "Radiohead", "GB", PerformerCategory::Group, 95),
        Performer::new("p2", "Bjork", "IS", PerformerCategory::Person, 90),
    ];
    data.events = vec![event("e1", "Glastonbury", "Worthy Farm")];
    data.recordings.insert(
        "p1".into(),
        vec![Recording {
            title: "Airbag".into(),
            length_ms: Some(284_000),
        }],
    );
    Arc::new(JsonGateway::in_memory(data))
}

/// Runs `event` and every worker round trip it causes, synchronously.
///
/// Returns the navigation targets produced along the way.
fn drive(state: &mut AppState, worker: &ListingWorker, event: UiEvent) -> Vec<NavigationTarget> {
    let mut queue = vec![event];
    let mut targets = Vec::new();
    while let Some(event) = queue.pop() {
        let (_, actions) = handle_event(state, &event).expect("handler is infallible");
        for action in actions {
            match action {
                Action::PostToWorker(message) => {
                    queue.push(UiEvent::Worker(worker.handle_message(message)));
                }
                Action::Navigate(target) => targets.push(target),
                Action::Quit => {}
            }
        }
    }
    targets
}

fn setup() -> (Arc<SessionStore>, AppState, ListingWorker) {
    let gateway = gateway();
    let session = Arc::new(SessionStore::with_store(StoreHandle::new(gateway)));
    let worker = ListingWorker::from_session(session.as_ref()).expect("session has a store");
    let state = AppState::new(session.clone(), 10);
    (session, state, worker)
}

fn sign_in_and_open_radiohead(state: &mut AppState, worker: &ListingWorker) {
    drive(state, worker, UiEvent::SignIn { username: "ana".into() });
    drive(state, worker, UiEvent::ShowPerformers);
    drive(
        state,
        worker,
        UiEvent::SearchPerformers {
            name: "radio".into(),
            country: String::new(),
            category: "Any".into(),
        },
    );
    drive(state, worker, UiEvent::OpenPerformer(0));
}

#[test]
fn sign_in_goes_to_main_menu() {
    let (session, mut state, worker) = setup();

    let targets = drive(&mut state, &worker, UiEvent::SignIn { username: "  ana ".into() });

    assert_eq!(targets, vec![NavigationTarget::MainMenu]);
    assert_eq!(session.username(), "ana");
    assert_eq!(state.screen, Screen::MainMenu);
}

#[test]
fn blank_username_stays_on_sign_in() {
    let (session, mut state, worker) = setup();

    let targets = drive(&mut state, &worker, UiEvent::SignIn { username: " ".into() });

    assert!(targets.is_empty());
    assert!(!session.is_signed_in());
    assert_eq!(state.notice.as_deref(), Some("Please enter a username."));
}

#[test]
fn search_then_open_performer_shows_detail() {
    let (_, mut state, worker) = setup();
    sign_in_and_open_radiohead(&mut state, &worker);

    assert_eq!(state.screen, Screen::PerformerDetail);
    let detail = state.performer_detail.as_ref().expect("detail loaded");
    assert_eq!(detail.performer.id, "p1");
    assert_eq!(detail.top_recordings.len(), 1);
    assert!(!state.is_busy());
}

#[test]
fn empty_comment_is_rejected_without_a_write() {
    let (_, mut state, worker) = setup();
    sign_in_and_open_radiohead(&mut state, &worker);

    let (_, actions) = handle_event(
        &mut state,
        &UiEvent::SubmitComment {
            text: "   ".into(),
            rating: 7,
        },
    )
    .unwrap();

    assert!(actions.is_empty());
    assert_eq!(state.notice.as_deref(), Some("Please enter a comment."));
    assert!(state.performer_detail.as_ref().unwrap().comments.is_empty());
}

#[test]
fn stored_comment_is_appended_and_averaged() {
    let (_, mut state, worker) = setup();
    sign_in_and_open_radiohead(&mut state, &worker);

    drive(
        &mut state,
        &worker,
        UiEvent::SubmitComment {
            text: "Kid A forever".into(),
            rating: 9,
        },
    );

    let detail = state.performer_detail.as_ref().unwrap();
    assert_eq!(detail.comments.len(), 1);
    assert_eq!(detail.comments.get("ana").map(|c| c.rating), Some(9));
    assert_eq!(detail.average_rating, Some(9.0));
    assert!(state.notice.is_none());
}

#[test]
fn opening_unknown_position_sets_notice() {
    let (_, mut state, worker) = setup();
    drive(&mut state, &worker, UiEvent::ShowPerformers);

    let targets = drive(&mut state, &worker, UiEvent::OpenPerformer(3));

    assert!(targets.is_empty());
    assert_eq!(state.notice.as_deref(), Some("No performer at position 4."));
}

#[test]
fn event_search_with_no_match_shows_indicator() {
    let (_, mut state, worker) = setup();
    drive(&mut state, &worker, UiEvent::ShowEvents);

    drive(
        &mut state,
        &worker,
        UiEvent::SearchEvents {
            name: String::new(),
            location: "Nowhere".into(),
        },
    );

    assert_eq!(state.events.sink().indicator(), Some(&Indicator::NoResults));
    assert!(!state.events.has_more());
}

#[test]
fn sign_out_clears_the_username() {
    let (session, mut state, worker) = setup();
    drive(&mut state, &worker, UiEvent::SignIn { username: "ana".into() });

    let targets = drive(&mut state, &worker, UiEvent::SignOut);

    assert_eq!(targets, vec![NavigationTarget::SignIn]);
    assert_eq!(session.username(), "");
    assert!(session.store().is_some());
}

#[test]
fn application_routes_through_the_navigator() {
    let gateway = gateway();
    let session = Arc::new(SessionStore::with_store(StoreHandle::new(gateway)));
    let worker = WorkerHandle::spawn(ListingWorker::from_session(session.as_ref()).unwrap()).unwrap();
    let mut app = Application::new(
        AppState::new(session, 10),
        worker,
        RecordingNavigator::default(),
    );

    app.start();
    app.dispatch(&UiEvent::SignIn { username: "ben".into() }).unwrap();
    app.dispatch(&UiEvent::ShowAccount).unwrap();
    app.dispatch(&UiEvent::ShowPerformers).unwrap();
    app.dispatch(&UiEvent::SearchPerformers {
        name: String::new(),
        country: "IS".into(),
        category: String::new(),
    })
    .unwrap();
    app.settle(Duration::from_secs(5)).unwrap();
    app.dispatch(&UiEvent::OpenPerformer(0)).unwrap();
    app.settle(Duration::from_secs(5)).unwrap();

    let navigator = app.navigator();
    assert_eq!(
        navigator.screens,
        vec!["sign_in", "main_menu", "account", "performer_listing", "performer_detail"]
    );
    assert_eq!(navigator.last_account.as_deref(), Some("ben"));
    assert_eq!(
        navigator.last_detail.as_ref().map(|d| d.performer.name.as_str()),
        Some("Bjork")
    );

    app.dispatch(&UiEvent::Quit).unwrap();
    assert!(!app.is_running());
}
