//! Event handling and state transition logic.
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the input loop or the worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur on [`AppState`]
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Session**: `SignIn`, `SignOut`
//! - **Navigation**: `ShowMainMenu`, `ShowSearchSelection`, `ShowAccount`, ...
//! - **Listing**: `SearchPerformers`, `LoadMorePerformers`, `SearchEvents`, `LoadMoreEvents`
//! - **Detail**: `OpenPerformer`, `OpenEvent`, `SubmitComment`
//! - **Worker**: `Worker` with typed response variants

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::CommentDraft;
use crate::listing::{CategoryFilter, ListingKind, PageRequest, SearchCriteria};
use crate::navigation::NavigationTarget;
use crate::worker::{PageItems, WorkerMessage, WorkerResponse};

/// Shown when sign-in is attempted with a blank username.
pub const EMPTY_USERNAME_NOTICE: &str = "Please enter a username.";

/// Events triggered by user input or worker responses.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SignIn {
        username: String,
    },
    ShowSignUp,
    SignOut,

    ShowMainMenu,
    ShowSearchSelection,
    ShowAccount,
    ShowPerformers,
    ShowEvents,

    /// Starts a performer search. `category` is the chooser value ("Any", "Group", ...).
    SearchPerformers {
        name: String,
        country: String,
        category: String,
    },
    LoadMorePerformers,

    SearchEvents {
        name: String,
        location: String,
    },
    LoadMoreEvents,

    /// Opens the performer at this index of the rendered listing.
    OpenPerformer(usize),

    /// Opens the event at this index of the rendered listing.
    OpenEvent(usize),

    /// Comments on the performer shown on the detail screen.
    SubmitComment {
        text: String,
        rating: u8,
    },

    /// Wraps a response from the background worker thread.
    Worker(WorkerResponse),

    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the screen needs redrawing together with the actions.
///
/// # Errors
///
/// Currently infallible; user and gateway failures become inline notices.
///
/// # Example
///
/// ```
/// use musiclist::app::{handle_event, Action, AppState, UiEvent};
/// use musiclist::session::{Session, SessionStore};
/// use std::sync::Arc;
///
/// let session = Arc::new(SessionStore::new());
/// let mut state = AppState::new(session.clone(), 10);
///
/// let (redraw, actions) = handle_event(
///     &mut state,
///     &UiEvent::SignIn { username: "ana".into() },
/// )?;
/// assert!(redraw);
/// assert!(matches!(actions[0], Action::Navigate(_)));
/// assert_eq!(session.username(), "ana");
/// # Ok::<(), musiclist::MusicListError>(())
/// ```
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &UiEvent) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        UiEvent::SignIn { username } => {
            let username = username.trim();
            if username.is_empty() {
                state.notice = Some(EMPTY_USERNAME_NOTICE.to_string());
                return Ok((true, vec![]));
            }
            state.session().set_username(Some(username));
            tracing::debug!(username = %username, "signed in");
            Ok((true, vec![state.navigate(NavigationTarget::MainMenu)]))
        }
        UiEvent::ShowSignUp => Ok((true, vec![state.navigate(NavigationTarget::SignUp)])),
        UiEvent::SignOut => {
            state.session().set_username(None);
            state.performer_detail = None;
            state.event_detail = None;
            tracing::debug!("signed out");
            Ok((true, vec![state.navigate(NavigationTarget::SignIn)]))
        }

        UiEvent::ShowMainMenu => Ok((true, vec![state.navigate(NavigationTarget::MainMenu)])),
        UiEvent::ShowSearchSelection => Ok((
            true,
            vec![state.navigate(NavigationTarget::SearchSelection)],
        )),
        UiEvent::ShowAccount => {
            let username = state.session().username();
            Ok((
                true,
                vec![state.navigate(NavigationTarget::Account { username })],
            ))
        }
        UiEvent::ShowPerformers => Ok((
            true,
            vec![state.navigate(NavigationTarget::PerformerListing)],
        )),
        UiEvent::ShowEvents => Ok((true, vec![state.navigate(NavigationTarget::EventListing)])),

        UiEvent::SearchPerformers {
            name,
            country,
            category,
        } => {
            let criteria =
                SearchCriteria::new(name.trim(), country.trim(), CategoryFilter::parse(category));
            Ok(post_page(state.performers.search(criteria)))
        }
        UiEvent::LoadMorePerformers => Ok(post_page(state.performers.load_more())),
        UiEvent::SearchEvents { name, location } => {
            let criteria = SearchCriteria::new(name.trim(), location.trim(), CategoryFilter::Any);
            Ok(post_page(state.events.search(criteria)))
        }
        UiEvent::LoadMoreEvents => Ok(post_page(state.events.load_more())),

        UiEvent::OpenPerformer(index) => {
            if state.detail_pending {
                tracing::debug!("detail read already in flight");
                return Ok((false, vec![]));
            }
            let Some(performer) = state.performers.sink().get(*index).cloned() else {
                state.notice = Some(format!("No performer at position {}.", index + 1));
                return Ok((true, vec![]));
            };
            state.detail_pending = true;
            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::read_performer_detail(
                    performer,
                ))],
            ))
        }
        UiEvent::OpenEvent(index) => {
            let Some(event) = state.events.sink().get(*index).cloned() else {
                state.notice = Some(format!("No event at position {}.", index + 1));
                return Ok((true, vec![]));
            };
            Ok((
                true,
                vec![state.navigate(NavigationTarget::EventDetail(Box::new(event)))],
            ))
        }

        UiEvent::SubmitComment { text, rating } => {
            if state.comment_pending {
                tracing::debug!("comment write already in flight");
                return Ok((false, vec![]));
            }
            let Some(entity_id) = state
                .performer_detail
                .as_ref()
                .map(|detail| detail.performer.id.clone())
            else {
                state.notice = Some("Open a performer before commenting.".to_string());
                return Ok((true, vec![]));
            };

            let draft = CommentDraft::new(state.session().username(), text.as_str(), *rating);
            match draft.validate() {
                Ok(comment) => {
                    state.comment_pending = true;
                    state.notice = None;
                    Ok((
                        true,
                        vec![Action::PostToWorker(WorkerMessage::write_comment(
                            entity_id, comment,
                        ))],
                    ))
                }
                Err(error) => {
                    tracing::debug!(error = %error, "comment rejected");
                    state.notice = Some(error.to_string());
                    Ok((true, vec![]))
                }
            }
        }

        UiEvent::Worker(response) => Ok(handle_worker_response(state, response)),

        UiEvent::Quit => Ok((false, vec![Action::Quit])),
    }
}

fn post_page(request: Option<PageRequest>) -> (bool, Vec<Action>) {
    request.map_or_else(
        || (false, vec![]),
        |request| {
            (
                true,
                vec![Action::PostToWorker(WorkerMessage::fetch_page(request))],
            )
        },
    )
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::PageLoaded { request_id, items } => {
            let applied = match items.clone() {
                PageItems::Performers(items) => state.performers.complete(*request_id, Ok(items)),
                PageItems::Events(items) => state.events.complete(*request_id, Ok(items)),
            };
            (applied, vec![])
        }
        WorkerResponse::PageFailed {
            request_id,
            kind,
            error,
        } => {
            let applied = match kind {
                ListingKind::Performers => {
                    state.performers.complete(*request_id, Err(error.clone()))
                }
                ListingKind::Events => state.events.complete(*request_id, Err(error.clone())),
            };
            (applied, vec![])
        }
        WorkerResponse::DetailLoaded { detail } => {
            state.detail_pending = false;
            tracing::debug!(performer_id = %detail.performer.id, "showing performer detail");
            (
                true,
                vec![state.navigate(NavigationTarget::PerformerDetail(Box::new(detail.clone())))],
            )
        }
        WorkerResponse::DetailFailed {
            performer_id,
            error,
        } => {
            state.detail_pending = false;
            tracing::warn!(performer_id = %performer_id, error = %error, "performer detail failed");
            state.notice = Some(format!("Could not load performer: {error}"));
            (true, vec![])
        }
        WorkerResponse::CommentWritten { entity_id, comment } => {
            state.comment_pending = false;
            let shown = state.apply_stored_comment(entity_id, comment.clone());
            (shown, vec![])
        }
        WorkerResponse::CommentFailed { entity_id, error } => {
            state.comment_pending = false;
            tracing::warn!(entity_id = %entity_id, error = %error, "comment write failed");
            state.notice = Some(format!("Could not save comment: {error}"));
            (true, vec![])
        }
    }
}

const fn event_name(event: &UiEvent) -> &'static str {
    match event {
        UiEvent::SignIn { .. } => "sign_in",
        UiEvent::ShowSignUp => "show_sign_up",
        UiEvent::SignOut => "sign_out",
        UiEvent::ShowMainMenu => "show_main_menu",
        UiEvent::ShowSearchSelection => "show_search_selection",
        UiEvent::ShowAccount => "show_account",
        UiEvent::ShowPerformers => "show_performers",
        UiEvent::ShowEvents => "show_events",
        UiEvent::SearchPerformers { .. } => "search_performers",
        UiEvent::LoadMorePerformers => "load_more_performers",
        UiEvent::SearchEvents { .. } => "search_events",
        UiEvent::LoadMoreEvents => "load_more_events",
        UiEvent::OpenPerformer(_) => "open_performer",
        UiEvent::OpenEvent(_) => "open_event",
        UiEvent::SubmitComment { .. } => "submit_comment",
        UiEvent::Worker(_) => "worker_response",
        UiEvent::Quit => "quit",
    }
}
