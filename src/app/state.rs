//! Application state.
//!
//! [`AppState`] holds the injected session, the screen currently shown, one
//! listing controller per catalogue, and the detail screen data. Listing
//! controllers live as long as the state, so leaving a listing and coming
//! back shows the same results.

use crate::app::actions::Action;
use crate::domain::{Comment, Event, Performer, PerformerDetail};
use crate::listing::{ListingController, ListingPanel};
use crate::navigation::NavigationTarget;
use crate::session::Session;
use std::fmt;
use std::sync::Arc;

/// Performer listing bound to its panel.
pub type PerformerListing = ListingController<Performer, ListingPanel<Performer>>;

/// Event listing bound to its panel.
pub type EventListing = ListingController<Event, ListingPanel<Event>>;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    SignIn,
    SignUp,
    MainMenu,
    SearchSelection,
    PerformerListing,
    PerformerDetail,
    EventListing,
    EventDetail,
    Account,
}

impl From<&NavigationTarget> for Screen {
    fn from(target: &NavigationTarget) -> Self {
        match target {
            NavigationTarget::SignIn => Self::SignIn,
            NavigationTarget::SignUp => Self::SignUp,
            NavigationTarget::MainMenu => Self::MainMenu,
            NavigationTarget::PerformerListing => Self::PerformerListing,
            NavigationTarget::PerformerDetail(_) => Self::PerformerDetail,
            NavigationTarget::EventListing => Self::EventListing,
            NavigationTarget::EventDetail(_) => Self::EventDetail,
            NavigationTarget::SearchSelection => Self::SearchSelection,
            NavigationTarget::Account { .. } => Self::Account,
        }
    }
}

/// Central application state, mutated only by the event handler.
pub struct AppState {
    session: Arc<dyn Session>,

    pub screen: Screen,

    pub performers: PerformerListing,

    pub events: EventListing,

    /// Data behind the performer detail screen, kept after navigating away.
    pub performer_detail: Option<PerformerDetail>,

    pub event_detail: Option<Event>,

    /// Inline message for the current screen (validation or failure).
    pub notice: Option<String>,

    /// A performer detail read is in flight.
    pub detail_pending: bool,

    /// A comment write is in flight.
    pub comment_pending: bool,
}

impl AppState {
    /// Creates the state with empty listings of `page_size` items per page.
    #[must_use]
    pub fn new(session: Arc<dyn Session>, page_size: usize) -> Self {
        Self {
            session,
            screen: Screen::SignIn,
            performers: ListingController::new(page_size, ListingPanel::new()),
            events: ListingController::new(page_size, ListingPanel::new()),
            performer_detail: None,
            event_detail: None,
            notice: None,
            detail_pending: false,
            comment_pending: false,
        }
    }

    #[must_use]
    pub fn session(&self) -> &dyn Session {
        self.session.as_ref()
    }

    /// Records the new screen and returns the action that shows it.
    ///
    /// Clears any inline notice from the previous screen.
    pub fn navigate(&mut self, target: NavigationTarget) -> Action {
        self.screen = Screen::from(&target);
        self.notice = None;
        match &target {
            NavigationTarget::PerformerDetail(detail) => {
                self.performer_detail = Some(detail.as_ref().clone());
            }
            NavigationTarget::EventDetail(event) => {
                self.event_detail = Some(event.as_ref().clone());
            }
            _ => {}
        }
        Action::Navigate(target)
    }

    /// Shows a stored comment on the detail screen it belongs to.
    ///
    /// Returns `false` when the detail screen now shows another performer.
    pub fn apply_stored_comment(&mut self, entity_id: &str, comment: Comment) -> bool {
        let Some(detail) = self
            .performer_detail
            .as_mut()
            .filter(|detail| detail.performer.id == entity_id)
        else {
            return false;
        };
        detail.comments.upsert(comment);
        detail.average_rating = detail.comments.average_rating();
        true
    }

    /// Whether any fetch, read, or write is outstanding.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.performers.is_in_flight()
            || self.events.is_in_flight()
            || self.detail_pending
            || self.comment_pending
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("screen", &self.screen)
            .field("username", &self.session.username())
            .field("performers", &self.performers.sink().items().len())
            .field("events", &self.events.sink().items().len())
            .field("notice", &self.notice)
            .field("busy", &self.is_busy())
            .finish_non_exhaustive()
    }
}
