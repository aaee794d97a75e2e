//! Navigation destinations as value data.

use crate::domain::{Event, PerformerDetail};
use crate::navigation::facade::Navigator;

/// One variant per destination screen, each carrying what that screen needs.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationTarget {
    SignIn,
    SignUp,
    MainMenu,
    PerformerListing,
    PerformerDetail(Box<PerformerDetail>),
    EventListing,
    EventDetail(Box<Event>),
    SearchSelection,
    Account {
        /// Signed-in username, empty when signed out.
        username: String,
    },
}

impl NavigationTarget {
    /// Stable screen name for logs.
    #[must_use]
    pub const fn screen_name(&self) -> &'static str {
        match self {
            Self::SignIn => "sign_in",
            Self::SignUp => "sign_up",
            Self::MainMenu => "main_menu",
            Self::PerformerListing => "performer_listing",
            Self::PerformerDetail(_) => "performer_detail",
            Self::EventListing => "event_listing",
            Self::EventDetail(_) => "event_detail",
            Self::SearchSelection => "search_selection",
            Self::Account { .. } => "account",
        }
    }

    /// Calls the [`Navigator`] method for this destination.
    pub fn dispatch<N: Navigator + ?Sized>(self, navigator: &mut N) {
        tracing::debug!(screen = self.screen_name(), "navigating");
        match self {
            Self::SignIn => navigator.show_sign_in(),
            Self::SignUp => navigator.show_sign_up(),
            Self::MainMenu => navigator.show_main_menu(),
            Self::PerformerListing => navigator.show_performer_listing(),
            Self::PerformerDetail(detail) => navigator.show_performer_detail(*detail),
            Self::EventListing => navigator.show_event_listing(),
            Self::EventDetail(event) => navigator.show_event_detail(*event),
            Self::SearchSelection => navigator.show_search_selection(),
            Self::Account { username } => navigator.show_account(&username),
        }
    }
}
