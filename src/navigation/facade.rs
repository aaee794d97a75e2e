//! The navigation contract screens depend on.

use crate::domain::{Event, PerformerDetail};
use crate::navigation::target::NavigationTarget;

/// Requests a transition to another screen.
///
/// Fire-and-forget: nothing is returned. Disposing of the current screen is
/// the caller's business.
pub trait Navigator {
    fn show_sign_in(&mut self);

    fn show_sign_up(&mut self);

    fn show_main_menu(&mut self);

    fn show_performer_listing(&mut self);

    /// Shows one performer with its recordings, comments, and average rating.
    fn show_performer_detail(&mut self, detail: PerformerDetail);

    fn show_event_listing(&mut self);

    fn show_event_detail(&mut self, event: Event);

    /// Shows the performer / event chooser.
    fn show_search_selection(&mut self);

    /// Shows the account screen for `username` (empty when signed out).
    fn show_account(&mut self, username: &str);
}

/// [`Navigator`] that turns every call back into a [`NavigationTarget`]
/// and hands it to `route`.
///
/// ```
/// use musiclist::navigation::{NavigationTarget, Navigator, TargetRouter};
///
/// let mut seen = Vec::new();
/// let mut router = TargetRouter::new(|target| seen.push(target));
/// router.show_main_menu();
/// drop(router);
///
/// assert_eq!(seen, vec![NavigationTarget::MainMenu]);
/// ```
pub struct TargetRouter<F> {
    route: F,
}

impl<F: FnMut(NavigationTarget)> TargetRouter<F> {
    pub const fn new(route: F) -> Self {
        Self { route }
    }
}

impl<F: FnMut(NavigationTarget)> Navigator for TargetRouter<F> {
    fn show_sign_in(&mut self) {
        (self.route)(NavigationTarget::SignIn);
    }

    fn show_sign_up(&mut self) {
        (self.route)(NavigationTarget::SignUp);
    }

    fn show_main_menu(&mut self) {
        (self.route)(NavigationTarget::MainMenu);
    }

    fn show_performer_listing(&mut self) {
        (self.route)(NavigationTarget::PerformerListing);
    }

    fn show_performer_detail(&mut self, detail: PerformerDetail) {
        (self.route)(NavigationTarget::PerformerDetail(Box::new(detail)));
    }

    fn show_event_listing(&mut self) {
        (self.route)(NavigationTarget::EventListing);
    }

    fn show_event_detail(&mut self, event: Event) {
        (self.route)(NavigationTarget::EventDetail(Box::new(event)));
    }

    fn show_search_selection(&mut self) {
        (self.route)(NavigationTarget::SearchSelection);
    }

    fn show_account(&mut self, username: &str) {
        (self.route)(NavigationTarget::Account {
            username: username.to_string(),
        });
    }
}
