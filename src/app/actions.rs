//! Actions representing side effects to be executed by the application shell.
//!
//! The event handler returns a `Vec<Action>` after processing each event, so
//! several side effects can be queued at once. [`Application`](crate::app::Application)
//! executes them in order.
//!
//! # Example
//!
//! ```
//! use musiclist::app::Action;
//! use musiclist::navigation::NavigationTarget;
//!
//! let actions = vec![Action::Navigate(NavigationTarget::MainMenu)];
//! assert!(!actions[0].is_quit());
//! ```

use crate::navigation::NavigationTarget;
use crate::worker::WorkerMessage;

/// Side effects produced by the event handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Posts a request to the background worker thread.
    PostToWorker(WorkerMessage),

    /// Shows another screen through the navigator.
    Navigate(NavigationTarget),

    /// Ends the application loop.
    Quit,
}

impl Action {
    #[must_use]
    pub const fn is_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }
}
