//! Application layer coordinating state, events, and actions.
//!
//! Sits between the binary's input loop and the listing, navigation, and
//! worker layers.
//!
//! ```text
//! User Input → UiEvent → handle_event → State Mutations → Actions → Side Effects
//!                             ↑                                        ↓
//!                             └─────────── Worker Responses ───────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`state`]: Central application state container
//! - [`shell`]: Composition root executing actions against the worker and navigator

pub mod actions;
pub mod handler;
pub mod shell;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, UiEvent};
pub use shell::Application;
pub use state::{AppState, EventListing, PerformerListing, Screen};
