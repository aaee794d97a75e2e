//! Screen transitions through a single seam.
//!
//! Screens and the application layer depend on [`Navigator`] only. The
//! event handler produces [`NavigationTarget`] values; the composition root
//! dispatches them to whichever navigator it was built with.

pub mod facade;
pub mod target;

pub use facade::{Navigator, TargetRouter};
pub use target::NavigationTarget;
