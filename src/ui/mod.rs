//! Presentation adapters: view models and the plain-text renderer.
//!
//! ```text
//! AppState → ListingViewModel / DetailViewModel → render → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready data computed from panels and detail values
//! - [`renderer`]: Text output for each screen

pub mod renderer;
pub mod viewmodel;

pub use renderer::render;
pub use viewmodel::{DetailRow, DetailViewModel, DisplayItem, Displayable, ListingViewModel};
