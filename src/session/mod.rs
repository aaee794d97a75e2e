//! Session identity, injected rather than looked up globally.

pub mod store;

pub use store::{Session, SessionStore};
