//! Domain layer: catalogue entries, comments, and error types.
//!
//! Everything here is plain value data. Entries are immutable once fetched
//! and carry no references to the screen or controller that holds them.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`performer`]: Performers and their closed category set
//! - [`event`]: Events
//! - [`comment`]: Comments, per-author threads, and rating averages
//! - [`detail`]: Recordings and the performer detail bundle

pub mod comment;
pub mod detail;
pub mod error;
pub mod event;
pub mod performer;

pub use comment::{Comment, CommentDraft, CommentThread, MAX_RATING};
pub use detail::{PerformerDetail, PerformerExtras, Recording};
pub use error::{GatewayError, MusicListError, Result};
pub use event::Event;
pub use performer::{Performer, PerformerCategory};
