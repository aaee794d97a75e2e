//! Record types for the file-backed catalogue.
//!
//! These are the on-disk shapes. Performers and events are stored as the
//! domain types directly; comments carry a timestamp that the domain
//! [`Comment`] does not need.

use crate::domain::{Comment, Event, Performer, Recording};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current catalogue file format version.
pub const CATALOG_VERSION: u32 = 1;

/// A stored comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub author: String,
    pub text: String,
    pub rating: u8,
    /// Unix timestamp of the most recent write by this author.
    pub created_at: i64,
}

impl CommentRecord {
    /// Creates a record stamped with the current time.
    pub fn new(author: impl Into<String>, text: impl Into<String>, rating: u8) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            rating,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

impl From<CommentRecord> for Comment {
    fn from(record: CommentRecord) -> Self {
        Self {
            author: record.author,
            text: record.text,
            rating: record.rating,
        }
    }
}

/// Top-level catalogue file structure.
///
/// ```json
/// {
///   "version": 1,
///   "performers": [{ "id": "p1", "name": "...", "country": "GB", "category": "Group", "score": 100 }],
///   "events": [{ "id": "e1", "name": "...", "performer_name": "...", "venue_name": "...", "score": 90 }],
///   "recordings": { "p1": [{ "title": "...", "length_ms": 215000 }] },
///   "comments": { "p1": [{ "author": "ana", "text": "...", "rating": 9, "created_at": 1700000000 }] }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: u32,

    #[serde(default)]
    pub performers: Vec<Performer>,

    #[serde(default)]
    pub events: Vec<Event>,

    /// Top recordings keyed by performer id.
    #[serde(default)]
    pub recordings: HashMap<String, Vec<Recording>>,

    /// Comments keyed by entity id, in arrival order.
    #[serde(default)]
    pub comments: HashMap<String, Vec<CommentRecord>>,
}

impl Default for CatalogData {
    fn default() -> Self {
        Self {
            version: CATALOG_VERSION,
            performers: Vec::new(),
            events: Vec::new(),
            recordings: HashMap::new(),
            comments: HashMap::new(),
        }
    }
}
