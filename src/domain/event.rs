//! Event domain model.

use serde::{Deserialize, Serialize};

/// A live event (concert, festival, ...) as returned by the catalogue search.
///
/// The performer is a denormalized name, not a reference to a
/// [`Performer`](crate::domain::Performer). Dates are passed through as the
/// store formats them; this layer does not check that `end_date` follows
/// `begin_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub performer_name: String,
    #[serde(default)]
    pub begin_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default)]
    pub venue_name: String,
    #[serde(default)]
    pub score: u32,
}
