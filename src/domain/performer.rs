//! Performer domain model.
//!
//! A performer is a group, person, or other act returned by the catalogue
//! search. Performers are identified by an opaque string id assigned by
//! the remote store.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Closed set of performer categories.
///
/// Store values are matched ignoring case; unknown strings deserialize to
/// [`PerformerCategory::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PerformerCategory {
    Group,
    Person,
    Other,
}

impl PerformerCategory {
    /// All categories in display order.
    pub const ALL: [Self; 3] = [Self::Group, Self::Person, Self::Other];

    /// Display label, identical to the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Group => "Group",
            Self::Person => "Person",
            Self::Other => "Other",
        }
    }

    /// Parses a category label, ignoring case.
    ///
    /// Returns `None` for anything outside the closed set.
    ///
    /// ```
    /// use musiclist::PerformerCategory;
    ///
    /// assert_eq!(PerformerCategory::parse("group"), Some(PerformerCategory::Group));
    /// assert_eq!(PerformerCategory::parse("Orchestra"), None);
    /// ```
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl<'de> Deserialize<'de> for PerformerCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::parse(&label).unwrap_or(Self::Other))
    }
}

impl fmt::Display for PerformerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A performer as returned by the catalogue search.
///
/// # Fields
///
/// - `id`: Store identifier, unique across performers
/// - `name`: Display name
/// - `country`: ISO country code, may be empty when the store has none
/// - `category`: Group, person, or other
/// - `score`: Popularity / relevance score assigned by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub country: String,
    pub category: PerformerCategory,
    #[serde(default)]
    pub score: u32,
}

impl Performer {
    /// Creates a performer value.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        country: impl Into<String>,
        category: PerformerCategory,
        score: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            country: country.into(),
            category,
            score,
        }
    }
}
