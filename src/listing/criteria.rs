//! Search criteria bound to a listing.

use std::fmt;

/// Label the category chooser uses for "no filter".
pub const ANY_CATEGORY: &str = "Any";

/// Which catalogue a listing pages through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingKind {
    Performers,
    Events,
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Performers => f.write_str("performers"),
            Self::Events => f.write_str("events"),
        }
    }
}

/// Client-side category filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No filtering.
    #[default]
    Any,
    /// Keep only items whose category equals this label, ignoring case.
    Only(String),
}

impl CategoryFilter {
    /// Parses the chooser value. Blank input and `"Any"` (any case) mean no filter.
    ///
    /// ```
    /// use musiclist::listing::CategoryFilter;
    ///
    /// assert_eq!(CategoryFilter::parse("any"), CategoryFilter::Any);
    /// assert_eq!(CategoryFilter::parse("Group"), CategoryFilter::Only("Group".into()));
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ANY_CATEGORY) {
            Self::Any
        } else {
            Self::Only(value.to_string())
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str(ANY_CATEGORY),
            Self::Only(label) => f.write_str(label),
        }
    }
}

/// User-entered search parameters.
///
/// `name` and `secondary` are sent to the gateway; for performers the
/// secondary field is the country, for events the location. `category` is
/// applied on the client after a page arrives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub name: String,
    pub secondary: String,
    pub category: CategoryFilter,
}

impl SearchCriteria {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        secondary: impl Into<String>,
        category: CategoryFilter,
    ) -> Self {
        Self {
            name: name.into(),
            secondary: secondary.into(),
            category,
        }
    }

    /// Criteria matching everything.
    #[must_use]
    pub fn match_all() -> Self {
        Self::default()
    }
}
