//! Client-side narrowing of a fetched page.
//!
//! Only the category filter runs here; name and secondary text are sent to
//! the gateway instead. Filtering happens after the page arrives, so a full
//! page may render fewer than `limit` items. Pagination is decided from the
//! unfiltered count.

use crate::domain::{Event, Performer};
use crate::listing::criteria::{CategoryFilter, SearchCriteria};

/// Items that carry a category label the filter can compare against.
pub trait Filterable {
    fn category_label(&self) -> &str;
}

impl Filterable for Performer {
    fn category_label(&self) -> &str {
        self.category.label()
    }
}

impl Filterable for Event {
    fn category_label(&self) -> &str {
        &self.category
    }
}

/// Whether `item` satisfies `criteria`.
///
/// ```
/// use musiclist::listing::{filter, CategoryFilter, SearchCriteria};
/// use musiclist::{Performer, PerformerCategory};
///
/// let band = Performer::new("p1", "Blur", "GB", PerformerCategory::Group, 80);
/// let groups = SearchCriteria::new("", "", CategoryFilter::parse("group"));
/// let people = SearchCriteria::new("", "", CategoryFilter::parse("Person"));
///
/// assert!(filter::matches(&band, &groups));
/// assert!(!filter::matches(&band, &people));
/// ```
#[must_use]
pub fn matches<T: Filterable>(item: &T, criteria: &SearchCriteria) -> bool {
    match &criteria.category {
        CategoryFilter::Any => true,
        CategoryFilter::Only(label) => item.category_label().eq_ignore_ascii_case(label),
    }
}

/// Keeps the items of a page that satisfy `criteria`, in order.
#[must_use]
pub fn apply<T: Filterable>(items: Vec<T>, criteria: &SearchCriteria) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| matches(item, criteria))
        .collect()
}
