//! Query matching and ordering for the file-backed catalogue.
//!
//! Names are matched token by token with the skim fuzzy matcher: every
//! whitespace-separated token of the query must fuzzy-match the lowercased
//! name. Results are ordered by score (highest first), ties broken by name,
//! before `offset` and `limit` are applied, so paging through a query is
//! stable.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::cmp::Ordering;

/// Tokenized free-text query.
pub struct NameQuery {
    tokens: Vec<String>,
    matcher: SkimMatcherV2,
}

impl NameQuery {
    /// Splits `query` into lowercase tokens. A blank query matches everything.
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            tokens: query.split_whitespace().map(str::to_lowercase).collect(),
            matcher: SkimMatcherV2::default(),
        }
    }

    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        if self.tokens.is_empty() {
            return true;
        }
        let name_lower = name.to_lowercase();
        self.tokens
            .iter()
            .all(|token| self.matcher.fuzzy_match(&name_lower, token).is_some())
    }
}

/// True when `filter` is blank or equals `value` ignoring case.
#[must_use]
pub fn exact_or_blank(value: &str, filter: &str) -> bool {
    let filter = filter.trim();
    filter.is_empty() || value.eq_ignore_ascii_case(filter)
}

/// True when `filter` is blank or is a case-insensitive substring of `value`.
#[must_use]
pub fn contains_or_blank(value: &str, filter: &str) -> bool {
    let filter = filter.trim();
    filter.is_empty() || value.to_lowercase().contains(&filter.to_lowercase())
}

/// Store ordering: score descending, then name ascending.
#[must_use]
pub fn by_score_then_name(a: (u32, &str), b: (u32, &str)) -> Ordering {
    b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1))
}

/// Returns the `limit` items starting at `offset`.
#[must_use]
pub fn page_of<T: Clone>(ordered: &[&T], limit: usize, offset: usize) -> Vec<T> {
    ordered
        .iter()
        .skip(offset)
        .take(limit)
        .map(|item| (*item).clone())
        .collect()
}
