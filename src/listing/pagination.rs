//! Incremental-fetch state machine for one listing.
//!
//! ```text
//!            start_search / load_more
//!   Idle ───────────────────────────────▶ Fetching
//!    ▲                                       │
//!    └──────── apply_page / apply_failure ───┘
//! ```
//!
//! Invariants:
//! - `offset` is always a multiple of `limit`
//! - at most one fetch is outstanding; requests made while fetching are dropped
//! - `has_more` is only ever cleared by a short page, never by a failure

use crate::listing::criteria::SearchCriteria;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Whether a fetch is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Fetching,
}

/// Offset, limit, has-more flag, and in-flight phase for one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    offset: usize,
    limit: usize,
    has_more: bool,
    phase: Phase,
    criteria: SearchCriteria,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PaginationState {
    /// Creates an idle state. A zero `limit` is raised to 1.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            offset: 0,
            limit: limit.max(1),
            has_more: true,
            phase: Phase::Idle,
            criteria: SearchCriteria::default(),
        }
    }

    /// Resets pagination for new criteria and moves to `Fetching`.
    ///
    /// Returns `false` without changing anything while a fetch is in flight.
    pub fn start_search(&mut self, criteria: SearchCriteria) -> bool {
        if self.is_in_flight() {
            tracing::debug!("search ignored, fetch already in flight");
            return false;
        }
        self.offset = 0;
        self.has_more = true;
        self.criteria = criteria;
        self.phase = Phase::Fetching;
        tracing::debug!(limit = self.limit, "pagination reset for new search");
        true
    }

    /// Moves to `Fetching` for the page at the current offset.
    ///
    /// Returns `false` without changing anything while a fetch is in flight
    /// or once the listing is exhausted.
    pub fn load_more(&mut self) -> bool {
        if self.is_in_flight() {
            tracing::debug!("load more ignored, fetch already in flight");
            return false;
        }
        if !self.has_more {
            tracing::debug!("load more ignored, no more results");
            return false;
        }
        self.phase = Phase::Fetching;
        tracing::debug!(offset = self.offset, "loading next page");
        true
    }

    /// Applies a successful fetch of `item_count` unfiltered items.
    ///
    /// Returns `false` if no fetch was outstanding.
    pub fn apply_page(&mut self, item_count: usize) -> bool {
        if !self.is_in_flight() {
            tracing::warn!(item_count, "page arrived with no fetch in flight");
            return false;
        }
        self.offset += self.limit;
        self.has_more = item_count >= self.limit;
        self.phase = Phase::Idle;
        tracing::debug!(
            item_count,
            offset = self.offset,
            has_more = self.has_more,
            "page applied"
        );
        true
    }

    /// Returns to `Idle` after a failed fetch, leaving offset and `has_more` as they were.
    ///
    /// Returns `false` if no fetch was outstanding.
    pub fn apply_failure(&mut self) -> bool {
        if !self.is_in_flight() {
            tracing::warn!("failure arrived with no fetch in flight");
            return false;
        }
        self.phase = Phase::Idle;
        tracing::debug!(offset = self.offset, "fetch failed, offset kept for retry");
        true
    }

    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.phase == Phase::Fetching
    }

    #[must_use]
    pub const fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::criteria::CategoryFilter;

    #[test]
    fn full_pages_advance_offset_by_limit() {
        let mut state = PaginationState::new(10);
        assert!(state.start_search(SearchCriteria::match_all()));
        assert!(state.apply_page(10));
        assert!(state.load_more());
        assert!(state.apply_page(10));
        assert_eq!(state.offset(), 20);
        assert!(state.has_more());
    }

    #[test]
    fn short_page_clears_has_more() {
        let mut state = PaginationState::new(10);
        state.start_search(SearchCriteria::match_all());
        state.apply_page(4);
        assert!(!state.has_more());
        assert!(!state.load_more());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn requests_while_fetching_are_dropped() {
        let mut state = PaginationState::new(10);
        state.start_search(SearchCriteria::match_all());
        let before = state.clone();

        assert!(!state.load_more());
        assert!(!state.start_search(SearchCriteria::new("x", "", CategoryFilter::Any)));
        assert_eq!(state, before);
    }

    #[test]
    fn failure_keeps_offset_and_has_more() {
        let mut state = PaginationState::new(10);
        state.start_search(SearchCriteria::match_all());
        state.apply_page(10);
        state.load_more();
        assert!(state.apply_failure());

        assert_eq!(state.offset(), 10);
        assert!(state.has_more());
        assert!(state.load_more());
    }

    #[test]
    fn search_resets_after_exhaustion() {
        let mut state = PaginationState::new(10);
        state.start_search(SearchCriteria::match_all());
        state.apply_page(3);
        assert!(!state.has_more());

        let criteria = SearchCriteria::new("blur", "", CategoryFilter::Any);
        assert!(state.start_search(criteria.clone()));
        assert_eq!(state.offset(), 0);
        assert!(state.has_more());
        assert_eq!(state.criteria(), &criteria);
    }

    #[test]
    fn results_without_fetch_are_ignored() {
        let mut state = PaginationState::new(10);
        assert!(!state.apply_page(10));
        assert!(!state.apply_failure());
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn zero_limit_is_raised_to_one() {
        assert_eq!(PaginationState::new(0).limit(), 1);
    }
}
