//! Listing controller: dispatch, filter, render, and pagination update.
//!
//! The controller never touches the gateway itself when driven
//! asynchronously. [`ListingController::search`] and
//! [`ListingController::load_more`] return a [`PageRequest`] for the caller
//! to run on a worker, and [`ListingController::complete`] applies the
//! outcome once it comes back. The synchronous `*_with` variants do all three
//! steps against a [`PageSource`].
//!
//! Every outcome resolves to one of three things the sink is told about:
//! a rendered page, a "no results" indicator, or an inline error. No error
//! escapes to the caller.

use crate::domain::{Event, GatewayError, MusicListError, Performer};
use crate::gateway::{DataGateway, GatewayResult};
use crate::listing::criteria::{ListingKind, SearchCriteria};
use crate::listing::filter::{self, Filterable};
use crate::listing::page::ResultPage;
use crate::listing::pagination::PaginationState;
use std::marker::PhantomData;

/// Receives immutable snapshots from a controller.
pub trait RenderSink<T> {
    /// Shows `items`, the filtered content of the latest page.
    ///
    /// When `is_first_page` is true the items replace what was shown;
    /// otherwise they are appended.
    fn render(&mut self, items: &[T], is_first_page: bool, has_more: bool);

    /// The first page of a search came back empty.
    fn render_no_results(&mut self);

    /// A fetch failed. Previously rendered items stay visible.
    fn render_error(&mut self, error: &MusicListError);
}

/// A fetch the controller wants run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Per-controller increasing id; the completion must echo it.
    pub id: u64,
    pub kind: ListingKind,
    pub criteria: SearchCriteria,
    pub limit: usize,
    pub offset: usize,
}

/// Item types a listing can page through.
pub trait Listable: Filterable + Clone {
    const KIND: ListingKind;

    /// Runs `request` against the matching gateway search.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure.
    fn fetch(gateway: &dyn DataGateway, request: &PageRequest) -> GatewayResult<Vec<Self>>;
}

impl Listable for Performer {
    const KIND: ListingKind = ListingKind::Performers;

    fn fetch(gateway: &dyn DataGateway, request: &PageRequest) -> GatewayResult<Vec<Self>> {
        gateway.search_performers(
            &request.criteria.name,
            &request.criteria.secondary,
            request.limit,
            request.offset,
        )
    }
}

impl Listable for Event {
    const KIND: ListingKind = ListingKind::Events;

    fn fetch(gateway: &dyn DataGateway, request: &PageRequest) -> GatewayResult<Vec<Self>> {
        gateway.search_events(
            &request.criteria.name,
            &request.criteria.secondary,
            request.limit,
            request.offset,
        )
    }
}

/// Something that can run a [`PageRequest`] synchronously.
pub trait PageSource<T> {
    /// # Errors
    ///
    /// Returns the gateway failure for this page.
    fn fetch_page(&self, request: &PageRequest) -> GatewayResult<Vec<T>>;
}

impl<T: Listable, G: DataGateway> PageSource<T> for G {
    fn fetch_page(&self, request: &PageRequest) -> GatewayResult<Vec<T>> {
        T::fetch(self, request)
    }
}

impl<T: Listable> PageSource<T> for dyn DataGateway {
    fn fetch_page(&self, request: &PageRequest) -> GatewayResult<Vec<T>> {
        T::fetch(self, request)
    }
}

/// Drives one listing (performers or events).
///
/// Owns its [`PaginationState`] and the sink it renders into. At most one
/// request is pending at a time.
pub struct ListingController<T, S> {
    state: PaginationState,
    sink: S,
    pending: Option<PageRequest>,
    next_request_id: u64,
    _items: PhantomData<fn(T)>,
}

impl<T, S> ListingController<T, S>
where
    T: Listable,
    S: RenderSink<T>,
{
    #[must_use]
    pub fn new(limit: usize, sink: S) -> Self {
        Self {
            state: PaginationState::new(limit),
            sink,
            pending: None,
            next_request_id: 1,
            _items: PhantomData,
        }
    }

    /// Starts a new search, superseding any previous pagination.
    ///
    /// Returns `None` while another fetch is in flight.
    #[tracing::instrument(level = "debug", skip(self), fields(kind = %T::KIND))]
    pub fn search(&mut self, criteria: SearchCriteria) -> Option<PageRequest> {
        if !self.state.start_search(criteria) {
            return None;
        }
        Some(self.dispatch())
    }

    /// Requests the next page with the stored criteria.
    ///
    /// Returns `None` while a fetch is in flight or once the listing is exhausted.
    #[tracing::instrument(level = "debug", skip(self), fields(kind = %T::KIND))]
    pub fn load_more(&mut self) -> Option<PageRequest> {
        if !self.state.load_more() {
            return None;
        }
        Some(self.dispatch())
    }

    fn dispatch(&mut self) -> PageRequest {
        let request = PageRequest {
            id: self.next_request_id,
            kind: T::KIND,
            criteria: self.state.criteria().clone(),
            limit: self.state.limit(),
            offset: self.state.offset(),
        };
        self.next_request_id += 1;
        self.pending = Some(request.clone());
        tracing::debug!(
            request_id = request.id,
            offset = request.offset,
            limit = request.limit,
            "page request dispatched"
        );
        request
    }

    /// Applies the outcome of the request with `request_id`.
    ///
    /// Returns `false` and changes nothing when `request_id` is not the
    /// pending request.
    #[tracing::instrument(level = "debug", skip(self, outcome), fields(kind = %T::KIND))]
    pub fn complete(&mut self, request_id: u64, outcome: GatewayResult<Vec<T>>) -> bool {
        let Some(request) = self.pending.take_if(|pending| pending.id == request_id) else {
            tracing::warn!(request_id, "completion does not match pending request, ignoring");
            return false;
        };

        match outcome {
            Ok(items) => self.apply_items(&request, items),
            Err(error) => self.apply_error(error),
        }
        true
    }

    fn apply_items(&mut self, request: &PageRequest, items: Vec<T>) {
        let page = ResultPage::new(items, request.limit, request.offset);
        let is_first_page = page.is_first_page();
        let empty_result = page.is_empty_result();
        self.state.apply_page(page.item_count());
        debug_assert_eq!(page.is_last_page(), !self.state.has_more());
        tracing::debug!(
            offset = page.offset(),
            limit = page.requested_limit(),
            last_page = page.is_last_page(),
            "page received"
        );

        if empty_result {
            tracing::debug!("search matched nothing");
            self.sink.render_no_results();
            return;
        }

        let fetched = page.item_count();
        let visible = filter::apply(page.into_items(), &request.criteria);
        tracing::debug!(fetched, visible = visible.len(), "page filtered");
        self.sink
            .render(&visible, is_first_page, self.state.has_more());
    }

    fn apply_error(&mut self, error: GatewayError) {
        tracing::warn!(error = %error, "page fetch failed");
        self.state.apply_failure();
        self.sink.render_error(&MusicListError::Gateway(error));
    }

    /// [`search`](Self::search) then fetch from `source` and complete.
    ///
    /// Returns whether a fetch happened.
    pub fn search_with<P: PageSource<T> + ?Sized>(
        &mut self,
        source: &P,
        criteria: SearchCriteria,
    ) -> bool {
        self.search(criteria)
            .is_some_and(|request| self.run(source, &request))
    }

    /// [`load_more`](Self::load_more) then fetch from `source` and complete.
    ///
    /// Returns whether a fetch happened.
    pub fn load_more_with<P: PageSource<T> + ?Sized>(&mut self, source: &P) -> bool {
        self.load_more()
            .is_some_and(|request| self.run(source, &request))
    }

    fn run<P: PageSource<T> + ?Sized>(&mut self, source: &P, request: &PageRequest) -> bool {
        let outcome = source.fetch_page(request);
        self.complete(request.id, outcome)
    }

    #[must_use]
    pub const fn state(&self) -> &PaginationState {
        &self.state
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.state.is_in_flight()
    }

    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.state.has_more()
    }

    #[must_use]
    pub const fn pending(&self) -> Option<&PageRequest> {
        self.pending.as_ref()
    }

    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PerformerCategory;

    #[derive(Default)]
    struct Captured {
        items: Vec<Performer>,
        no_results: usize,
        errors: usize,
    }

    impl RenderSink<Performer> for Captured {
        fn render(&mut self, items: &[Performer], is_first_page: bool, _has_more: bool) {
            if is_first_page {
                self.items.clear();
            }
            self.items.extend_from_slice(items);
        }

        fn render_no_results(&mut self) {
            self.no_results += 1;
        }

        fn render_error(&mut self, _error: &MusicListError) {
            self.errors += 1;
        }
    }

    fn performers(count: usize) -> Vec<Performer> {
        (0..count)
            .map(|i| Performer::new(format!("p{i}"), format!("Act {i}"), "", PerformerCategory::Person, 0))
            .collect()
    }

    #[test]
    fn request_ids_increase_per_dispatch() {
        let mut controller = ListingController::new(10, Captured::default());
        let first = controller.search(SearchCriteria::match_all()).unwrap();
        assert!(controller.complete(first.id, Ok(performers(10))));
        let second = controller.load_more().unwrap();

        assert!(second.id > first.id);
        assert_eq!(second.offset, 10);
        assert_eq!(second.kind, ListingKind::Performers);
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut controller = ListingController::new(10, Captured::default());
        let request = controller.search(SearchCriteria::match_all()).unwrap();

        assert!(!controller.complete(request.id + 1, Ok(performers(10))));
        assert!(controller.is_in_flight());
        assert!(controller.sink().items.is_empty());

        assert!(controller.complete(request.id, Ok(performers(10))));
        assert!(!controller.is_in_flight());
        assert_eq!(controller.sink().items.len(), 10);
    }

    #[test]
    fn completion_cannot_be_applied_twice() {
        let mut controller = ListingController::new(10, Captured::default());
        let request = controller.search(SearchCriteria::match_all()).unwrap();
        assert!(controller.complete(request.id, Err(GatewayError::Transport("down".into()))));
        assert!(!controller.complete(request.id, Ok(performers(10))));
        assert_eq!(controller.sink().errors, 1);
        assert_eq!(controller.state().offset(), 0);
    }
}
