//! Data gateway abstraction.
//!
//! [`DataGateway`] is the contract the listing core needs from the remote
//! catalogue: two paged searches, a detail read, and a comment write. The
//! trait is deliberately narrow; each method maps to one use case in the
//! worker thread.

use crate::domain::{Event, GatewayError, Performer, PerformerExtras};
use std::fmt;
use std::sync::Arc;

/// Result alias for gateway calls.
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

/// Remote search / read / write API for the catalogue.
///
/// Implementations are shared between the UI thread (through the session)
/// and the worker thread, so they must be `Send + Sync`.
///
/// # Implementations
///
/// - [`JsonGateway`](crate::gateway::JsonGateway): file-backed catalogue
pub trait DataGateway: Send + Sync {
    /// Searches performers by name and country, returning at most `limit`
    /// items starting at `offset`, in store order.
    ///
    /// Empty query strings match everything.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] on transport or remote failure.
    fn search_performers(
        &self,
        name: &str,
        country: &str,
        limit: usize,
        offset: usize,
    ) -> GatewayResult<Vec<Performer>>;

    /// Searches events by name and location, returning at most `limit`
    /// items starting at `offset`, in store order.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] on transport or remote failure.
    fn search_events(
        &self,
        name: &str,
        location: &str,
        limit: usize,
        offset: usize,
    ) -> GatewayResult<Vec<Event>>;

    /// Reads top recordings, comments, and the average rating for a performer.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] for an unknown id, or another
    /// [`GatewayError`] on failure.
    fn read_performer_detail(&self, id: &str) -> GatewayResult<PerformerExtras>;

    /// Stores a comment by `author` on the entity with `entity_id`.
    ///
    /// One comment per author per entity: a second write replaces the first.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the write fails.
    fn write_comment(
        &self,
        entity_id: &str,
        author: &str,
        text: &str,
        rating: u8,
    ) -> GatewayResult<()>;
}

/// Opaque handle to the backing store connection.
///
/// Cheap to clone; every clone talks to the same store.
#[derive(Clone)]
pub struct StoreHandle {
    gateway: Arc<dyn DataGateway>,
}

impl StoreHandle {
    #[must_use]
    pub fn new(gateway: Arc<dyn DataGateway>) -> Self {
        Self { gateway }
    }

    /// Returns the shared gateway behind this handle.
    #[must_use]
    pub fn gateway(&self) -> Arc<dyn DataGateway> {
        Arc::clone(&self.gateway)
    }
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreHandle").finish_non_exhaustive()
    }
}
