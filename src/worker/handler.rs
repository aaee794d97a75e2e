//! Gateway calls on behalf of the UI thread.
//!
//! [`ListingWorker::handle_message`] is synchronous; the thread plumbing
//! lives in [`runtime`](crate::worker::runtime).

use crate::domain::error::{MusicListError, Result};
use crate::domain::{Comment, Event, Performer, PerformerDetail};
use crate::gateway::{DataGateway, GatewayResult};
use crate::listing::{Listable, ListingKind, PageRequest};
use crate::session::Session;
use crate::worker::{PageItems, WorkerMessage, WorkerResponse};
use std::sync::Arc;

/// Runs worker requests against a shared gateway.
pub struct ListingWorker {
    gateway: Arc<dyn DataGateway>,
}

impl ListingWorker {
    #[must_use]
    pub fn new(gateway: Arc<dyn DataGateway>) -> Self {
        Self { gateway }
    }

    /// Builds a worker over the store connection held by `session`.
    ///
    /// # Errors
    ///
    /// Returns [`MusicListError::Worker`] when the session has no store.
    pub fn from_session(session: &dyn Session) -> Result<Self> {
        let store = session
            .store()
            .ok_or_else(|| MusicListError::Worker("session has no store connection".to_string()))?;
        Ok(Self::new(store.gateway()))
    }

    fn handle_fetch_page(&self, request: &PageRequest) -> WorkerResponse {
        let outcome: GatewayResult<PageItems> = match request.kind {
            ListingKind::Performers => {
                Performer::fetch(self.gateway.as_ref(), request).map(PageItems::Performers)
            }
            ListingKind::Events => {
                Event::fetch(self.gateway.as_ref(), request).map(PageItems::Events)
            }
        };

        match outcome {
            Ok(items) => {
                tracing::debug!(request_id = request.id, count = items.len(), "page fetched");
                WorkerResponse::PageLoaded {
                    request_id: request.id,
                    items,
                }
            }
            Err(error) => {
                tracing::debug!(request_id = request.id, error = %error, "page fetch failed");
                WorkerResponse::PageFailed {
                    request_id: request.id,
                    kind: request.kind,
                    error,
                }
            }
        }
    }

    fn handle_read_detail(&self, performer: Performer) -> WorkerResponse {
        match self.gateway.read_performer_detail(&performer.id) {
            Ok(extras) => {
                tracing::debug!(performer_id = %performer.id, "performer detail read");
                WorkerResponse::DetailLoaded {
                    detail: PerformerDetail::new(performer, extras),
                }
            }
            Err(error) => {
                tracing::debug!(performer_id = %performer.id, error = %error, "performer detail failed");
                WorkerResponse::DetailFailed {
                    performer_id: performer.id,
                    error,
                }
            }
        }
    }

    fn handle_write_comment(&self, entity_id: String, comment: Comment) -> WorkerResponse {
        let outcome = self.gateway.write_comment(
            &entity_id,
            &comment.author,
            &comment.text,
            comment.rating,
        );
        match outcome {
            Ok(()) => {
                tracing::debug!(entity_id = %entity_id, "comment written");
                WorkerResponse::CommentWritten { entity_id, comment }
            }
            Err(error) => {
                tracing::debug!(entity_id = %entity_id, error = %error, "comment write failed");
                WorkerResponse::CommentFailed { entity_id, error }
            }
        }
    }

    /// Re-attaches the sender's trace context on this thread.
    ///
    /// The returned guard must be held while the message is handled.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let remote = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());
        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(remote)
                .attach(),
        )
    }

    /// Handles one request and returns its response.
    pub fn handle_message(&self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message = message.name()).entered();

        match message {
            WorkerMessage::FetchPage { request, .. } => self.handle_fetch_page(&request),
            WorkerMessage::ReadPerformerDetail { performer, .. } => self.handle_read_detail(performer),
            WorkerMessage::WriteComment {
                entity_id, comment, ..
            } => self.handle_write_comment(entity_id, comment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GatewayError, PerformerCategory};
    use crate::gateway::{CatalogData, JsonGateway};
    use crate::gateway::StoreHandle;
    use crate::listing::SearchCriteria;
    use crate::session::SessionStore;

    fn worker() -> ListingWorker {
        let data = CatalogData {
            performers: vec![Performer::new("p1", "Blur", "GB", PerformerCategory::Group, 80)],
            ..CatalogData::default()
        };
        ListingWorker::new(Arc::new(JsonGateway::in_memory(data)))
    }

    #[test]
    fn worker_uses_the_session_store() {
        let data = CatalogData {
            performers: vec![Performer::new("p9", "Pulp", "GB", PerformerCategory::Group, 70)],
            ..CatalogData::default()
        };
        let session = SessionStore::with_store(StoreHandle::new(Arc::new(JsonGateway::in_memory(data))));
        let worker = ListingWorker::from_session(&session).unwrap();

        let response = worker.handle_message(WorkerMessage::read_performer_detail(Performer::new(
            "p9",
            "Pulp",
            "GB",
            PerformerCategory::Group,
            70,
        )));
        assert!(matches!(response, WorkerResponse::DetailLoaded { .. }));
    }

    #[test]
    fn session_without_store_cannot_build_a_worker() {
        let result = ListingWorker::from_session(&SessionStore::new());
        assert!(matches!(result, Err(MusicListError::Worker(_))));
    }

    #[test]
    fn fetch_page_answers_with_request_id() {
        let request = PageRequest {
            id: 7,
            kind: ListingKind::Performers,
            criteria: SearchCriteria::match_all(),
            limit: 10,
            offset: 0,
        };
        let response = worker().handle_message(WorkerMessage::fetch_page(request));
        match response {
            WorkerResponse::PageLoaded { request_id, items } => {
                assert_eq!(request_id, 7);
                assert_eq!(items.kind(), ListingKind::Performers);
                assert_eq!(items.len(), 1);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn unknown_performer_detail_fails() {
        let ghost = Performer::new("nope", "Ghost", "", PerformerCategory::Other, 0);
        let response = worker().handle_message(WorkerMessage::read_performer_detail(ghost));
        assert!(matches!(
            response,
            WorkerResponse::DetailFailed {
                error: GatewayError::NotFound(_),
                ..
            }
        ));
    }

    #[test]
    fn written_comment_is_echoed_back() {
        let comment = Comment {
            author: "ana".to_string(),
            text: "Great live".to_string(),
            rating: 9,
        };
        let response = worker().handle_message(WorkerMessage::write_comment(
            "p1".to_string(),
            comment.clone(),
        ));
        assert_eq!(
            response,
            WorkerResponse::CommentWritten {
                entity_id: "p1".to_string(),
                comment,
            }
        );
    }
}
