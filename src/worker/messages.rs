//! Worker thread message types for cross-thread communication.
//!
//! Requests go from the UI thread to the worker; every request carries an
//! optional [`TraceContext`] so spans opened on the worker link back to the
//! UI span that caused them. Responses go the other way and are applied on
//! the UI thread.

use crate::domain::{Comment, Event, GatewayError, Performer, PerformerDetail};
use crate::listing::{ListingKind, PageRequest};

/// Trace and parent span ids captured on the sending thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a 32-digit hex string.
    pub trace_id: String,

    /// Span ID of the sending span as a 16-digit hex string.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the ids of the current span.
    ///
    /// Returns `None` when the current span has no valid OpenTelemetry
    /// context, for example when tracing was never initialised.
    ///
    /// ```
    /// use musiclist::worker::TraceContext;
    ///
    /// // No subscriber installed, so there is nothing to capture.
    /// assert!(TraceContext::from_current().is_none());
    /// ```
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        let context = Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        };
        tracing::trace!(trace_id = %context.trace_id, "captured trace context");
        Some(context)
    }
}

/// Generates constructors that attach the current trace context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Creates a `", stringify!($variant), "` message carrying the current trace context.")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    fetch_page(FetchPage { request: PageRequest }),
    read_performer_detail(ReadPerformerDetail { performer: Performer }),
    write_comment(WriteComment { entity_id: String, comment: Comment }),
}

/// Requests from the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// Run one listing page fetch.
    FetchPage {
        request: PageRequest,
        trace_context: Option<TraceContext>,
    },

    /// Read recordings, comments, and rating for a performer.
    ReadPerformerDetail {
        performer: Performer,
        trace_context: Option<TraceContext>,
    },

    /// Store a validated comment.
    WriteComment {
        entity_id: String,
        comment: Comment,
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::FetchPage { trace_context, .. }
            | Self::ReadPerformerDetail { trace_context, .. }
            | Self::WriteComment { trace_context, .. } => trace_context.as_ref(),
        }
    }

    /// The failure response this request resolves to when it cannot be run.
    #[must_use]
    pub fn into_failure(self, error: GatewayError) -> WorkerResponse {
        match self {
            Self::FetchPage { request, .. } => WorkerResponse::PageFailed {
                request_id: request.id,
                kind: request.kind,
                error,
            },
            Self::ReadPerformerDetail { performer, .. } => WorkerResponse::DetailFailed {
                performer_id: performer.id,
                error,
            },
            Self::WriteComment { entity_id, .. } => WorkerResponse::CommentFailed { entity_id, error },
        }
    }

    /// Short name for spans and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FetchPage { .. } => "fetch_page",
            Self::ReadPerformerDetail { .. } => "read_performer_detail",
            Self::WriteComment { .. } => "write_comment",
        }
    }
}

/// Items of one fetched page, tagged by listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageItems {
    Performers(Vec<Performer>),
    Events(Vec<Event>),
}

impl PageItems {
    #[must_use]
    pub const fn kind(&self) -> ListingKind {
        match self {
            Self::Performers(_) => ListingKind::Performers,
            Self::Events(_) => ListingKind::Events,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Performers(items) => items.len(),
            Self::Events(items) => items.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Responses from the worker thread.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerResponse {
    PageLoaded {
        request_id: u64,
        items: PageItems,
    },

    PageFailed {
        request_id: u64,
        kind: ListingKind,
        error: GatewayError,
    },

    DetailLoaded {
        detail: PerformerDetail,
    },

    DetailFailed {
        performer_id: String,
        error: GatewayError,
    },

    /// The comment is stored and can be shown.
    CommentWritten {
        entity_id: String,
        comment: Comment,
    },

    CommentFailed {
        entity_id: String,
        error: GatewayError,
    },
}
