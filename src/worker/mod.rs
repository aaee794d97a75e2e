//! Background worker thread for gateway calls.
//!
//! All gateway I/O runs here so the UI loop never blocks on the store.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Synchronous message processing against the gateway
//! - `runtime`: Thread and channel plumbing

pub mod handler;
pub mod messages;
pub mod runtime;

pub use handler::ListingWorker;
pub use messages::{PageItems, TraceContext, WorkerMessage, WorkerResponse};
pub use runtime::WorkerHandle;
