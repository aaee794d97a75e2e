//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! - Traces go to `<data_dir>/musiclist-otlp.json`, one OTLP document per line
//! - The file rotates at 10 MB and three backups are kept
//! - The level comes from `Config::trace_level` (default `"info"`)
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: Span exporter and tracer provider
//! - [`otlp`]: OTLP JSON encoding
//! - [`rotating`]: Size-rotated line file

pub mod exporter;
pub mod init;
pub mod otlp;
pub mod rotating;

pub use init::{init_tracing, TRACE_FILE_NAME};
