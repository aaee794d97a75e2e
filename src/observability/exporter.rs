//! Span exporter that appends OTLP-JSON batches to a rotating file.

use super::otlp;
use super::rotating::RotatingFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Writes each exported batch as one line of OTLP JSON.
pub struct FileSpanExporter {
    file: RotatingFile,
    resource: Resource,
    stopped: bool,
}

impl FileSpanExporter {
    #[must_use]
    pub const fn new(file: RotatingFile, resource: Resource) -> Self {
        Self {
            file,
            resource,
            stopped: false,
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.stopped {
            return Err(TraceError::from("file exporter is shut down"));
        }
        let document = otlp::encode_batch(&self.resource, batch);
        self.file
            .append_line(&document.to_string())
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("file", &self.file)
            .field("stopped", &self.stopped)
            .finish_non_exhaustive()
    }
}

/// Builds a provider that exports every finished span straight to `trace_file`.
#[must_use]
pub fn file_tracer_provider(trace_file: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(RotatingFile::new(trace_file), resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
