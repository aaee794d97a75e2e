//! Subscriber setup: `EnvFilter` plus an OpenTelemetry layer exporting to file.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the trace output inside the data directory.
pub const TRACE_FILE_NAME: &str = "musiclist-otlp.json";

const SERVICE_NAME: &str = "musiclist";

/// Installs the global tracing subscriber.
///
/// Spans at or above `config.trace_level` go to
/// `<data_dir>/musiclist-otlp.json`. Does nothing if the data directory
/// cannot be created, and only the first call in a process takes effect.
///
/// ```no_run
/// use musiclist::observability::init_tracing;
/// use musiclist::Config;
///
/// init_tracing(&Config::default());
/// tracing::info!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    if std::fs::create_dir_all(&config.data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = exporter::file_tracer_provider(config.data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
