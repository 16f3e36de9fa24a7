//! Tracing to a local OTLP/JSON file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → FileExporter → zicons-otlp.json
//! ```
//!
//! The file lives in the plugin data directory and rotates at 10 MB keeping
//! three old copies. The filter comes from the `trace_level` option and
//! defaults to `info`.

mod exporter;
mod otlp;
mod writer;

use crate::infrastructure::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name attached to every exported batch.
pub const SERVICE_NAME: &str = "Zicons";

/// Trace file name inside the data directory.
pub const TRACE_FILE: &str = "zicons-otlp.json";

/// Installs the global subscriber.
///
/// Does nothing when the data directory cannot be created, and only the first
/// call in a process takes effect.
pub fn init_tracing(config: &Config) {
    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = exporter::file_tracer_provider(data_dir.join(TRACE_FILE), resource);
    let layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
