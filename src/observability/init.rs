use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the trace output inside the data directory.
pub const TRACE_FILE_NAME: &str = "tooldeck-otlp.json";

const SERVICE_NAME: &str = "tooldeck";

/// Installs the global subscriber.
///
/// The filter directive comes from `config.trace_level` and defaults to
/// `info`. Only the first successful call takes effect.
///
/// ```rust
/// use tooldeck::{observability::init_tracing, Config};
///
/// let dir = std::env::temp_dir().join("tooldeck-doc");
/// init_tracing(&Config { data_dir: dir, ..Default::default() });
/// tracing::info!("tracing ready");
/// ```
pub fn init_tracing(config: &Config) {
    let directive = config.trace_level.as_deref().unwrap_or("info");

    if std::fs::create_dir_all(&config.data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider =
        exporter::create_tracer_provider(config.data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(directive))
        .with(otel_layer)
        .try_init();
}
