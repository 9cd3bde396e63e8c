use fluxgate_config::TelemetryConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise the configured filter applies,
/// defaulting to `info`.
pub fn init(config: Option<&TelemetryConfig>) {
    let default_filter = config
        .and_then(|telemetry| telemetry.log_filter.as_deref())
        .unwrap_or("info");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
