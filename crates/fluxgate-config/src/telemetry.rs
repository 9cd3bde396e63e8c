use serde::Deserialize;

/// Telemetry configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    /// Default log filter, overridden by `RUST_LOG` when set
    #[serde(default)]
    pub log_filter: Option<String>,
}
