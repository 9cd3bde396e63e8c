//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use fluxgate_config::{Config, CorsConfig, HealthConfig, ImageGenConfig, ServerConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    cors: None,
                },
                imagegen: ImageGenConfig::default(),
                telemetry: None,
            },
        }
    }

    /// Point the gateway at a mock provider with a test credential
    pub fn with_provider(mut self, base_url: &str) -> Self {
        self.config.imagegen.api_key = Some(SecretString::from("test-key"));
        self.config.imagegen.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Point the gateway at a mock provider without any credential
    pub fn with_unconfigured_provider(mut self, base_url: &str) -> Self {
        self.config.imagegen.api_key = None;
        self.config.imagegen.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = Some(config);
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
