use std::net::SocketAddr;

use serde::Deserialize;

use crate::{cors::CorsConfig, health::HealthConfig};

/// HTTP server configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind the listener to
    pub listen_address: Option<SocketAddr>,
    /// Health check endpoint configuration
    #[serde(default)]
    pub health: HealthConfig,
    /// CORS configuration
    #[serde(default)]
    pub cors: Option<CorsConfig>,
}
