use std::path::PathBuf;

use clap::Parser;

/// Fluxgate image generation gateway
#[derive(Debug, Parser)]
#[command(name = "fluxgate", about = "HTTP gateway for third-party image generation")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "fluxgate.toml", env = "FLUXGATE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "FLUXGATE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
