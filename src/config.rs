//! Server configuration for `delaybox-server`.
//!
//! Every option can come from the command line or the environment:
//!   delaybox-server --bind 127.0.0.1:8080 --metrics
//!   DELAYBOX_BIND=127.0.0.1:8080 delaybox-server

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use clap::Parser;

pub const DEFAULT_PORT: u16 = 3434;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "delaybox-server",
    version,
    about = "HTTP test double answering with controllable latency and payload size"
)]
pub struct ServerConfig {
    /// TCP address the HTTP server listens on.
    #[arg(long, env = "DELAYBOX_BIND", default_value_t = default_bind())]
    pub bind: SocketAddr,

    /// Install the Prometheus recorder and serve it on `/metrics`.
    #[arg(long, env = "DELAYBOX_METRICS")]
    pub metrics: bool,

    /// Log filter used when `RUST_LOG` is not set (e.g. `info`, `delaybox=debug`).
    #[arg(long, env = "DELAYBOX_LOG", default_value = "info")]
    pub log_level: String,
}

fn default_bind() -> SocketAddr {
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, DEFAULT_PORT))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            metrics: false,
            log_level: "info".to_string(),
        }
    }
}
