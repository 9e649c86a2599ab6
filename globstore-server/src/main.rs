//! Globstore Server CLI
//!
//! Run with: `cargo run -p globstore-server -- --help`

use clap::Parser;
use globstore_server::{
    init_logging, GlobstoreServer, ServerConfig, TelemetryConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::parse();

    let telemetry_config = TelemetryConfig::with_server_config(&config);
    init_logging(&telemetry_config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %config.listen_addr,
        cors = config.cors_enabled,
        max_page_limit = config.max_page_limit,
        log_format = ?telemetry_config.log_format,
        "Starting globstore server"
    );

    let server = GlobstoreServer::new(config);
    server.run().await.map_err(Into::into)
}
