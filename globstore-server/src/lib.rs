//! # Globstore HTTP Server
//!
//! A thin HTTP REST API wrapper around `globstore-core`, exposing the store
//! operations (set, get, kill, next, children) as JSON endpoints plus health
//! and stats.
//!
//! # Example
//!
//! ```ignore
//! use globstore_server::{GlobstoreServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::default();
//!     let server = GlobstoreServer::new(config);
//!     server.run().await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
pub use telemetry::{init_logging, LogFormat, TelemetryConfig};

use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Globstore HTTP Server
pub struct GlobstoreServer {
    /// Application state
    state: Arc<AppState>,
    /// Configured router
    router: Router,
}

impl GlobstoreServer {
    /// Create a new server with the given configuration
    pub fn new(config: ServerConfig) -> Self {
        let state = Arc::new(AppState::new(config));
        let router = routes::build_router(state.clone());
        Self { state, router }
    }

    /// Get a reference to the application state
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Get the router for testing
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server
    pub async fn run(self) -> std::result::Result<(), std::io::Error> {
        let addr = self.state.config.listen_addr;
        let listener = TcpListener::bind(addr).await?;

        info!(
            addr = %addr,
            cors = self.state.config.cors_enabled,
            "Globstore server starting"
        );

        axum::serve(listener, self.router).await
    }
}
