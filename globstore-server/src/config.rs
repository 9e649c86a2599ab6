//! Server configuration

use clap::{ArgAction, Parser};
use std::net::SocketAddr;

/// Globstore server configuration (CLI flags + environment)
#[derive(Parser, Debug, Clone)]
#[command(name = "globstore-server")]
#[command(about = "Globstore HTTP REST API Server")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "GLOBSTORE_LISTEN_ADDR", default_value = "0.0.0.0:8090")]
    pub listen_addr: SocketAddr,

    /// Enable CORS (Cross-Origin Resource Sharing)
    #[arg(
        long,
        env = "GLOBSTORE_CORS_ENABLED",
        action = ArgAction::Set,
        default_value_t = true
    )]
    pub cors_enabled: bool,

    /// Default log level when RUST_LOG is not set
    #[arg(long, env = "GLOBSTORE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Hard cap on `children` page size; larger request limits are clamped
    #[arg(long, env = "GLOBSTORE_MAX_PAGE_LIMIT", default_value = "1000")]
    pub max_page_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        // Parse from no args so clap defaults apply (used by tests)
        Self::parse_from(["globstore-server"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.listen_addr.port(), 8090);
        assert!(config.cors_enabled);
        assert_eq!(config.max_page_limit, 1000);
    }

    #[test]
    fn test_cors_can_be_disabled_from_the_command_line() {
        let config =
            ServerConfig::try_parse_from(["globstore-server", "--cors-enabled", "false"]).unwrap();
        assert!(!config.cors_enabled);
        let config =
            ServerConfig::try_parse_from(["globstore-server", "--cors-enabled", "true"]).unwrap();
        assert!(config.cors_enabled);
    }
}
