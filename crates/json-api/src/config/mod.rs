//! Server configuration module

use std::net::SocketAddr;

use clap::Parser;

use crate::config::{
    catalog::CatalogConfig,
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod catalog;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Catalog JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "catalog-json", about = "Catalog JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request logging settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Listing and export settings.
    #[command(flatten)]
    pub catalog: CatalogConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_without_arguments() -> TestResult {
        let config = ServerConfig::try_parse_from(["catalog-json"])?;

        assert_eq!(config.catalog.page_size.get(), 3);
        assert_eq!(config.observability.slow_request_threshold_ms, 1_000);
        assert!(config.database.run_migrations);

        Ok(())
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let result = ServerConfig::try_parse_from(["catalog-json", "--page-size", "0"]);

        assert!(result.is_err(), "page size 0 must not parse");
    }

    #[test]
    fn socket_addr_joins_host_and_port() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "catalog-json",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
        ])?;

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");

        Ok(())
    }

    #[test]
    fn malformed_host_is_rejected() {
        let result = ServerConfig::try_parse_from(["catalog-json", "--host", "localhost:80"]);

        assert!(result.is_err(), "host must be an IP address");
    }
}
