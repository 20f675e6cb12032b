//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig, listing::ListingConfig, logging::LoggingConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod listing;
pub(crate) mod logging;
pub(crate) mod server;

/// Patron JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "patron-json", about = "Patron JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Customer listing limits.
    #[command(flatten)]
    pub listing: ListingConfig,
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
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_flags_over_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "patron-json",
            "--database-url",
            "postgres://localhost/patron",
            "--port",
            "9000",
            "--sorted-listing-cap",
            "25",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:9000");
        assert_eq!(config.listing.sorted_listing_cap, 25);
        assert_eq!(config.database.database_url, "postgres://localhost/patron");

        Ok(())
    }
}
