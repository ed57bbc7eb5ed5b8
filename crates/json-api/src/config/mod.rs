//! Process configuration, read from CLI flags, the environment and `.env`.

use clap::Parser;

use crate::config::{db::DatabaseConfig, logging::LoggingConfig, server::ListenConfig};

pub(crate) mod db;
pub(crate) mod logging;
pub(crate) mod server;

#[derive(Debug, Parser)]
#[command(name = "boutique-json", about = "Trendy Boutique JSON API Server", long_about = None)]
pub struct ServerConfig {
    #[command(flatten)]
    pub listen: ListenConfig,

    #[command(flatten)]
    pub logging: LoggingConfig,

    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Reads `.env` when present, then parses flags and environment.
    ///
    /// # Errors
    ///
    /// Returns the clap error for missing or malformed values.
    pub fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        ServerConfig::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "boutique-json",
            "--port",
            "8080",
            "--log-format",
            "json",
            "--database-url",
            "mongodb://localhost:27017",
        ])
        .expect("flags should parse");

        assert_eq!(config.listen.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.logging.log_format, logging::LogFormat::Json);
    }
}
