//! Environment-driven server configuration.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default bind address when `BIND_ADDR` is unset.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
/// Default request-pool size when `DB_POOL_SIZE` is unset.
const DEFAULT_POOL_SIZE: u32 = 10;
/// Default CSV resource path when `USERS_CSV_PATH` is unset.
const DEFAULT_CSV_PATH: &str = "users.csv";

/// Configuration failures surfaced at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is absent.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is present but unparseable.
    #[error("invalid value for {name}: {message}")]
    Invalid { name: &'static str, message: String },
}

/// Runtime configuration for the HTTP server and its adapters.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// PostgreSQL connection string shared by pool and importer.
    pub database_url: String,
    /// Maximum size of the request-handling connection pool.
    pub pool_size: u32,
    /// Path of the CSV resource the bulk importer reads.
    pub csv_path: PathBuf,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// `DATABASE_URL` is required; `BIND_ADDR`, `DB_POOL_SIZE` and
    /// `USERS_CSV_PATH` fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned())
            .parse()
            .map_err(|err: std::net::AddrParseError| ConfigError::Invalid {
                name: "BIND_ADDR",
                message: err.to_string(),
            })?;

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let pool_size = match env::var("DB_POOL_SIZE") {
            Ok(raw) => raw.parse().map_err(|err: std::num::ParseIntError| {
                ConfigError::Invalid {
                    name: "DB_POOL_SIZE",
                    message: err.to_string(),
                }
            })?,
            Err(_) => DEFAULT_POOL_SIZE,
        };

        let csv_path = env::var("USERS_CSV_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CSV_PATH));

        Ok(Self {
            bind_addr,
            database_url,
            pool_size,
            csv_path,
        })
    }
}
