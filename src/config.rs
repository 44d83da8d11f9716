//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::error::{ProfileError, Result};

/// `DATABASE_URL` value selecting the in-memory store.
pub const MEMORY_DATABASE_URL: &str = "memory";

const SQLITE_SCHEME: &str = "sqlite";

/// Where profile records are kept, parsed from `DATABASE_URL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// In-process store, lost on restart
    Memory,
    /// SQLite database file
    Sqlite(PathBuf),
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// The cache TTL is deliberately absent: it is a fixed constant.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite path or `sqlite://` URL, or `memory` for the in-process store
    pub database_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Optional Thirdweb client id override
    pub client_id: Option<String>,
    /// Optional secret key override
    pub secret_key: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATABASE_URL` - SQLite path, `sqlite://<path>` URL, or `memory` (default: crypto_me.sqlite)
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `THIRDWEB_CLIENT_ID` - Optional client id
    /// - `SECRET_KEY` - Optional secret key
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_url: env::var("DATABASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.database_url),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            client_id: non_empty_var("THIRDWEB_CLIENT_ID"),
            secret_key: non_empty_var("SECRET_KEY"),
        }
    }

    /// Parses `database_url` into a store location.
    ///
    /// Accepts `memory`, a bare file path, `sqlite://<relative path>` and
    /// `sqlite:///<absolute path>`. Any other URL scheme is rejected.
    pub fn database(&self) -> Result<DatabaseLocation> {
        let url = self.database_url.trim();
        if url.eq_ignore_ascii_case(MEMORY_DATABASE_URL) {
            return Ok(DatabaseLocation::Memory);
        }

        let Some((scheme, rest)) = url.split_once("://") else {
            return Ok(DatabaseLocation::Sqlite(PathBuf::from(url)));
        };

        if !scheme.eq_ignore_ascii_case(SQLITE_SCHEME) {
            return Err(ProfileError::Internal(format!(
                "unsupported database URL scheme '{}': only sqlite:// paths and '{}' are supported",
                scheme, MEMORY_DATABASE_URL
            )));
        }

        // Query parameters are not used by the SQLite store
        let path = rest.split('?').next().unwrap_or_default();
        match path {
            "" => Err(ProfileError::Internal(format!(
                "database URL '{}' has no path",
                url
            ))),
            ":memory:" => Ok(DatabaseLocation::Memory),
            path => Ok(DatabaseLocation::Sqlite(PathBuf::from(path))),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "crypto_me.sqlite".to_string(),
            server_port: 8000,
            client_id: None,
            secret_key: None,
        }
    }
}
