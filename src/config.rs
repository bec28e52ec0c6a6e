//! Process configuration
//!
//! Read once at startup from the environment (after an optional `.env`
//! file has been loaded).

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::warn;

use crate::store::StoreConfig;

/// Port used when `PORT` is unset or invalid
pub const DEFAULT_PORT: u16 = 3000;

/// Environment variable holding the listening port
pub const PORT_VAR: &str = "PORT";

/// Environment variable overriding the storage directory
pub const DATA_DIR_VAR: &str = "EVENTHUB_DATA_DIR";

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub store: StoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            store: StoreConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from `PORT` and `EVENTHUB_DATA_DIR`
    pub fn from_env() -> Self {
        Self::from_values(env::var(PORT_VAR).ok(), env::var(DATA_DIR_VAR).ok())
    }

    /// Build configuration from raw variable values
    pub fn from_values(port: Option<String>, data_dir: Option<String>) -> Self {
        let port = match port.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Invalid {} value '{}', using {}", PORT_VAR, raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
        };

        let store = match data_dir.filter(|d| !d.trim().is_empty()) {
            Some(dir) => StoreConfig::new(PathBuf::from(dir)),
            None => StoreConfig::default(),
        };

        Self { port, store }
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
