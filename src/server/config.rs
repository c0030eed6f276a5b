use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::server::error::config::ConfigError;

/// Database used when `DATABASE_URL` is not set, a file-backed SQLite store created on demand.
pub static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";
pub static DEFAULT_PORT: u16 = 3000;
pub static DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    /// Reads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds configuration from any variable lookup, unset or empty variables fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let port = match get("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        let host = match get("HOST") {
            Some(host) => host
                .trim()
                .parse::<IpAddr>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "HOST".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_HOST,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
