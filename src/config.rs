//! Runtime configuration read from the environment (`.env` honoured by the binary).

use crate::error::ConfigError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_LISTEN_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 3000);
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Connection settings handed to the store constructor.
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub body_limit_bytes: usize,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Read `DATABASE_URL`, `LISTEN_ADDR`, `DB_MAX_CONNECTIONS`, `DB_ACQUIRE_TIMEOUT_SECS`
    /// and `BODY_LIMIT_BYTES` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key: &str| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let listen_addr = parse_or(&lookup, "LISTEN_ADDR", || DEFAULT_LISTEN_ADDR)?;
        let max_connections =
            parse_or(&lookup, "DB_MAX_CONNECTIONS", || DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                reason: "must be at least 1".into(),
            });
        }
        let acquire_secs = parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", || {
            DEFAULT_ACQUIRE_TIMEOUT_SECS
        })?;
        let body_limit_bytes =
            parse_or(&lookup, "BODY_LIMIT_BYTES", || DEFAULT_BODY_LIMIT_BYTES)?;

        Ok(AppConfig {
            listen_addr,
            body_limit_bytes,
            database: DatabaseConfig {
                url,
                max_connections,
                acquire_timeout: Duration::from_secs(acquire_secs),
            },
        })
    }
}

fn parse_or<F, T, D>(lookup: &F, key: &'static str, default: D) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
    D: FnOnce() -> T,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::Invalid {
                    key,
                    reason: e.to_string(),
                })
        }
        _ => Ok(default()),
    }
}
