// src/config.rs
use std::net::IpAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "pg" => Ok(StoreBackend::Postgres),
            "memory" | "mem" => Ok(StoreBackend::Memory),
            _ => Err(()),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreBackend,
    pub database_url: Option<String>,
    pub host: IpAddr,
    pub port: u16,
    pub jwt_secret: String,
}

impl Config {
    /// Reads settings from the process environment (after `.env` is loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let store = match lookup("STORE_BACKEND") {
            Some(v) => v
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "STORE_BACKEND", value: v })?,
            None => StoreBackend::Postgres,
        };

        let database_url = lookup("DATABASE_URL");
        if store == StoreBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let host = match lookup("HOST") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid { key: "HOST", value: v })?,
            None => IpAddr::from([127, 0, 0, 1]),
        };
        let port = match lookup("PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid { key: "PORT", value: v })?,
            None => 3000,
        };

        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        Ok(Self { store, database_url, host, port, jwt_secret })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_for_postgres() {
        let cfg = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/stockflow"),
            ("JWT_SECRET", "s3cret"),
        ]))
        .unwrap();
        assert_eq!(cfg.store, StoreBackend::Postgres);
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.host.to_string(), "127.0.0.1");
    }

    #[test]
    fn postgres_requires_database_url() {
        let err = Config::from_lookup(lookup(&[("JWT_SECRET", "s3cret")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn memory_backend_needs_no_database() {
        let cfg = Config::from_lookup(lookup(&[
            ("STORE_BACKEND", "memory"),
            ("JWT_SECRET", "s3cret"),
            ("PORT", "8080"),
            ("HOST", "0.0.0.0"),
        ]))
        .unwrap();
        assert_eq!(cfg.store, StoreBackend::Memory);
        assert_eq!(cfg.port, 8080);
    }

    #[test]
    fn rejects_bad_values() {
        let err = Config::from_lookup(lookup(&[
            ("STORE_BACKEND", "memory"),
            ("JWT_SECRET", "s3cret"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));

        let err = Config::from_lookup(lookup(&[("STORE_BACKEND", "memory")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));
    }
}
