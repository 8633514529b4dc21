//! Build `ServerConfig` from environment variables (after `.env` has been loaded by the caller).

use crate::config::types::*;
use crate::error::ConfigError;
use std::str::FromStr;

impl ServerConfig {
    /// Read `DATABASE_URL`, `BOOKSHELF_BIND`, `BOOKSHELF_MAX_CONNECTIONS`, `BOOKSHELF_STORAGE`
    /// and `BOOKSHELF_BODY_LIMIT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with a custom variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind = parse_or("BOOKSHELF_BIND", lookup("BOOKSHELF_BIND"), DEFAULT_BIND.parse().ok())?;
        let max_connections = parse_or(
            "BOOKSHELF_MAX_CONNECTIONS",
            lookup("BOOKSHELF_MAX_CONNECTIONS"),
            Some(DEFAULT_MAX_CONNECTIONS),
        )?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "BOOKSHELF_MAX_CONNECTIONS",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }
        let storage = match lookup("BOOKSHELF_STORAGE") {
            Some(v) => StorageKind::from_str(&v)?,
            None => StorageKind::Postgres,
        };
        let body_limit = parse_or(
            "BOOKSHELF_BODY_LIMIT",
            lookup("BOOKSHELF_BODY_LIMIT"),
            Some(DEFAULT_BODY_LIMIT),
        )?;
        Ok(ServerConfig {
            database_url,
            bind,
            max_connections,
            storage,
            body_limit,
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: Option<T>) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(v) => v.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: v.clone(),
            reason: e.to_string(),
        }),
        None => default.ok_or_else(|| ConfigError::Invalid {
            key,
            value: String::new(),
            reason: "no default".into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.bind.port(), 3000);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.storage, StorageKind::Postgres);
        assert_eq!(config.body_limit, DEFAULT_BODY_LIMIT);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://db/books"),
            ("BOOKSHELF_BIND", "127.0.0.1:8080"),
            ("BOOKSHELF_MAX_CONNECTIONS", "12"),
            ("BOOKSHELF_STORAGE", "Memory"),
            ("BOOKSHELF_BODY_LIMIT", "1024"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "postgres://db/books");
        assert_eq!(config.bind.to_string(), "127.0.0.1:8080");
        assert_eq!(config.max_connections, 12);
        assert_eq!(config.storage, StorageKind::Memory);
        assert_eq!(config.body_limit, 1024);
    }

    #[test]
    fn rejects_bad_values() {
        for pairs in [
            [("BOOKSHELF_BIND", "nowhere")],
            [("BOOKSHELF_MAX_CONNECTIONS", "0")],
            [("BOOKSHELF_MAX_CONNECTIONS", "-3")],
            [("BOOKSHELF_STORAGE", "sqlite")],
        ] {
            assert!(matches!(config_from(&pairs), Err(ConfigError::Invalid { .. })), "{:?}", pairs);
        }
    }
}
