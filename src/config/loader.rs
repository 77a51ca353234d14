//! Load config from defaults, an optional JSON file, then environment variables.

use crate::config::types::{AppConfig, StoreKind};
use crate::config::validate;
use crate::error::ConfigError;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

/// Env var naming a JSON config file. Its fields are all optional.
pub const CONFIG_PATH_VAR: &str = "KURBAN_CONFIG";

/// Load `.env` if present, then build config from the process environment.
pub fn load() -> Result<AppConfig, ConfigError> {
    let _ = dotenvy::dotenv();
    load_with(|key| std::env::var(key).ok())
}

/// Same as [`load`] but reads variables through `lookup`, so callers can supply their own source.
pub fn load_with<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match lookup(CONFIG_PATH_VAR) {
        Some(path) if !path.trim().is_empty() => from_file(Path::new(path.trim()))?,
        _ => AppConfig::default(),
    };
    apply_env(&mut config, &lookup)?;
    validate(&config)?;
    Ok(config)
}

pub fn from_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&raw).map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))
}

fn apply_env<F>(config: &mut AppConfig, lookup: &F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = text(lookup, "SERVER_HOST") {
        config.server.host = v;
    }
    if let Some(v) = parsed(lookup, "PORT")? {
        config.server.port = v;
    }
    if let Some(v) = parsed(lookup, "SERVER_BODY_LIMIT")? {
        config.server.body_limit = v;
    }

    let db = &mut config.database;
    if let Some(v) = text(lookup, "DATABASE_URL") {
        db.url = Some(v);
    }
    if let Some(v) = text(lookup, "DB_HOST") {
        db.host = v;
    }
    if let Some(v) = parsed(lookup, "DB_PORT")? {
        db.port = v;
    }
    if let Some(v) = text(lookup, "DB_USER") {
        db.user = v;
    }
    if let Some(v) = lookup("DB_PASSWORD") {
        db.password = v;
    }
    if let Some(v) = text(lookup, "DB_NAME") {
        db.name = v;
    }
    if let Some(v) = text(lookup, "DB_SSLMODE") {
        db.ssl_mode = v;
    }
    if let Some(v) = parsed(lookup, "DB_MAX_CONNECTIONS")? {
        db.max_connections = v;
    }
    if let Some(v) = parsed(lookup, "DB_ACQUIRE_TIMEOUT_SECS")? {
        db.acquire_timeout_secs = v;
    }
    if let Some(v) = text(lookup, "DB_CREATE_DATABASE") {
        db.create_database = parse_bool("DB_CREATE_DATABASE", &v)?;
    }

    if let Some(v) = text(lookup, "KURBAN_STORE") {
        config.store = match v.to_lowercase().as_str() {
            "postgres" => StoreKind::Postgres,
            "memory" => StoreKind::Memory,
            other => {
                return Err(ConfigError::Env {
                    var: "KURBAN_STORE",
                    reason: format!("unknown store '{}'", other),
                })
            }
        };
    }
    Ok(())
}

fn text<F>(lookup: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parsed<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    text(lookup, var)
        .map(|v| {
            v.parse::<T>().map_err(|e| ConfigError::Env {
                var,
                reason: format!("'{}': {}", v, e),
            })
        })
        .transpose()
}

fn parse_bool(var: &'static str, v: &str) -> Result<bool, ConfigError> {
    match v.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Env {
            var,
            reason: format!("'{}' is not a boolean", v),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_match_legacy_constants() {
        let config = load_with(env(&[])).unwrap();
        assert_eq!(config.server.bind_addr(), "0.0.0.0:8000");
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.user, "postgres");
        assert_eq!(config.database.name, "postgres");
        assert_eq!(config.database.ssl_mode, "disable");
        assert_eq!(config.store, StoreKind::Postgres);
    }

    #[test]
    fn env_overrides_defaults() {
        let config = load_with(env(&[
            ("PORT", "9000"),
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "6543"),
            ("DB_NAME", "qurban"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("DB_CREATE_DATABASE", "false"),
            ("KURBAN_STORE", "Memory"),
        ]))
        .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 6543);
        assert_eq!(config.database.name, "qurban");
        assert_eq!(config.database.max_connections, 12);
        assert!(!config.database.create_database);
        assert_eq!(config.store, StoreKind::Memory);
    }

    #[test]
    fn listen_host_ignores_shell_hostname() {
        let config = load_with(env(&[("HOST", "workstation.local")])).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");

        let config = load_with(env(&[("HOST", "workstation.local"), ("SERVER_HOST", "127.0.0.1")])).unwrap();
        assert_eq!(config.server.bind_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn bad_number_names_the_variable() {
        let err = load_with(env(&[("DB_PORT", "fivefourthreetwo")])).unwrap_err();
        assert!(matches!(err, ConfigError::Env { var: "DB_PORT", .. }));
    }

    #[test]
    fn unknown_store_is_rejected() {
        let err = load_with(env(&[("KURBAN_STORE", "redis")])).unwrap_err();
        assert!(matches!(err, ConfigError::Env { var: "KURBAN_STORE", .. }));
    }

    #[test]
    fn file_values_are_overridden_by_env() {
        let path = std::env::temp_dir().join(format!("kurban-config-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{ "server": { "port": 7000 }, "database": { "host": "from-file", "name": "inventory" } }"#,
        )
        .unwrap();
        let path_str = path.to_string_lossy().to_string();
        let config = load_with(env(&[(CONFIG_PATH_VAR, path_str.as_str()), ("DB_HOST", "from-env")])).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.server.port, 7000);
        assert_eq!(config.database.host, "from-env");
        assert_eq!(config.database.name, "inventory");
        assert_eq!(config.database.user, "postgres");
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = load_with(env(&[(CONFIG_PATH_VAR, "/nonexistent/kurban.json")])).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }
}
