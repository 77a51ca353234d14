//! Config validation: reject settings that cannot produce a working server or pool.

use crate::config::{AppConfig, StoreKind};
use crate::error::ConfigError;

const SSL_MODES: &[&str] = &["disable", "allow", "prefer", "require", "verify-ca", "verify-full"];

pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.host.trim().is_empty() {
        return Err(ConfigError::Validation("server host must not be empty".into()));
    }
    if config.server.port == 0 {
        return Err(ConfigError::Validation("server port must be greater than 0".into()));
    }
    if config.server.body_limit == 0 {
        return Err(ConfigError::Validation("body limit must be greater than 0".into()));
    }

    if config.store == StoreKind::Memory {
        return Ok(());
    }

    let db = &config.database;
    if db.max_connections == 0 {
        return Err(ConfigError::Validation("max_connections must be at least 1".into()));
    }
    if db.url.is_some() {
        return Ok(());
    }
    if db.host.trim().is_empty() {
        return Err(ConfigError::Validation("database host must not be empty".into()));
    }
    if db.port == 0 {
        return Err(ConfigError::Validation("database port must be greater than 0".into()));
    }
    if db.user.trim().is_empty() {
        return Err(ConfigError::Validation("database user must not be empty".into()));
    }
    if db.name.trim().is_empty() {
        return Err(ConfigError::Validation("database name must not be empty".into()));
    }
    if !SSL_MODES.contains(&db.ssl_mode.as_str()) {
        return Err(ConfigError::Validation(format!(
            "unknown ssl_mode '{}', expected one of {:?}",
            db.ssl_mode, SSL_MODES
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn zero_pool_size_is_rejected() {
        let mut config = AppConfig::default();
        config.database.max_connections = 0;
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn unknown_ssl_mode_is_rejected() {
        let mut config = AppConfig::default();
        config.database.ssl_mode = "sometimes".into();
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn url_skips_discrete_field_checks() {
        let mut config = AppConfig::default();
        config.database.url = Some("postgres://u:p@db/kurban".into());
        config.database.host = String::new();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn memory_store_ignores_database_section() {
        let mut config = AppConfig::default();
        config.store = StoreKind::Memory;
        config.database.name = String::new();
        assert!(validate(&config).is_ok());
    }
}
