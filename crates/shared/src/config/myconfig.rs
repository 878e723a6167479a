use anyhow::{Context, Result, anyhow};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "postgres" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(anyhow!(
                "STORE_BACKEND must be 'postgres' or 'memory', got '{}'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub run_migrations: bool,
    pub port: u16,
    pub db_max_conn: u32,
    pub jwt_expires_in_hours: i64,
    pub bcrypt_cost: u32,
    pub enforce_order_transitions: bool,
    pub store_backend: StoreBackend,
    pub otel_endpoint: Option<String>,
    pub dev_mode: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, so tests need not touch the process env.
    pub fn from_source<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            get(key).with_context(|| format!("Missing environment variable: {key}"))
        };

        let store_backend = match get("STORE_BACKEND") {
            Some(value) => value.parse::<StoreBackend>()?,
            None => StoreBackend::Postgres,
        };

        let database_url = match store_backend {
            StoreBackend::Postgres => Some(required("DATABASE_URL")?),
            StoreBackend::Memory => get("DATABASE_URL"),
        };

        let jwt_secret = required("JWT_SECRET")?;

        let port = required("PORT")?
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let run_migrations = parse_flag("RUN_MIGRATIONS", get("RUN_MIGRATIONS"), false)?;

        let db_max_conn = match get("DB_MAX_CONN") {
            Some(value) => value
                .parse::<u32>()
                .context("DB_MAX_CONN must be a positive integer")?,
            None => 5,
        };

        let jwt_expires_in_hours = match get("JWT_EXPIRES_IN_HOURS") {
            Some(value) => value
                .parse::<i64>()
                .context("JWT_EXPIRES_IN_HOURS must be an integer")?,
            None => 24 * 7,
        };

        let bcrypt_cost = match get("BCRYPT_COST") {
            Some(value) => value
                .parse::<u32>()
                .context("BCRYPT_COST must be an integer between 4 and 31")?,
            None => 10,
        };

        if !(4..=31).contains(&bcrypt_cost) {
            return Err(anyhow!(
                "BCRYPT_COST must be between 4 and 31, got {}",
                bcrypt_cost
            ));
        }

        let enforce_order_transitions = parse_flag(
            "ENFORCE_ORDER_TRANSITIONS",
            get("ENFORCE_ORDER_TRANSITIONS"),
            false,
        )?;

        let otel_endpoint = get("OTEL_ENDPOINT").filter(|value| !value.is_empty());

        let dev_mode = get("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let enable_file_log = get("ENABLE_FILE_LOG")
            .map(|v| v == "true")
            .unwrap_or(false);

        Ok(Self {
            database_url,
            jwt_secret,
            run_migrations,
            port,
            db_max_conn,
            jwt_expires_in_hours,
            bcrypt_cost,
            enforce_order_transitions,
            store_backend,
            otel_endpoint,
            dev_mode,
            enable_file_log,
        })
    }
}

fn parse_flag(name: &str, value: Option<String>, default: bool) -> Result<bool> {
    match value.as_deref() {
        None => Ok(default),
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(other) => Err(anyhow!(
            "{} must be 'true' or 'false', got '{}'",
            name,
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply() {
        let config = Config::from_source(source(&[
            ("DATABASE_URL", "postgres://localhost/store"),
            ("JWT_SECRET", "secret"),
            ("PORT", "8000"),
        ]))
        .unwrap();

        assert_eq!(config.store_backend, StoreBackend::Postgres);
        assert_eq!(config.db_max_conn, 5);
        assert_eq!(config.jwt_expires_in_hours, 168);
        assert_eq!(config.bcrypt_cost, 10);
        assert!(!config.run_migrations);
        assert!(!config.enforce_order_transitions);
        assert!(config.otel_endpoint.is_none());
    }

    #[test]
    fn memory_backend_needs_no_database() {
        let config = Config::from_source(source(&[
            ("STORE_BACKEND", "memory"),
            ("JWT_SECRET", "secret"),
            ("PORT", "8000"),
            ("ENFORCE_ORDER_TRANSITIONS", "true"),
        ]))
        .unwrap();

        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert!(config.database_url.is_none());
        assert!(config.enforce_order_transitions);
    }

    #[test]
    fn missing_database_url_fails() {
        let err = Config::from_source(source(&[("JWT_SECRET", "secret"), ("PORT", "8000")]))
            .unwrap_err();

        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn invalid_flag_fails() {
        let result = Config::from_source(source(&[
            ("DATABASE_URL", "postgres://localhost/store"),
            ("JWT_SECRET", "secret"),
            ("PORT", "8000"),
            ("RUN_MIGRATIONS", "yes"),
        ]));

        assert!(result.is_err());
    }
}
