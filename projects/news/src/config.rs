use std::{env, fmt::Display, net::{IpAddr, Ipv4Addr, SocketAddr}, str::FromStr, time::Duration};

use thiserror::Error;

use crate::db::PoolSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "production" => Ok(Self::Production),
            "development" | "test" => Ok(Self::Development),
            other => Err(format!("unknown environment `{other}`")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub environment: Environment,
    pub pool: PoolSettings,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("MissingVar: {key} must be set")]
    MissingVar { key: &'static str },
    #[error("InvalidVar: {key}={value}: {message}")]
    InvalidVar {
        key: &'static str,
        value: String,
        message: String,
    },
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingVar { key: "DATABASE_URL" })?;

        let defaults = PoolSettings::default();
        let max_size: u32 = parse_or(&lookup, "NEWS_POOL_MAX_SIZE", defaults.max_size)?;
        if max_size == 0 {
            return Err(ConfigError::InvalidVar {
                key: "NEWS_POOL_MAX_SIZE",
                value: max_size.to_string(),
                message: "pool needs at least one connection".to_string(),
            });
        }

        let pool = PoolSettings {
            max_size,
            min_idle: defaults.min_idle,
            connection_timeout: Duration::from_millis(parse_or(
                &lookup,
                "NEWS_POOL_ACQUIRE_TIMEOUT_MS",
                defaults.connection_timeout.as_millis() as u64,
            )?),
            idle_timeout: Duration::from_millis(parse_or(
                &lookup,
                "NEWS_POOL_IDLE_TIMEOUT_MS",
                defaults.idle_timeout.as_millis() as u64,
            )?),
        };

        Ok(Self {
            database_url,
            host: parse_or(&lookup, "NEWS_HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?,
            port: parse_or(&lookup, "NEWS_PORT", 3000)?,
            log_level: lookup("NEWS_LOG").unwrap_or_else(|| "info".to_string()),
            environment: parse_or(&lookup, "NEWS_ENV", Environment::Development)?,
            pool,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Outside production the database is reset and seeded on start-up.
    pub fn seed_enabled(&self) -> bool {
        self.environment != Environment::Production
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|err| ConfigError::InvalidVar {
                key,
                message: err.to_string(),
                value,
            })
        }
    }
}
