/**
 * Server Configuration
 *
 * Loads the server settings from environment variables once at startup.
 * Every setting has a development default except the database, whose
 * absence selects the in-memory store.
 *
 * | variable       | default             |
 * |----------------|---------------------|
 * | `DATABASE_URL` | unset (in-memory)   |
 * | `SERVER_PORT`  | `3000`              |
 * | `JWT_SECRET`   | development secret  |
 * | `IMAGES_DIR`   | `images`            |
 * | `BCRYPT_COST`  | `12`                |
 */

use std::path::PathBuf;
use thiserror::Error;

use crate::backend::auth::passwords::DEFAULT_BCRYPT_COST;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_IMAGES_DIR: &str = "images";

/// Used when `JWT_SECRET` is unset; never suitable for production
const DEVELOPMENT_SECRET: &str = "somesupersecretsecret";

/// Invalid configuration value
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    InvalidValue {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Postgres DSN; `None` selects the in-memory store
    pub database_url: Option<String>,
    pub port: u16,
    pub jwt_secret: String,
    pub images_dir: PathBuf,
    pub bcrypt_cost: u32,
}

impl ServerConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = match get("SERVER_PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_PORT",
                expected: "a port number",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let bcrypt_cost = match get("BCRYPT_COST") {
            Some(value) => match value.trim().parse::<u32>() {
                Ok(cost) if (4..=31).contains(&cost) => cost,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "BCRYPT_COST",
                        expected: "an integer between 4 and 31",
                        value,
                    })
                }
            },
            None => DEFAULT_BCRYPT_COST,
        };

        let jwt_secret = get("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set. Using the development signing secret.");
            DEVELOPMENT_SECRET.to_string()
        });

        let database_url = get("DATABASE_URL");
        if database_url.is_none() {
            tracing::warn!("DATABASE_URL not set. Data will be kept in memory only.");
        }

        Ok(Self {
            database_url,
            port,
            jwt_secret,
            images_dir: get("IMAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGES_DIR)),
            bcrypt_cost,
        })
    }
}
