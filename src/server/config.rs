use crate::server::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub jwt_secret: String,
    pub jwt_ttl_seconds: u64,

    pub storage_base_url: String,
    pub storage_public_url: String,

    pub carrier_base_url: String,
    pub carrier_token: String,
    pub carrier_shop_id: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            jwt_secret: require("JWT_SECRET")?,
            jwt_ttl_seconds: parse_u64("JWT_TTL_SECONDS", 86_400)?,
            storage_base_url: require("STORAGE_BASE_URL")?,
            storage_public_url: require("STORAGE_PUBLIC_URL")?,
            carrier_base_url: require("CARRIER_BASE_URL")?,
            carrier_token: require("CARRIER_TOKEN")?,
            carrier_shop_id: parse_i64("CARRIER_SHOP_ID", 0)?,
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Err(_) => Ok(default),
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}

fn parse_i64(name: &str, default: i64) -> Result<i64, ConfigError> {
    match std::env::var(name) {
        Err(_) => Ok(default),
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}
