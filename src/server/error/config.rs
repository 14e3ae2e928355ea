use thiserror::Error;

/// Configuration problems detected at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable is set but cannot be parsed.
    #[error("Invalid value for {name}: {value}")]
    InvalidEnvVar { name: String, value: String },
}
