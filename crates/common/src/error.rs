use thiserror::Error;

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue { field: String, value: String },

    /// Configuration file could not be read
    #[error("Failed to read configuration file '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parsing error
    #[error("Failed to parse configuration file '{path}'")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
