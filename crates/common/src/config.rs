//! Configuration shared by the gateway server and the dashboard client
//!
//! Every field has a default so an absent or partial `mission.toml` still
//! yields a usable configuration. The NASA API key is not part of this
//! structure; the gateway reads it from the environment.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

/// Default configuration file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "mission.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Proxy server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Base of the upstream NASA API
    #[serde(default = "default_nasa_base_url")]
    pub nasa_base_url: String,
    /// Directory served at `/`
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Client-side settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Base URL of the gateway
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// File the rendered document is written to
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Drop photo responses that no longer match the selected rover and sol
    #[serde(default = "default_discard_stale_photos")]
    pub discard_stale_photos: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Write logs here instead of stderr
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_nasa_base_url() -> String {
    "https://api.nasa.gov".to_string()
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_server_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("public/dashboard.html")
}

fn default_discard_stale_photos() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            nasa_base_url: default_nasa_base_url(),
            public_dir: default_public_dir(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            output: default_output(),
            discard_stale_photos: default_discard_stale_photos(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_file: None,
        }
    }
}

impl SystemConfig {
    /// Load and validate a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: SystemConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.gateway.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "gateway.port".to_string(),
                value: "0".to_string(),
            });
        }

        if self.gateway.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "gateway.request_timeout_secs".to_string(),
                value: "0".to_string(),
            });
        }

        url::Url::parse(&self.gateway.nasa_base_url).map_err(|e| ConfigError::InvalidValue {
            field: "gateway.nasa_base_url".to_string(),
            value: format!("{}: {}", self.gateway.nasa_base_url, e),
        })?;

        url::Url::parse(&self.dashboard.server_url).map_err(|e| ConfigError::InvalidValue {
            field: "dashboard.server_url".to_string(),
            value: format!("{}: {}", self.dashboard.server_url, e),
        })?;

        Ok(())
    }

    /// Socket address string the gateway binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.gateway.host, self.gateway.port)
    }
}
