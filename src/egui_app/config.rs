use std::path::{Path, PathBuf};

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "https://locker-api.vercel.app";

/// Default location of the generated map page
const DEFAULT_MAP_OUTPUT: &str = "lockers_map.html";

const DEFAULT_LOG_CAPACITY: usize = 1000;

/// Environment variable overriding the server URL
pub const SERVER_URL_ENV: &str = "LOCKER_API_URL";

/// Application configuration wrapper.
#[derive(Debug, Clone, Default)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Load `config.toml` from the user config directory, then apply
    /// `LOCKER_API_URL` on top of it.
    pub fn load() -> Result<Self, ConfigError> {
        let file = match default_config_path() {
            Some(path) => AppConfig::load_file(&path)?,
            None => None,
        };
        Self::from_sources(file, std::env::var(SERVER_URL_ENV).ok())
    }

    fn from_sources(file: Option<AppConfig>, env_url: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = AppConfig::builder();
        if let Some(file) = file {
            builder = builder.merge(file);
        }
        if let Some(url) = env_url.filter(|url| !url.trim().is_empty()) {
            builder = builder.server_url(url);
        }
        Self::with_builder(builder)
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    pub fn map_output(&self) -> &Path {
        self.app
            .map_output
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_MAP_OUTPUT))
    }

    pub fn log_capacity(&self) -> usize {
        self.app.log_capacity.unwrap_or(DEFAULT_LOG_CAPACITY)
    }
}

/// `<config dir>/lockerdesk/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lockerdesk").join("config.toml"))
}
