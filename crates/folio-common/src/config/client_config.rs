//! Client configuration
//!
//! The API base URL is the only externally configurable behavior of the
//! client; `APP_ENV` only picks a logging preset.

use std::env;
use std::time::Duration;

/// Environment variable holding the API base URL
pub const API_URL_VAR: &str = "PORTFOLIO_API_URL";

/// Top-level client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub app: AppSettings,
    pub api: ApiConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// REST API connection settings
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Settings for the given base URL with the default timeout
    ///
    /// # Errors
    /// Returns an error if the URL is empty or not http(s)
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            timeout_secs: default_timeout_secs(),
        })
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Join a path such as `/api/projects` onto the base URL
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "folio".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidValue(API_URL_VAR, "empty URL".to_string()));
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidValue(API_URL_VAR, raw.to_string()));
    }
    Ok(trimmed.to_string())
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if `PORTFOLIO_API_URL` is set to an unusable value
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(
            env::var(API_URL_VAR).ok().as_deref(),
            env::var("APP_ENV").ok().as_deref(),
        )
    }

    /// Build configuration from raw variable values; `None` means unset
    ///
    /// # Errors
    /// Returns an error if the API URL is set but unusable
    pub fn from_vars(api_url: Option<&str>, app_env: Option<&str>) -> Result<Self, ConfigError> {
        let api = match api_url {
            Some(url) => ApiConfig::new(url)?,
            None => ApiConfig::default(),
        };

        Ok(Self {
            app: AppSettings {
                name: default_app_name(),
                env: app_env.and_then(Environment::parse).unwrap_or_default(),
            },
            api,
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: default_app_name(),
                env: Environment::default(),
            },
            api: ApiConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
