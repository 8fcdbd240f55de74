//! Configuration management for the dashboard

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dashboard HTTP server configuration
    pub server: ServerConfig,

    /// Backend REST API configuration
    pub backend: BackendConfig,

    /// Presentation defaults
    pub ui: UiConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the REST backend, without a trailing slash
    #[serde(default = "default_backend_url")]
    pub base_url: String,

    /// Bearer token sent with every backend request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

/// Presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Title shown in the navigation shell
    #[serde(default = "default_title")]
    pub title: String,

    /// Start sessions in dark mode
    #[serde(default)]
    pub dark_mode: bool,

    /// Start sessions with the navigation drawer open
    #[serde(default = "default_drawer_open")]
    pub drawer_open: bool,

    /// Script URL of the chart library loaded by every page
    #[serde(default = "default_chart_library_url")]
    pub chart_library_url: String,

    /// Name of the cookie holding the auth token
    #[serde(default = "default_auth_cookie")]
    pub auth_cookie: String,

    /// Route the logout action redirects to
    #[serde(default = "default_login_path")]
    pub login_path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

fn default_backend_url() -> String {
    "http://localhost:5000".to_string()
}

const fn default_request_timeout() -> u64 {
    30
}

fn default_title() -> String {
    "Newsdesk Admin".to_string()
}

const fn default_drawer_open() -> bool {
    true
}

fn default_chart_library_url() -> String {
    "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js".to_string()
}

fn default_auth_cookie() -> String {
    "auth_token".to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
            api_token: None,
            request_timeout: default_request_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            dark_mode: false,
            drawer_open: default_drawer_open(),
            chart_library_url: default_chart_library_url(),
            auth_cookie: default_auth_cookie(),
            login_path: default_login_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from `config.*` in the working directory and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (or `config.*` when `None`),
    /// overridden by `NEWSDESK_`-prefixed environment variables such as
    /// `NEWSDESK_BACKEND__BASE_URL`
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable or a value has the wrong type.
    pub fn load_from(path: Option<&Path>) -> crate::Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("NEWSDESK")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot constrain
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first offending field.
    pub fn validate(&self) -> crate::Result<()> {
        if self.backend.base_url.trim().is_empty() {
            return Err(crate::Error::Configuration {
                message: "backend.base_url must not be empty".to_string(),
            });
        }
        if self.backend.request_timeout == 0 {
            return Err(crate::Error::Configuration {
                message: "backend.request_timeout must be at least one second".to_string(),
            });
        }
        if !self.ui.login_path.starts_with('/') {
            return Err(crate::Error::Configuration {
                message: format!(
                    "ui.login_path must be a local path, got '{}'",
                    self.ui.login_path
                ),
            });
        }
        Ok(())
    }
}
