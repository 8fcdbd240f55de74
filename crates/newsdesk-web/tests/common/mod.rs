//! Common test utilities and fixtures for integration tests

#![allow(dead_code, unreachable_pub, clippy::unwrap_used, clippy::expect_used)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;

use axum::Router;
use newsdesk_core::Config;
use newsdesk_web::{AppState, build_app_with_state};
use std::sync::Arc;
use wiremock::MockServer;

/// Test configuration builder
pub struct TestConfigBuilder {
    config: Config,
}

impl TestConfigBuilder {
    /// Defaults pointed at `backend_url`
    pub fn new(backend_url: impl Into<String>) -> Self {
        let mut config = Config::default();
        config.backend.base_url = backend_url.into();
        config.backend.request_timeout = 5;
        config.logging.format = "text".to_string();
        Self { config }
    }

    /// Send a bearer token with every backend request
    pub fn with_api_token(mut self, token: &str) -> Self {
        self.config.backend.api_token = Some(token.to_string());
        self
    }

    /// Start sessions in dark mode
    pub fn dark_mode(mut self) -> Self {
        self.config.ui.dark_mode = true;
        self
    }

    /// Per-request timeout in seconds
    pub fn with_request_timeout(mut self, seconds: u64) -> Self {
        self.config.backend.request_timeout = seconds;
        self
    }

    /// Finished configuration
    pub fn build(self) -> Config {
        self.config
    }
}

/// Dashboard wired to a mock backend
pub struct TestApp {
    pub backend: MockServer,
    pub state: Arc<AppState>,
    pub router: Router,
}

impl TestApp {
    /// Dashboard in front of a fresh mock backend with default configuration
    pub async fn start() -> Self {
        let backend = MockServer::start().await;
        let config = TestConfigBuilder::new(backend.uri()).build();
        Self::with_config(backend, config)
    }

    /// Dashboard in front of `backend` using `config`
    pub fn with_config(backend: MockServer, config: Config) -> Self {
        init_test_logging();
        let state = Arc::new(AppState::new(config).expect("state should build"));
        let router = build_app_with_state(Arc::clone(&state));
        Self {
            backend,
            state,
            router,
        }
    }
}
