//! Web server setup and configuration

use crate::{middleware::request_logging_middleware, routes::build_routes, state::AppState};
use axum::{Router, middleware};
use newsdesk_core::Config;
use std::sync::Arc;
use tower::ServiceBuilder;

/// Build the complete web application with all routes and state
///
/// # Errors
///
/// Returns an error if the backend client cannot be constructed.
pub fn build_app(config: Config) -> newsdesk_core::Result<Router> {
    Ok(build_app_with_state(Arc::new(AppState::new(config)?)))
}

/// Build the application around shared state
pub fn build_app_with_state(state: Arc<AppState>) -> Router {
    build_routes()
        .layer(ServiceBuilder::new().layer(middleware::from_fn(request_logging_middleware)))
        .with_state(state)
}
