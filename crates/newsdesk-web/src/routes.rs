//! Route definitions for the dashboard

use crate::{
    handlers::{health, pages, session},
    state::AppState,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Build the complete dashboard router
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Page routes
        .route("/", get(pages::root))
        .route("/subscribers", get(pages::subscribers_page))
        .route("/blogs", get(pages::blogs_page))
        .route("/newsletters", get(pages::newsletters_page))
        .route("/login", get(pages::login_page))
        // Session actions
        .route("/preferences/theme", post(session::toggle_theme))
        .route("/preferences/drawer", post(session::toggle_drawer))
        .route("/logout", get(session::logout).post(session::logout))
        // Health check
        .route("/health", get(health::health_check))
}
