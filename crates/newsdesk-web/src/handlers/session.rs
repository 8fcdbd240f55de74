//! Session actions: preference toggles and logout

use crate::state::AppState;
use axum::{
    Form,
    extract::State,
    http::header,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Body of the preference toggle forms
#[derive(Debug, Default, Deserialize)]
pub struct ReturnForm {
    /// Local path to go back to
    #[serde(default)]
    pub return_to: Option<String>,
}

/// `POST /preferences/theme`
pub async fn toggle_theme(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ReturnForm>,
) -> Redirect {
    let preferences = state.preferences.toggle_dark_mode();
    info!(dark_mode = preferences.dark_mode, "Theme toggled");
    Redirect::to(safe_return_path(form.return_to.as_deref()))
}

/// `POST /preferences/drawer`
pub async fn toggle_drawer(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ReturnForm>,
) -> Redirect {
    let preferences = state.preferences.toggle_drawer();
    info!(drawer_open = preferences.drawer_open, "Navigation drawer toggled");
    Redirect::to(safe_return_path(form.return_to.as_deref()))
}

/// `GET|POST /logout`: expire the auth cookie and go to the login page
pub async fn logout(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let ui = &state.config.ui;
    info!(cookie = %ui.auth_cookie, "Signing out");

    (
        [(header::SET_COOKIE, expired_cookie(&ui.auth_cookie))],
        Redirect::to(&ui.login_path),
    )
}

fn expired_cookie(name: &str) -> String {
    format!("{name}=; Path=/; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT; HttpOnly; SameSite=Lax")
}

/// `return_to` if it is a path on this server, `/` otherwise
fn safe_return_path(return_to: Option<&str>) -> &str {
    match return_to {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path
        }
        _ => "/",
    }
}
