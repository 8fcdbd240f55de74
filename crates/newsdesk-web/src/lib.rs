//! Newsdesk web dashboard
//!
//! Server-rendered admin pages for blog, newsletter and subscriber metrics.
//! Each page request runs a fetch cycle against the REST backend, folds the
//! responses into the page's view-state and renders it as HTML.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod api_client;
pub mod components;
pub mod error;
pub mod fetcher;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod preferences;
pub mod routes;
pub mod server;
pub mod state;

// Re-export the main entry points
pub use api_client::ApiClient;
pub use error::{FetchError, FetchResult};
pub use fetcher::{CycleOutcome, PageStore};
pub use preferences::{PreferenceStore, UiPreferences};
pub use server::{build_app, build_app_with_state};
pub use state::AppState;
