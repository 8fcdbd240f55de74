//! Application state management

use crate::api_client::ApiClient;
use crate::components::{NavItem, RenderContext};
use crate::fetcher::PageStore;
use crate::pages::{blogs::BlogsView, newsletters::NewslettersView, subscribers::SubscribersView};
use crate::preferences::{PreferenceStore, UiPreferences};
use axum::http::Uri;
use newsdesk_core::Config;

/// Application state shared by every handler
#[derive(Debug)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// API client for backend communication
    pub api_client: ApiClient,
    /// Theme and drawer flags for the server session
    pub preferences: PreferenceStore,
    /// Blogs page view-state
    pub blogs: PageStore<BlogsView>,
    /// Newsletters page view-state
    pub newsletters: PageStore<NewslettersView>,
    /// Subscribers page view-state
    pub subscribers: PageStore<SubscribersView>,
}

impl AppState {
    /// Create new application state with a client built from `config.backend`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: Config) -> newsdesk_core::Result<Self> {
        let api_client = ApiClient::from_config(&config.backend)?;
        Ok(Self::with_api_client(config, api_client))
    }

    /// Create new application state around an existing client
    #[must_use]
    pub fn with_api_client(config: Config, api_client: ApiClient) -> Self {
        let preferences = PreferenceStore::new(UiPreferences::from_config(&config.ui));
        Self {
            config,
            api_client,
            preferences,
            blogs: PageStore::new("blogs"),
            newsletters: PageStore::new("newsletters"),
            subscribers: PageStore::new("subscribers"),
        }
    }

    /// Shell inputs for `active`, returning to the URI being served
    #[must_use]
    pub fn render_context(&self, active: NavItem, uri: &Uri) -> RenderContext<'_> {
        let return_to = uri
            .path_and_query()
            .map_or_else(|| active.path().to_string(), ToString::to_string);

        RenderContext {
            app_title: &self.config.ui.title,
            active,
            return_to,
            chart_library_url: &self.config.ui.chart_library_url,
            preferences: self.preferences.get(),
        }
    }
}
