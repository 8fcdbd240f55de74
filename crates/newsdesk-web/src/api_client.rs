//! HTTP client for the blog/newsletter REST backend

use crate::error::{FetchError, FetchResult};
use newsdesk_core::config::BackendConfig;
use newsdesk_core::types::{
    BlogCounts, CountSummary, MonthlyBreakdown, MonthlyCount, SelectedYear, SingleCount,
    SubscriptionEvent, TotalCount,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// API client for the dashboard's backend endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

impl ApiClient {
    /// Create a client without a request timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: trim_base_url(base_url.into()),
            api_token: None,
        }
    }

    /// Create a client from backend configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn from_config(backend: &BackendConfig) -> newsdesk_core::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(backend.request_timeout))
            .build()
            .map_err(|e| newsdesk_core::Error::Configuration {
                message: format!("could not build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: trim_base_url(backend.base_url.clone()),
            api_token: backend.api_token.clone(),
        })
    }

    /// Set the bearer token for authentication
    #[must_use]
    pub fn with_api_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = Some(api_token.into());
        self
    }

    /// Backend base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/blogs/counts`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn blog_counts(&self) -> FetchResult<BlogCounts> {
        self.get_json("/api/blogs/counts").await
    }

    /// `GET /api/blogs/count/{year}`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn blog_monthly_counts(&self, year: &SelectedYear) -> FetchResult<Vec<MonthlyCount>> {
        self.get_json(&format!("/api/blogs/count/{}", encode_year(year)))
            .await
    }

    /// `GET /api/newsletters/counts/total`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn newsletter_total(&self) -> FetchResult<TotalCount> {
        self.get_json("/api/newsletters/counts/total").await
    }

    /// `GET /api/newsletters/counts/monthly/{year}`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn newsletter_monthly_counts(
        &self,
        year: &SelectedYear,
    ) -> FetchResult<Vec<MonthlyCount>> {
        self.get_json(&format!(
            "/api/newsletters/counts/monthly/{}",
            encode_year(year)
        ))
        .await
    }

    /// `GET /api/newsletters/scheduled/count`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn scheduled_newsletter_count(&self) -> FetchResult<SingleCount> {
        self.get_json("/api/newsletters/scheduled/count").await
    }

    /// `GET /api/newsletters/cancelled/count`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn cancelled_newsletter_count(&self) -> FetchResult<SingleCount> {
        self.get_json("/api/newsletters/cancelled/count").await
    }

    /// `GET /api/subscribers/count/total`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn subscriber_totals(&self) -> FetchResult<CountSummary> {
        self.get_json("/api/subscribers/count/total").await
    }

    /// `GET /api/subscribers/count/monthly`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn subscriber_monthly_counts(&self) -> FetchResult<Vec<MonthlyBreakdown>> {
        self.get_json("/api/subscribers/count/monthly").await
    }

    /// `GET /api/subscribers/recent`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn recent_subscribers(&self) -> FetchResult<Vec<SubscriptionEvent>> {
        self.get_json("/api/subscribers/recent").await
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> FetchResult<T> {
        let url = format!("{}{endpoint}", self.base_url);
        debug!(%url, "Fetching backend endpoint");

        let mut request = self.client.get(&url);

        if let Some(ref api_token) = self.api_token {
            request = request.bearer_auth(api_token);
        }

        let response = request.send().await.map_err(|source| FetchError::Transport {
            endpoint: endpoint.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(|source| FetchError::Transport {
            endpoint: endpoint.to_string(),
            source,
        })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

fn trim_base_url(mut base_url: String) -> String {
    while base_url.ends_with('/') {
        base_url.pop();
    }
    base_url
}

fn encode_year(year: &SelectedYear) -> String {
    urlencoding::encode(year.as_str()).into_owned()
}
