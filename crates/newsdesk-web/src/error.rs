//! Failures surfaced by backend fetches

use thiserror::Error;

/// A failed backend request
///
/// Pages handle every variant the same way (log, keep the previous
/// view-state); the variants only make the log line precise.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body read failure
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        /// Backend path that was requested
        endpoint: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// Backend answered with a non-2xx status
    #[error("{endpoint} returned {status}")]
    Status {
        /// Backend path that was requested
        endpoint: String,
        /// Status code received
        status: reqwest::StatusCode,
    },

    /// Body was not JSON of the expected shape
    #[error("could not decode response from {endpoint}: {source}")]
    Decode {
        /// Backend path that was requested
        endpoint: String,
        /// Parser error
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Backend path the failure belongs to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        match self {
            Self::Transport { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Decode { endpoint, .. } => endpoint,
        }
    }
}

/// Result alias for backend fetches
pub type FetchResult<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_error_display() {
        let error = FetchError::Status {
            endpoint: "/api/blogs/counts".to_string(),
            status: reqwest::StatusCode::BAD_GATEWAY,
        };

        assert_eq!(error.endpoint(), "/api/blogs/counts");
        assert_eq!(error.to_string(), "/api/blogs/counts returned 502 Bad Gateway");
    }

    #[test]
    fn test_decode_error_keeps_source() {
        use std::error::Error as _;

        let source = serde_json::from_str::<Vec<u8>>("{}").unwrap_err();
        let error = FetchError::Decode {
            endpoint: "/api/subscribers/recent".to_string(),
            source,
        };

        assert!(error.source().is_some());
        assert!(
            error
                .to_string()
                .starts_with("could not decode response from /api/subscribers/recent")
        );
    }
}
