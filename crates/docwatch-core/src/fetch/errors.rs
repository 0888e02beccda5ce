use crate::errors::DocwatchError;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {message}")]
    ClientBuild { message: String },

    #[error("Request to {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("{status} for url: {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to read response body from {url}: {message}")]
    Body { url: String, message: String },
}

impl DocwatchError for FetchError {
    fn error_code(&self) -> &'static str {
        match self {
            FetchError::ClientBuild { .. } => "FETCH_CLIENT_BUILD_FAILED",
            FetchError::Timeout { .. } => "FETCH_TIMEOUT",
            FetchError::Request { .. } => "FETCH_REQUEST_FAILED",
            FetchError::Status { .. } => "FETCH_BAD_STATUS",
            FetchError::Body { .. } => "FETCH_BODY_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_names_url() {
        let error = FetchError::Status {
            url: "https://example.com/models".to_string(),
            status: 404,
        };
        assert_eq!(error.to_string(), "404 for url: https://example.com/models");
        assert_eq!(error.error_code(), "FETCH_BAD_STATUS");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_timeout_display() {
        let error = FetchError::Timeout {
            url: "https://example.com".to_string(),
            timeout_secs: 15,
        };
        assert_eq!(
            error.to_string(),
            "Request to https://example.com timed out after 15s"
        );
    }
}
