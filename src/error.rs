// src/error.rs
// =============================================================================
// Typed errors for the two layers that can fail before extraction starts:
//
// - FetchError:  talking to the contents API (always fatal for the run)
// - ConfigError: turning command-line arguments into a ScrapeConfig
//
// The application layer (main.rs, scrape/) wraps these in anyhow::Error
// and adds context about which category or module was being processed.
// Extraction itself never fails; see extract/.
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

/// Errors from the remote contents API and raw file downloads.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, connection reset...)
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("Failed to fetch {url}: HTTP {status}")]
    Status { url: String, status: StatusCode },

    /// A directory listing that is not a JSON array of entries
    #[error("Unexpected listing from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("File entry {path} has no download URL")]
    MissingDownloadUrl { path: String },

    #[error("Cannot build a contents URL from {0}")]
    InvalidUrl(String),

    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Errors raised while validating command-line configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid repository '{0}'. Expected OWNER/NAME or https://github.com/OWNER/NAME")]
    InvalidRepo(String),

    #[error("Invalid API URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },

    #[error("Invalid file extension '{0}'")]
    InvalidExtension(String),

    #[error("Invalid value for header {0}")]
    InvalidHeader(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let error = FetchError::Status {
            url: "https://api.github.com/repos/a/b/contents/x".to_string(),
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(
            error.to_string(),
            "Failed to fetch https://api.github.com/repos/a/b/contents/x: HTTP 404 Not Found"
        );
    }

    #[test]
    fn test_config_error_message() {
        let error = ConfigError::InvalidRepo("nope".to_string());
        assert!(error.to_string().starts_with("Invalid repository 'nope'"));
    }
}
