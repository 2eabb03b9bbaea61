//! Error types for Lede operations.
//!
//! [`LedeError`] is the single failure taxonomy of the extraction pipeline.
//! Resolvers never produce errors; only fetching, input handling and the
//! orchestrator's validation step do.
//!
//! # Example
//!
//! ```rust
//! use lede_core::{LedeError, extract_html};
//!
//! match extract_html("<p>Hi</p>") {
//!     Ok(article) => println!("{:?}", article.title),
//!     Err(LedeError::EmptyContent { length, minimum }) => {
//!         println!("only {} of {} characters", length, minimum);
//!     }
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Main error type for fetching and extraction.
#[derive(Error, Debug)]
pub enum LedeError {
    /// Malformed URL or missing HTML.
    ///
    /// Raised before any network activity takes place.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The page request exceeded its bounded wait.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// DNS, connection or transport failure while fetching.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The source site answered with a non-success status.
    #[error("Upstream returned HTTP {status}")]
    UpstreamHttpError { status: u16 },

    /// Extraction ran but produced too little text to be an article.
    #[error("Extracted content too short ({length} characters, need {minimum})")]
    EmptyContent { length: usize, minimum: usize },

    /// Unexpected failure while parsing the document.
    #[error("Internal error: {0}")]
    InternalError(String),

    /// File not found.
    ///
    /// Returned when reading HTML from a path that doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File or stdin I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file could not be read or deserialised.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LedeError {
    /// Whether retrying the same request may succeed.
    ///
    /// Timeouts and connection failures are transient; so are upstream
    /// server errors and the 408 / 429 statuses. Everything else needs a
    /// different input.
    pub fn is_retryable(&self) -> bool {
        match self {
            LedeError::Timeout { .. } | LedeError::NetworkError(_) => true,
            LedeError::UpstreamHttpError { status } => *status >= 500 || *status == 408 || *status == 429,
            _ => false,
        }
    }

    /// Client-facing classification of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            LedeError::InvalidInput(_) => ErrorCode::InvalidUrl,
            LedeError::Timeout { .. } => ErrorCode::ArticleTimeout,
            LedeError::NetworkError(_) => ErrorCode::NetworkError,
            LedeError::UpstreamHttpError { status } => ErrorCode::from_status(*status),
            LedeError::EmptyContent { .. } => ErrorCode::ArticleEmptyContent,
            LedeError::InternalError(_) => ErrorCode::ArticleParseError,
            LedeError::FileNotFound(_) | LedeError::Io(_) | LedeError::Config(_) => ErrorCode::UnknownError,
        }
    }
}

/// Stable error codes reported to API and CLI consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ArticleNotFound,
    ArticleLoadFailed,
    ArticleTimeout,
    ArticleAccessDenied,
    ArticleParseError,
    ArticleEmptyContent,
    InvalidUrl,
    UrlRequired,
    NetworkError,
    UnknownError,
}

impl ErrorCode {
    /// Classifies a non-success upstream status.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ErrorCode::InvalidUrl,
            401 | 403 => ErrorCode::ArticleAccessDenied,
            404 | 410 => ErrorCode::ArticleNotFound,
            408 => ErrorCode::ArticleTimeout,
            500..=599 => ErrorCode::ArticleLoadFailed,
            _ => ErrorCode::UnknownError,
        }
    }

    /// Human-friendly description of the failure.
    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::ArticleNotFound => "Could not load the article at this link. The page was not found.",
            ErrorCode::ArticleLoadFailed => "Could not load the article at this link. The server is unavailable.",
            ErrorCode::ArticleTimeout => "The article server took too long to respond.",
            ErrorCode::ArticleAccessDenied => {
                "Access to the article is restricted. A subscription or login may be required."
            }
            ErrorCode::ArticleParseError => "The article could not be processed. Try another link.",
            ErrorCode::ArticleEmptyContent => {
                "Could not extract the article text. The page may be empty or protected."
            }
            ErrorCode::InvalidUrl => "The URL is invalid. Check the link and try again.",
            ErrorCode::UrlRequired => "Please provide an article URL.",
            ErrorCode::NetworkError => "Network error. Check the connection and try again.",
            ErrorCode::UnknownError => "An unexpected error occurred. Please try again.",
        }
    }

    /// The wire name, e.g. `ARTICLE_TIMEOUT`.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ArticleNotFound => "ARTICLE_NOT_FOUND",
            ErrorCode::ArticleLoadFailed => "ARTICLE_LOAD_FAILED",
            ErrorCode::ArticleTimeout => "ARTICLE_TIMEOUT",
            ErrorCode::ArticleAccessDenied => "ARTICLE_ACCESS_DENIED",
            ErrorCode::ArticleParseError => "ARTICLE_PARSE_ERROR",
            ErrorCode::ArticleEmptyContent => "ARTICLE_EMPTY_CONTENT",
            ErrorCode::InvalidUrl => "INVALID_URL",
            ErrorCode::UrlRequired => "URL_REQUIRED",
            ErrorCode::NetworkError => "NETWORK_ERROR",
            ErrorCode::UnknownError => "UNKNOWN_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result type alias for LedeError.
pub type Result<T> = std::result::Result<T, LedeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedeError::InvalidInput("not a url".to_string());
        assert!(err.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_timeout_error() {
        let err = LedeError::Timeout { timeout: 15 };
        assert!(err.to_string().contains("15"));
        assert!(err.is_retryable());
        assert_eq!(err.code(), ErrorCode::ArticleTimeout);
    }

    #[test]
    fn test_empty_content_not_retryable() {
        let err = LedeError::EmptyContent { length: 30, minimum: 100 };
        assert!(err.to_string().contains("30"));
        assert!(err.to_string().contains("100"));
        assert!(!err.is_retryable());
        assert_eq!(err.code(), ErrorCode::ArticleEmptyContent);
    }

    #[test]
    fn test_upstream_status_classification() {
        assert_eq!(LedeError::UpstreamHttpError { status: 404 }.code(), ErrorCode::ArticleNotFound);
        assert_eq!(LedeError::UpstreamHttpError { status: 403 }.code(), ErrorCode::ArticleAccessDenied);
        assert_eq!(LedeError::UpstreamHttpError { status: 503 }.code(), ErrorCode::ArticleLoadFailed);
        assert_eq!(LedeError::UpstreamHttpError { status: 418 }.code(), ErrorCode::UnknownError);

        assert!(LedeError::UpstreamHttpError { status: 502 }.is_retryable());
        assert!(LedeError::UpstreamHttpError { status: 429 }.is_retryable());
        assert!(!LedeError::UpstreamHttpError { status: 404 }.is_retryable());
    }

    #[test]
    fn test_error_code_wire_name() {
        let json = serde_json::to_string(&ErrorCode::ArticleEmptyContent).unwrap();
        assert_eq!(json, r#""ARTICLE_EMPTY_CONTENT""#);
        assert_eq!(ErrorCode::ArticleEmptyContent.as_str(), "ARTICLE_EMPTY_CONTENT");
        assert_eq!(ErrorCode::NetworkError.to_string(), "NETWORK_ERROR");
    }
}
