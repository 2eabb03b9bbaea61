//! Content fetching from URLs, files, and stdin.
//!
//! Page requests are made with a desktop-browser request signature so that
//! sites serving different markup to non-browser clients are not a problem,
//! and are bounded by an explicit wait: when it expires the in-flight
//! request is dropped and [`LedeError::Timeout`] is returned.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{LedeError, Result};

/// Desktop Chrome on Windows.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8";

/// HTTP client configuration for fetching web pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Upper bound on the whole request, body included, in seconds.
    pub timeout: u64,
    /// User-Agent header value.
    pub user_agent: String,
    /// Accept-Language header value.
    pub accept_language: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 15,
            user_agent: BROWSER_USER_AGENT.to_string(),
            accept_language: "en-US,en;q=0.9".to_string(),
        }
    }
}

/// Checks that `url` is an absolute http(s) URL.
///
/// # Errors
///
/// Returns [`LedeError::InvalidInput`] for anything else.
pub fn validate_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url.trim()).map_err(|e| LedeError::InvalidInput(format!("{}: {}", url, e)))?;

    match parsed.scheme() {
        "http" | "https" if parsed.host().is_some() => Ok(parsed),
        "http" | "https" => Err(LedeError::InvalidInput(format!("{}: missing host", url))),
        scheme => Err(LedeError::InvalidInput(format!(
            "{}: unsupported scheme {} (expected http or https)",
            url, scheme
        ))),
    }
}

/// Fetches HTML content from a URL.
///
/// The URL is validated before any network activity. Non-success statuses
/// become [`LedeError::UpstreamHttpError`]; DNS and connection failures
/// become [`LedeError::NetworkError`].
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    use std::time::Duration;

    use reqwest::Client;
    use reqwest::header;

    let parsed = validate_url(url)?;

    let client = Client::builder()
        .build()
        .map_err(|e| LedeError::InternalError(format!("HTTP client setup failed: {}", e)))?;

    let request = client
        .get(parsed)
        .header(header::USER_AGENT, &config.user_agent)
        .header(header::ACCEPT, ACCEPT)
        .header(header::ACCEPT_LANGUAGE, &config.accept_language)
        .header(header::CACHE_CONTROL, "no-cache")
        .header(header::PRAGMA, "no-cache")
        .header("Sec-Ch-Ua", r#""Not_A Brand";v="8", "Chromium";v="120", "Google Chrome";v="120""#)
        .header("Sec-Ch-Ua-Mobile", "?0")
        .header("Sec-Ch-Ua-Platform", r#""Windows""#)
        .header("Sec-Fetch-Dest", "document")
        .header("Sec-Fetch-Mode", "navigate")
        .header("Sec-Fetch-Site", "none")
        .header("Sec-Fetch-User", "?1")
        .header(header::UPGRADE_INSECURE_REQUESTS, "1");

    let timeout = config.timeout;
    let exchange = async {
        let response = request.send().await.map_err(|e| classify(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "upstream returned non-success status");
            return Err(LedeError::UpstreamHttpError { status: status.as_u16() });
        }

        response.text().await.map_err(|e| classify(e, timeout))
    };

    match tokio::time::timeout(Duration::from_secs(timeout), exchange).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(timeout, "fetch aborted after bounded wait");
            Err(LedeError::Timeout { timeout })
        }
    }
}

#[cfg(feature = "fetch")]
fn classify(err: reqwest::Error, timeout: u64) -> LedeError {
    if err.is_timeout() {
        LedeError::Timeout { timeout }
    } else {
        LedeError::NetworkError(err.to_string())
    }
}

/// Reads HTML content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(LedeError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(LedeError::from)
    }
}

/// Reads HTML content from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(LedeError::from)?;

    Ok(buffer)
}
