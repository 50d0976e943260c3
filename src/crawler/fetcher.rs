//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper:
//! - Building the HTTP client with a proper user agent string
//! - GET requests for index and detail pages
//! - Error classification (timeout, transport, non-2xx status)
//!
//! There is no retry. A failed fetch is returned to the caller, which decides
//! whether the whole operation is lost.

use crate::config::{CrawlerConfig, UserAgentConfig};
use crate::ScrapeError;
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `crawler` - Timeouts and scheme restrictions
///
/// # Example
///
/// ```no_run
/// use scp_scraper::config::Config;
/// use scp_scraper::crawler::build_http_client;
///
/// let config = Config::default();
/// let client = build_http_client(&config.user_agent, &config.crawler).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    crawler: &CrawlerConfig,
) -> Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version
    let user_agent = format!("{}/{}", user_agent.crawler_name, user_agent.crawler_version);

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(crawler.request_timeout))
        .connect_timeout(Duration::from_secs(crawler.request_timeout.min(10)))
        .https_only(crawler.https_only)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx | `Ok(body)` |
/// | Other status | `ScrapeError::Status` |
/// | Timeout | `ScrapeError::Timeout` |
/// | Anything else | `ScrapeError::Http` |
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, ScrapeError> {
    tracing::debug!("Fetching {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!("HTTP {} for {}", status.as_u16(), url);
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| classify_error(url, e))
}

fn classify_error(url: &str, error: reqwest::Error) -> ScrapeError {
    if error.is_timeout() {
        ScrapeError::Timeout {
            url: url.to_string(),
        }
    } else {
        ScrapeError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
