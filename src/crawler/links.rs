//! Link collection over index pages
//!
//! Three layers, each built on the one before:
//! - [`collect_links`]: every href on one page matching a pattern
//! - [`discover_series`]: series index URLs listed on the wiki root
//! - [`enumerate_details`]: detail page URLs listed on each series page
//!
//! Nothing here is cached. Each call re-fetches, so series numbering always
//! reflects the wiki as it is at call time.

use crate::config::{compile_pattern, SiteConfig};
use crate::crawler::fetcher::fetch_page;
use crate::crawler::parser::{extract_hrefs, qualify_link};
use crate::ScrapeError;
use regex::Regex;
use reqwest::Client;

/// Compiled link patterns for one site
#[derive(Debug, Clone)]
pub struct LinkPatterns {
    /// Site root; prefix for root-relative links
    pub base_url: String,

    /// Matches series index hrefs on the root page
    pub series: Regex,

    /// Matches detail page hrefs on a series page
    pub detail: Regex,
}

impl LinkPatterns {
    /// Compiles the site's link patterns
    ///
    /// Every alternation branch is anchored at the start of the href, whether
    /// or not the pattern is written with `^`.
    pub fn from_config(site: &SiteConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            base_url: site.base_url.trim_end_matches('/').to_string(),
            series: compile_pattern("series_pattern", &anchored(&site.series_pattern))?,
            detail: compile_pattern("detail_pattern", &anchored(&site.detail_pattern))?,
        })
    }
}

fn anchored(pattern: &str) -> String {
    format!("^(?:{})", pattern)
}

/// Fetches `page_url` and returns every href matching `constraint`
///
/// Hrefs are returned as written, in document order, duplicates included.
/// A failed fetch is an error; there is no retry.
pub async fn collect_links(
    client: &Client,
    page_url: &str,
    constraint: &Regex,
) -> Result<Vec<String>, ScrapeError> {
    let body = fetch_page(client, page_url).await?;

    let links: Vec<String> = extract_hrefs(&body)
        .into_iter()
        .filter(|href| constraint.is_match(href))
        .collect();

    tracing::debug!(
        "Collected {} links matching '{}' from {}",
        links.len(),
        constraint.as_str(),
        page_url
    );

    Ok(links)
}

/// Returns the fully qualified URL of every series index, in wiki order
///
/// Series `k` (0-based) is the `k`-th entry of the returned list.
pub async fn discover_series(
    client: &Client,
    patterns: &LinkPatterns,
) -> Result<Vec<String>, ScrapeError> {
    let links = collect_links(client, &patterns.base_url, &patterns.series).await?;

    Ok(links
        .iter()
        .map(|href| qualify_link(&patterns.base_url, href))
        .collect())
}

/// Returns the fully qualified detail page URLs of each given series
///
/// The outer list has one entry per input series, in input order.
pub async fn enumerate_details(
    client: &Client,
    patterns: &LinkPatterns,
    series_urls: &[String],
) -> Result<Vec<Vec<String>>, ScrapeError> {
    let mut details = Vec::with_capacity(series_urls.len());

    for series_url in series_urls {
        let links = collect_links(client, series_url, &patterns.detail).await?;
        details.push(
            links
                .iter()
                .map(|href| qualify_link(&patterns.base_url, href))
                .collect(),
        );
    }

    Ok(details)
}
