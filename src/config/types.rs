use serde::Deserialize;

/// Default wiki root that series index pages are discovered from
pub const DEFAULT_BASE_URL: &str = "https://scp-wiki.wikidot.com";

/// Default pattern for series index links on the wiki root
pub const DEFAULT_SERIES_PATTERN: &str = "^/scp-series-*[0-9]*";

/// Default pattern for detail page links on a series index page
pub const DEFAULT_DETAIL_PATTERN: &str = "^/scp-[0-9]+";

/// Default token separating the item label from its number
pub const DEFAULT_IDENTIFIER_DELIMITER: &str = "SCP-";

/// Default delay between launching consecutive fetch tasks (milliseconds)
pub const DEFAULT_GUARD_INTERVAL_MS: u64 = 50;

/// Default number of records listed on one series index page
pub const DEFAULT_RECORDS_PER_SERIES: u64 = 1000;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
}

/// Where and what to crawl
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Wiki root; also the prefix for root-relative links
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Regex that series index hrefs on the root page must match
    #[serde(rename = "series-pattern")]
    pub series_pattern: String,

    /// Regex that detail page hrefs on a series page must match
    #[serde(rename = "detail-pattern")]
    pub detail_pattern: String,

    /// Token the "Item #" line is split on to isolate the number
    #[serde(rename = "identifier-delimiter")]
    pub identifier_delimiter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            series_pattern: DEFAULT_SERIES_PATTERN.to_string(),
            detail_pattern: DEFAULT_DETAIL_PATTERN.to_string(),
            identifier_delimiter: DEFAULT_IDENTIFIER_DELIMITER.to_string(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Delay between launching consecutive fetch tasks (milliseconds)
    #[serde(rename = "guard-interval")]
    pub guard_interval: u64,

    /// Number of records per series, used to resolve an identifier to its series
    #[serde(rename = "records-per-series")]
    pub records_per_series: u64,

    /// Per-request timeout (seconds)
    #[serde(rename = "request-timeout")]
    pub request_timeout: u64,

    /// Refuse to fetch anything that is not HTTPS
    #[serde(rename = "https-only")]
    pub https_only: bool,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            guard_interval: DEFAULT_GUARD_INTERVAL_MS,
            records_per_series: DEFAULT_RECORDS_PER_SERIES,
            request_timeout: 30,
            https_only: true,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: env!("CARGO_PKG_NAME").to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
