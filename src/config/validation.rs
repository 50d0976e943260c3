use crate::config::types::{Config, CrawlerConfig, SiteConfig, UserAgentConfig};
use crate::ConfigError;
use regex::Regex;
use url::Url;

/// Longest guard interval accepted (milliseconds)
const MAX_GUARD_INTERVAL_MS: u64 = 60_000;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site, config.crawler.https_only)?;
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

/// Validates the site section
fn validate_site_config(config: &SiteConfig, https_only: bool) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url '{}': {}", config.base_url, e)))?;

    match url.scheme() {
        "https" => {}
        "http" if !https_only => {}
        scheme => {
            return Err(ConfigError::InvalidUrl(format!(
                "base_url '{}' uses unsupported scheme '{}'",
                config.base_url, scheme
            )));
        }
    }

    compile_pattern("series_pattern", &config.series_pattern)?;
    compile_pattern("detail_pattern", &config.detail_pattern)?;

    if config.identifier_delimiter.is_empty() {
        return Err(ConfigError::Validation(
            "identifier_delimiter cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.guard_interval > MAX_GUARD_INTERVAL_MS {
        return Err(ConfigError::Validation(format!(
            "guard_interval must be <= {}ms, got {}ms",
            MAX_GUARD_INTERVAL_MS, config.guard_interval
        )));
    }

    if config.records_per_series < 1 {
        return Err(ConfigError::Validation(format!(
            "records_per_series must be >= 1, got {}",
            config.records_per_series
        )));
    }

    if config.request_timeout < 1 {
        return Err(ConfigError::Validation(format!(
            "request_timeout must be >= 1s, got {}s",
            config.request_timeout
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    Ok(())
}

/// Compiles a link pattern, naming the offending key on failure
pub(crate) fn compile_pattern(key: &str, pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern)
        .map_err(|e| ConfigError::InvalidPattern(format!("{} '{}': {}", key, pattern, e)))
}
