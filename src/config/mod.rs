//! Configuration module
//!
//! Every setting has a default matching the public SCP wiki, so a config file
//! is optional. When one is given it is TOML, and any key it omits keeps its
//! default.
//!
//! # Example
//!
//! ```no_run
//! use scp_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper.toml")).unwrap();
//! println!("Crawling {}", config.site.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, SiteConfig, UserAgentConfig, DEFAULT_BASE_URL, DEFAULT_DETAIL_PATTERN,
    DEFAULT_GUARD_INTERVAL_MS, DEFAULT_IDENTIFIER_DELIMITER, DEFAULT_RECORDS_PER_SERIES,
    DEFAULT_SERIES_PATTERN,
};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};
pub use validation::validate;

pub(crate) use validation::compile_pattern;
