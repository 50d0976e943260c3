//! SCP-Scraper: a crawl-and-extract client for the SCP wiki
//!
//! This crate discovers series index pages, enumerates the detail pages each
//! series links to, and extracts a structured [`Record`] from every detail page
//! by matching its labeled paragraphs. Detail pages can be fetched one at a
//! time, as a concurrent range, or audited per series for extraction quality.

pub mod config;
pub mod crawler;
pub mod record;

use thiserror::Error;

/// Main error type for scraper operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Invalid item identifier: {0} (identifiers start at 1)")]
    InvalidIdentifier(u64),

    #[error("Series {series} does not exist ({available} series discovered)")]
    SeriesOutOfRange { series: usize, available: usize },

    #[error("SCP-{identifier} not found: position {position} but series lists {available} entries")]
    RecordOutOfRange {
        identifier: u64,
        position: usize,
        available: usize,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Fetch task failed: {0}")]
    Task(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid link pattern: {0}")]
    InvalidPattern(String),
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::Scraper;
pub use record::{ObjectClass, Record, RecordPosition};
