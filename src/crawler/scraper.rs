//! Scraper facade
//!
//! Ties series discovery, detail enumeration, extraction, and the orchestrator
//! together behind the three operations the CLI offers: one record, a range
//! of records, and a series audit.

use crate::config::{validate, Config};
use crate::crawler::audit::{audit_details, AuditReport};
use crate::crawler::extractor::{extract_record, RecordParser};
use crate::crawler::fetcher::build_http_client;
use crate::crawler::links::{discover_series, enumerate_details, LinkPatterns};
use crate::crawler::orchestrator::{all_or_first_error, Orchestrator};
use crate::record::{Record, RecordPosition};
use crate::ScrapeError;
use reqwest::Client;
use std::sync::Arc;

/// Largest number of identifiers one range request may span
pub const MAX_RANGE_LEN: u64 = 100_000;

/// Entry point for every scraping operation
///
/// Cheap to clone; clones share the HTTP client, configuration, and compiled
/// patterns. Series and detail links are rediscovered on every call.
#[derive(Debug, Clone)]
pub struct Scraper {
    config: Arc<Config>,
    client: Client,
    patterns: Arc<LinkPatterns>,
    parser: Arc<RecordParser>,
    orchestrator: Orchestrator,
}

impl Scraper {
    /// Creates a scraper from a configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use scp_scraper::{Config, Scraper};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let scraper = Scraper::new(Config::default())?;
    /// let record = scraper.get_record(173).await?;
    /// println!("{}", record);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: Config) -> Result<Self, ScrapeError> {
        validate(&config)?;

        let client = build_http_client(&config.user_agent, &config.crawler)?;
        let patterns = LinkPatterns::from_config(&config.site)?;
        let parser = RecordParser::new(&config.site.identifier_delimiter)?;
        let orchestrator = Orchestrator::from_config(&config.crawler);

        Ok(Self {
            config: Arc::new(config),
            client,
            patterns: Arc::new(patterns),
            parser: Arc::new(parser),
            orchestrator,
        })
    }

    /// Returns the configuration this scraper was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Discovers the URL of every series, in wiki order
    pub async fn series(&self) -> Result<Vec<String>, ScrapeError> {
        discover_series(&self.client, &self.patterns).await
    }

    /// Discovers how many series the wiki currently lists
    pub async fn series_count(&self) -> Result<usize, ScrapeError> {
        Ok(self.series().await?.len())
    }

    /// Returns the detail page URLs of one series (0-based)
    pub async fn detail_links(&self, series: usize) -> Result<Vec<String>, ScrapeError> {
        let all_series = self.series().await?;
        let series_url = all_series
            .get(series)
            .cloned()
            .ok_or(ScrapeError::SeriesOutOfRange {
                series: series + 1,
                available: all_series.len(),
            })?;

        let mut details = enumerate_details(&self.client, &self.patterns, &[series_url]).await?;
        Ok(details.pop().unwrap_or_default())
    }

    /// Fetches the record with the given item number
    pub async fn get_record(&self, identifier: u64) -> Result<Record, ScrapeError> {
        let location =
            RecordPosition::from_identifier(identifier, self.config.crawler.records_per_series)?;
        tracing::debug!(
            "SCP-{} resolves to series {} position {}",
            identifier,
            location.series + 1,
            location.position
        );

        let details = self.detail_links(location.series).await?;
        let url = details
            .get(location.position)
            .ok_or(ScrapeError::RecordOutOfRange {
                identifier,
                position: location.position,
                available: details.len(),
            })?;

        extract_record(&self.client, &self.parser, url).await
    }

    /// Fetches every record in `[start, end)` concurrently
    ///
    /// Each identifier is resolved independently in its own task. Records are
    /// returned in completion order; the first failure fails the whole range.
    /// Ranges spanning more than [`MAX_RANGE_LEN`] identifiers are rejected.
    pub async fn get_range(&self, start: u64, end: u64) -> Result<Vec<Record>, ScrapeError> {
        if start == 0 {
            return Err(ScrapeError::InvalidIdentifier(start));
        }
        if start >= end {
            return Ok(Vec::new());
        }
        if end - start > MAX_RANGE_LEN {
            return Err(ScrapeError::InvalidRequest(format!(
                "range SCP-{} to SCP-{} spans {} items (at most {} allowed)",
                start,
                end - 1,
                end - start,
                MAX_RANGE_LEN
            )));
        }

        tracing::info!("Fetching SCP-{} through SCP-{}", start, end - 1);

        let outcomes = self
            .orchestrator
            .fetch_all(start..end, |identifier| {
                let scraper = self.clone();
                async move { scraper.get_record(identifier).await }
            })
            .await;

        all_or_first_error(outcomes)
    }

    /// Extracts records from the given detail pages, one outcome per page
    ///
    /// Unlike [`Scraper::get_range`], failures do not discard the other results.
    pub async fn fetch_records(&self, urls: Vec<String>) -> Vec<Result<Record, ScrapeError>> {
        self.orchestrator
            .fetch_records(&self.client, &self.parser, urls)
            .await
    }

    /// Audits the extraction error rate of one series (1-based)
    pub async fn audit_series(&self, series: usize) -> Result<AuditReport, ScrapeError> {
        if series == 0 {
            return Err(ScrapeError::InvalidRequest(
                "series numbers start at 1".to_string(),
            ));
        }

        let details = self.detail_links(series - 1).await?;
        tracing::info!("Auditing series {} ({} detail pages)", series, details.len());

        audit_details(
            &self.orchestrator,
            &self.client,
            &self.parser,
            series,
            details,
        )
        .await
    }
}
