//! Concurrent fan-out of fetch tasks
//!
//! One task is spawned per input, with a fixed guard interval between
//! launches to stay polite to the wiki. The guard interval spaces out request
//! starts; it does not cap how many requests are in flight at once.
//!
//! Every task reports its own outcome. Results come back in completion order,
//! not launch order, and the caller decides whether one failure sinks the batch.

use crate::config::CrawlerConfig;
use crate::crawler::extractor::{extract_record, RecordParser};
use crate::record::Record;
use crate::ScrapeError;
use reqwest::Client;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

/// Launches tasks with a guard interval and joins them all
#[derive(Debug, Clone, Copy)]
pub struct Orchestrator {
    guard_interval: Duration,
}

impl Orchestrator {
    /// Creates an orchestrator that waits `guard_interval` between launches
    pub fn new(guard_interval: Duration) -> Self {
        Self { guard_interval }
    }

    /// Creates an orchestrator from the crawler configuration
    pub fn from_config(config: &CrawlerConfig) -> Self {
        Self::new(Duration::from_millis(config.guard_interval))
    }

    /// Returns the delay between task launches
    pub fn guard_interval(&self) -> Duration {
        self.guard_interval
    }

    /// Runs `task` once per item and waits for every task to finish
    ///
    /// Items are drawn lazily, one per launch. The returned vector has exactly
    /// one outcome per item, ordered by completion. A task that panics is
    /// reported as `ScrapeError::Task`.
    pub async fn fetch_all<I, T, F, Fut>(
        &self,
        items: impl IntoIterator<Item = I>,
        task: F,
    ) -> Vec<Result<T, ScrapeError>>
    where
        F: Fn(I) -> Fut,
        Fut: Future<Output = Result<T, ScrapeError>> + Send + 'static,
        T: Send + 'static,
    {
        let mut items = items.into_iter().peekable();
        let mut tasks = JoinSet::new();
        let mut launched = 0usize;

        while let Some(item) = items.next() {
            tasks.spawn(task(item));
            launched += 1;

            if items.peek().is_some() && !self.guard_interval.is_zero() {
                tokio::time::sleep(self.guard_interval).await;
            }
        }

        tracing::debug!("Launched {} tasks, waiting for completion", launched);

        let mut outcomes = Vec::with_capacity(launched);
        while let Some(joined) = tasks.join_next().await {
            outcomes.push(match joined {
                Ok(outcome) => outcome,
                Err(e) => Err(ScrapeError::Task(e.to_string())),
            });
        }

        outcomes
    }

    /// Extracts a record from every detail page concurrently
    pub async fn fetch_records(
        &self,
        client: &Client,
        parser: &Arc<RecordParser>,
        urls: Vec<String>,
    ) -> Vec<Result<Record, ScrapeError>> {
        self.fetch_all(urls, |url| {
            let client = client.clone();
            let parser = Arc::clone(parser);
            async move { extract_record(&client, &parser, &url).await }
        })
        .await
    }
}

/// Collapses per-task outcomes, failing on the first error
pub fn all_or_first_error<T>(outcomes: Vec<Result<T, ScrapeError>>) -> Result<Vec<T>, ScrapeError> {
    outcomes.into_iter().collect()
}
