//! Extraction error-rate audit
//!
//! Every detail page of a series is extracted concurrently and each record is
//! judged complete or incomplete. A record is incomplete as soon as any one of
//! its four extracted fields still holds its sentinel value.

use crate::crawler::extractor::{extract_record, RecordParser};
use crate::crawler::orchestrator::Orchestrator;
use crate::ScrapeError;
use reqwest::Client;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Outcome of auditing one series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditReport {
    /// Audited series, 1-based
    pub series: usize,

    /// Detail pages listed by the series
    pub total: usize,

    /// Records with at least one sentinel field
    pub incomplete: usize,
}

impl AuditReport {
    /// Fraction of incomplete records in `[0, 1]`
    ///
    /// A series with no detail pages has an error rate of 0.
    pub fn error_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.incomplete as f64 / self.total as f64
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The error rate for Series {} is {} ({} of {} records incomplete)",
            self.series,
            self.error_rate(),
            self.incomplete,
            self.total
        )
    }
}

/// Extracts every detail page and counts the incomplete records
///
/// Fails if any page cannot be fetched.
pub async fn count_incomplete(
    orchestrator: &Orchestrator,
    client: &Client,
    parser: &Arc<RecordParser>,
    detail_urls: Vec<String>,
) -> Result<usize, ScrapeError> {
    let incomplete = Arc::new(AtomicUsize::new(0));

    let outcomes = orchestrator
        .fetch_all(detail_urls, |url| {
            let client = client.clone();
            let parser = Arc::clone(parser);
            let incomplete = Arc::clone(&incomplete);
            async move {
                tracing::debug!("Checking {}", url);
                let record = extract_record(&client, &parser, &url).await?;
                if record.is_incomplete() {
                    incomplete.fetch_add(1, Ordering::Relaxed);
                }
                Ok::<(), ScrapeError>(())
            }
        })
        .await;

    for outcome in outcomes {
        outcome?;
    }

    Ok(incomplete.load(Ordering::Relaxed))
}

/// Audits one series given its detail page URLs
pub async fn audit_details(
    orchestrator: &Orchestrator,
    client: &Client,
    parser: &Arc<RecordParser>,
    series: usize,
    detail_urls: Vec<String>,
) -> Result<AuditReport, ScrapeError> {
    let total = detail_urls.len();
    let incomplete = count_incomplete(orchestrator, client, parser, detail_urls).await?;

    let report = AuditReport {
        series,
        total,
        incomplete,
    };
    tracing::info!(
        "Series {}: {}/{} incomplete records (error rate {:.4})",
        series,
        incomplete,
        total,
        report.error_rate()
    );

    Ok(report)
}
