//! Crawler module for page fetching and record extraction
//!
//! This module contains the crawl-and-extract pipeline, including:
//! - HTTP fetching
//! - HTML traversal for links and paragraphs
//! - Series discovery and detail link enumeration
//! - Per-page record extraction
//! - Concurrent fan-out with a launch guard interval
//! - Per-series error-rate audits

mod audit;
mod extractor;
mod fetcher;
mod links;
mod orchestrator;
mod parser;
mod scraper;

pub use audit::{audit_details, count_incomplete, AuditReport};
pub use extractor::{extract_record, parse_identifier, parse_object_class, RecordParser};
pub use fetcher::{build_http_client, fetch_page};
pub use links::{collect_links, discover_series, enumerate_details, LinkPatterns};
pub use orchestrator::{all_or_first_error, Orchestrator};
pub use parser::{extract_hrefs, extract_paragraphs, qualify_link};
pub use scraper::{Scraper, MAX_RANGE_LEN};
