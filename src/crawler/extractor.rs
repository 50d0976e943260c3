//! Record extraction from detail pages
//!
//! A detail page is reduced to its paragraphs, and every paragraph is tested
//! against four labeled-line patterns independently. A paragraph that matches
//! a label and parses cleanly overwrites that field; one that matches but does
//! not parse is logged and leaves the field as it was. Nothing short of a
//! failed fetch makes extraction fail.

use crate::config::compile_pattern;
use crate::crawler::fetcher::fetch_page;
use crate::crawler::parser::extract_paragraphs;
use crate::record::{ObjectClass, Record};
use crate::{ConfigError, ScrapeError};
use regex::Regex;
use reqwest::Client;

const IDENTIFIER_LINE: &str = "^Item #: [A-Za-z]*[0-9]*";
const OBJECT_CLASS_LINE: &str = "^Object Class: [A-Za-z]*";
const CONTAINMENT_LINE: &str = "^Special Containment Procedures: [A-Za-z]*";
const DESCRIPTION_LINE: &str = "^Description: [A-Za-z]*";

/// Separator between a label and its value
const LABEL_SEPARATOR: &str = ": ";

/// Matches labeled paragraphs and folds them into a [`Record`]
#[derive(Debug, Clone)]
pub struct RecordParser {
    identifier: Regex,
    object_class: Regex,
    containment: Regex,
    description: Regex,
    delimiter: String,
}

impl RecordParser {
    /// Creates a parser splitting the item line on `delimiter` (e.g. `"SCP-"`)
    pub fn new(delimiter: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            identifier: compile_pattern("identifier_line", IDENTIFIER_LINE)?,
            object_class: compile_pattern("object_class_line", OBJECT_CLASS_LINE)?,
            containment: compile_pattern("containment_line", CONTAINMENT_LINE)?,
            description: compile_pattern("description_line", DESCRIPTION_LINE)?,
            delimiter: delimiter.to_string(),
        })
    }

    /// Builds a record for `url` from a page's paragraphs
    pub fn parse_blocks<I, S>(&self, url: &str, blocks: I) -> Record
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut record = Record::new(url);
        for block in blocks {
            self.apply(&mut record, block.as_ref());
        }
        record
    }

    /// Tests one paragraph against every field pattern and updates `record`
    ///
    /// Fields are only ever replaced by a successfully parsed value, so a
    /// malformed repeat of a label never resets an earlier match.
    pub fn apply(&self, record: &mut Record, text: &str) {
        if self.identifier.is_match(text) {
            tracing::trace!("Identifier line on {}: {}", record.url, text);
            match parse_identifier(text, &self.delimiter) {
                Some(identifier) => record.identifier = identifier,
                None => tracing::warn!("Unable to parse item number from '{}' ({})", text, record.url),
            }
        }

        if self.object_class.is_match(text) {
            tracing::trace!("Object class line on {}: {}", record.url, text);
            match parse_object_class(text) {
                ObjectClass::Undefined => tracing::warn!(
                    "Unable to parse object class for SCP-{} from '{}'",
                    record.identifier,
                    text
                ),
                class => record.object_class = class,
            }
        }

        if self.containment.is_match(text) {
            match labeled_value(text) {
                Some(value) => record.containment = value.to_string(),
                None => tracing::debug!("Malformed containment line on {}", record.url),
            }
        }

        if self.description.is_match(text) {
            match labeled_value(text) {
                Some(value) => record.description = value.to_string(),
                None => tracing::debug!("Malformed description line on {}", record.url),
            }
        }
    }
}

/// Extracts the item number following `delimiter`
///
/// The line must split into exactly two parts and the second must be a
/// positive integer.
pub fn parse_identifier(line: &str, delimiter: &str) -> Option<u64> {
    let parts: Vec<&str> = line.split(delimiter).collect();
    if parts.len() != 2 {
        return None;
    }

    parts[1].trim().parse::<u64>().ok().filter(|n| *n > 0)
}

/// Maps an `"Object Class: <label>"` line to its classification
pub fn parse_object_class(line: &str) -> ObjectClass {
    match labeled_value(line) {
        Some(label) => ObjectClass::from_label(label.trim()),
        None => ObjectClass::Undefined,
    }
}

/// Returns the value of a `"Label: value"` line
///
/// Lines containing the separator more or less than once have no value.
fn labeled_value(line: &str) -> Option<&str> {
    let mut parts = line.split(LABEL_SEPARATOR);
    let _label = parts.next()?;
    let value = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some(value)
}

/// Fetches a detail page and extracts its record
///
/// Only a failed fetch is an error. Missing or malformed fields leave their
/// sentinel values in place.
pub async fn extract_record(
    client: &Client,
    parser: &RecordParser,
    url: &str,
) -> Result<Record, ScrapeError> {
    let body = fetch_page(client, url).await?;
    let record = parser.parse_blocks(url, extract_paragraphs(&body));

    if record.is_incomplete() {
        tracing::debug!("Incomplete record extracted from {}", url);
    }

    Ok(record)
}
