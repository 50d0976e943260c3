//! HTML parser for index and detail pages
//!
//! This module handles the two traversals the scraper needs:
//! - Raw `href` targets of every `<a>` element, in document order
//! - Text of every `<p>` element, in document order
//!
//! Hrefs are returned exactly as written so that link patterns anchored at
//! the start of the string see root-relative paths like `/scp-173`.

use scraper::{Html, Selector};

/// Returns the `href` of every anchor in the document, in document order
///
/// Duplicates are kept.
///
/// # Example
///
/// ```
/// use scp_scraper::crawler::extract_hrefs;
///
/// let html = r#"<body><a href="/scp-001">1</a><a href="/scp-002">2</a></body>"#;
/// assert_eq!(extract_hrefs(html), vec!["/scp-001", "/scp-002"]);
/// ```
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

/// Returns the text of every paragraph in the document, in document order
///
/// Text of nested inline elements (`<strong>`, `<em>`, links) is concatenated
/// into the paragraph text.
pub fn extract_paragraphs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("p") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .collect()
}

/// Prefixes a root-relative href with the site base URL
///
/// Absolute hrefs are returned unchanged.
pub fn qualify_link(base_url: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }

    let base = base_url.trim_end_matches('/');
    if href.starts_with('/') {
        format!("{}{}", base, href)
    } else {
        format!("{}/{}", base, href)
    }
}
