use scp_scraper::config::{Config, CrawlerConfig, SiteConfig, UserAgentConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Records per series in the fake wiki
pub const RECORDS_PER_SERIES: u64 = 3;

/// Creates a configuration pointing at the mock server
pub fn create_test_config(base_url: &str) -> Config {
    Config {
        site: SiteConfig {
            base_url: base_url.to_string(),
            ..SiteConfig::default()
        },
        crawler: CrawlerConfig {
            guard_interval: 1, // Very short for testing
            records_per_series: RECORDS_PER_SERIES,
            request_timeout: 5,
            https_only: false,
        },
        user_agent: UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0.0".to_string(),
        },
    }
}

/// Builds a detail page from its labeled paragraphs
pub fn detail_page(paragraphs: &[&str]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|p| match p.split_once(": ") {
            Some((label, value)) => format!("<p><strong>{}:</strong> {}</p>\n", label, value),
            None => format!("<p>{}</p>\n", p),
        })
        .collect();

    format!(
        r#"<html><head><title>SCP</title></head><body>
        <div id="page-content">
        {}
        <p>&laquo; <a href="/scp-series">Back</a></p>
        </div>
        </body></html>"#,
        body
    )
}

/// Builds an index page listing the given hrefs
pub fn index_page(hrefs: &[&str]) -> String {
    let links: String = hrefs
        .iter()
        .map(|href| format!("<li><a href=\"{}\">{}</a></li>\n", href, href))
        .collect();

    format!(
        r#"<html><body>
        <a href="/main">Main</a>
        <a href="/system:join">Join</a>
        <ul>{}</ul>
        <a href="https://www.wikidot.com">Wikidot</a>
        </body></html>"#,
        links
    )
}

/// Mounts an HTML page at `route`
pub async fn mount_page(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(html, "text/html"))
        .mount(server)
        .await;
}

/// Mounts an HTTP error at `route`
pub async fn mount_error(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Mounts the wiki root and both series index pages
///
/// Series 1 lists SCP-001..003, series 2 lists SCP-004..005.
pub async fn mount_index_pages(server: &MockServer) {
    mount_page(
        server,
        "/",
        index_page(&["/scp-series", "/scp-series-2", "/scp-001-jokes"]),
    )
    .await;
    mount_page(
        server,
        "/scp-series",
        index_page(&["/scp-001", "/scp-002", "/scp-003", "/scp-series-2"]),
    )
    .await;
    mount_page(server, "/scp-series-2", index_page(&["/scp-004", "/scp-005"])).await;
}

/// Mounts detail pages for SCP-001..005
///
/// SCP-002 has no object class line; every other page is complete.
pub async fn mount_detail_pages(server: &MockServer) {
    mount_page(server, "/scp-001", complete_page(1, "Safe")).await;
    mount_page(
        server,
        "/scp-002",
        detail_page(&[
            "Item #: SCP-002",
            "Special Containment Procedures: Sealed room",
            "Description: A fleshy pod",
        ]),
    )
    .await;
    mount_page(server, "/scp-003", complete_page(3, "Euclid")).await;
    mount_page(server, "/scp-004", complete_page(4, "Keter")).await;
    mount_page(server, "/scp-005", complete_page(5, "Safe")).await;
}

fn complete_page(number: u64, class: &str) -> String {
    let item = format!("Item #: SCP-{:03}", number);
    let object_class = format!("Object Class: {}", class);
    detail_page(&[
        item.as_str(),
        object_class.as_str(),
        "Special Containment Procedures: Kept in a locked container",
        "Description: A concrete statue",
    ])
}

/// Starts a mock server serving the whole fake wiki
pub async fn start_wiki() -> MockServer {
    let server = MockServer::start().await;
    mount_index_pages(&server).await;
    mount_detail_pages(&server).await;
    server
}
