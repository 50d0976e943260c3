use crate::common::{
    create_test_config, detail_page, index_page, mount_error, mount_index_pages, mount_page,
    start_wiki,
};
use scp_scraper::crawler::{collect_links, LinkPatterns};
use scp_scraper::{ObjectClass, Record, ScrapeError, Scraper};
use wiremock::MockServer;

fn scraper_for(server: &MockServer) -> Scraper {
    Scraper::new(create_test_config(&server.uri())).expect("Failed to create scraper")
}

fn sorted_identifiers(records: &[Record]) -> Vec<u64> {
    let mut ids: Vec<u64> = records.iter().map(|r| r.identifier).collect();
    ids.sort_unstable();
    ids
}

#[tokio::test]
async fn test_collect_links_filters_and_keeps_order() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/listing",
        index_page(&["/scp-010", "/scp-series-3", "/scp-002", "/scp-010"]),
    )
    .await;

    let scraper = scraper_for(&server);
    let patterns = LinkPatterns::from_config(&scraper.config().site).unwrap();
    let client = reqwest::Client::new();

    let links = collect_links(
        &client,
        &format!("{}/listing", server.uri()),
        &patterns.detail,
    )
    .await
    .expect("Failed to collect links");

    // Document order, duplicates kept, series link excluded
    assert_eq!(links, vec!["/scp-010", "/scp-002", "/scp-010"]);
}

#[tokio::test]
async fn test_series_discovery() {
    let server = start_wiki().await;
    let base_url = server.uri();
    let scraper = scraper_for(&server);

    let series = scraper.series().await.expect("Failed to discover series");
    assert_eq!(
        series,
        vec![
            format!("{}/scp-series", base_url),
            format!("{}/scp-series-2", base_url),
        ]
    );
    assert_eq!(scraper.series_count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_series_discovery_is_repeatable() {
    let server = start_wiki().await;
    let scraper = scraper_for(&server);

    let first = scraper.series().await.unwrap();
    let second = scraper.series().await.unwrap();
    assert_eq!(first, second);

    // Nothing is cached between calls
    let root_hits = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == "/")
        .count();
    assert_eq!(root_hits, 2);
}

#[tokio::test]
async fn test_detail_links_are_qualified() {
    let server = start_wiki().await;
    let base_url = server.uri();
    let scraper = scraper_for(&server);

    let details = scraper.detail_links(1).await.expect("Failed to enumerate");
    assert_eq!(
        details,
        vec![
            format!("{}/scp-004", base_url),
            format!("{}/scp-005", base_url),
        ]
    );
}

#[tokio::test]
async fn test_get_single_complete_record() {
    let server = start_wiki().await;
    let scraper = scraper_for(&server);

    let record = scraper.get_record(1).await.expect("Failed to fetch record");
    assert_eq!(
        record,
        Record {
            identifier: 1,
            object_class: ObjectClass::Safe,
            containment: "Kept in a locked container".to_string(),
            description: "A concrete statue".to_string(),
            url: format!("{}/scp-001", server.uri()),
        }
    );
}

#[tokio::test]
async fn test_get_record_in_second_series() {
    let server = start_wiki().await;
    let scraper = scraper_for(&server);

    let record = scraper.get_record(5).await.unwrap();
    assert_eq!(record.identifier, 5);
    assert_eq!(record.url, format!("{}/scp-005", server.uri()));
}

#[tokio::test]
async fn test_missing_class_degrades_to_undefined() {
    let server = start_wiki().await;
    let scraper = scraper_for(&server);

    let record = scraper.get_record(2).await.unwrap();
    assert_eq!(record.identifier, 2);
    assert_eq!(record.object_class, ObjectClass::Undefined);
    assert_eq!(record.containment, "Sealed room");
    assert_eq!(record.description, "A fleshy pod");
    assert!(record.is_incomplete());
}

#[tokio::test]
async fn test_get_record_unknown_series() {
    let server = start_wiki().await;
    let scraper = scraper_for(&server);

    // 7 resolves to the third series, which the wiki does not list
    let result = scraper.get_record(7).await;
    assert!(matches!(
        result,
        Err(ScrapeError::SeriesOutOfRange {
            series: 3,
            available: 2
        })
    ));
}

#[tokio::test]
async fn test_get_record_past_end_of_series() {
    let server = start_wiki().await;
    let scraper = scraper_for(&server);

    // 6 is position 2 of series 2, which only lists two entries
    let result = scraper.get_record(6).await;
    assert!(matches!(
        result,
        Err(ScrapeError::RecordOutOfRange {
            identifier: 6,
            position: 2,
            available: 2
        })
    ));
}

#[tokio::test]
async fn test_get_range_returns_every_record() {
    let server = start_wiki().await;
    let scraper = scraper_for(&server);

    let records = scraper.get_range(1, 6).await.expect("Failed to fetch range");

    assert_eq!(records.len(), 5);
    assert_eq!(sorted_identifiers(&records), vec![1, 2, 3, 4, 5]);
    assert_eq!(records.iter().filter(|r| r.is_incomplete()).count(), 1);
}

#[tokio::test]
async fn test_get_range_end_is_exclusive() {
    let server = start_wiki().await;
    let scraper = scraper_for(&server);

    let records = scraper.get_range(3, 5).await.unwrap();
    assert_eq!(sorted_identifiers(&records), vec![3, 4]);
}

#[tokio::test]
async fn test_get_range_fails_on_any_fetch_error() {
    let server = MockServer::start().await;
    mount_index_pages(&server).await;
    mount_page(
        &server,
        "/scp-001",
        detail_page(&["Item #: SCP-001", "Object Class: Safe"]),
    )
    .await;
    mount_error(&server, "/scp-002", 500).await;
    mount_page(&server, "/scp-003", detail_page(&["Item #: SCP-003"])).await;

    let scraper = scraper_for(&server);
    let result = scraper.get_range(1, 4).await;
    assert!(matches!(result, Err(ScrapeError::Status { status: 500, .. })));
}

#[tokio::test]
async fn test_fetch_records_keeps_partial_results() {
    let server = MockServer::start().await;
    mount_page(&server, "/scp-001", detail_page(&["Item #: SCP-001"])).await;
    mount_error(&server, "/scp-002", 404).await;
    mount_page(&server, "/scp-003", detail_page(&["Item #: SCP-003"])).await;

    let scraper = scraper_for(&server);
    let urls = ["/scp-001", "/scp-002", "/scp-003"]
        .iter()
        .map(|p| format!("{}{}", server.uri(), p))
        .collect();

    let outcomes = scraper.fetch_records(urls).await;
    assert_eq!(outcomes.len(), 3);

    let records: Vec<Record> = outcomes.iter().filter_map(|o| o.as_ref().ok()).cloned().collect();
    assert_eq!(sorted_identifiers(&records), vec![1, 3]);
    assert_eq!(outcomes.iter().filter(|o| o.is_err()).count(), 1);
}

#[tokio::test]
async fn test_audit_series_error_rate() {
    let server = start_wiki().await;
    let scraper = scraper_for(&server);

    let report = scraper.audit_series(1).await.expect("Audit failed");
    assert_eq!(report.series, 1);
    assert_eq!(report.total, 3);
    assert_eq!(report.incomplete, 1);
    assert!((report.error_rate() - 1.0 / 3.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_audit_fully_parsed_series() {
    let server = start_wiki().await;
    let scraper = scraper_for(&server);

    let report = scraper.audit_series(2).await.unwrap();
    assert_eq!(report.total, 2);
    assert_eq!(report.incomplete, 0);
    assert_eq!(report.error_rate(), 0.0);
}

#[tokio::test]
async fn test_audit_denominator_is_series_length() {
    let server = MockServer::start().await;
    mount_page(&server, "/", index_page(&["/scp-series"])).await;
    mount_page(
        &server,
        "/scp-series",
        index_page(&["/scp-001", "/scp-002", "/scp-003", "/scp-004"]),
    )
    .await;
    for n in 1..=4 {
        let item = format!("Item #: SCP-{:03}", n);
        // Only SCP-004 carries a description
        let page = if n == 4 {
            detail_page(&[
                item.as_str(),
                "Object Class: Safe",
                "Special Containment Procedures: None",
                "Description: Harmless",
            ])
        } else {
            detail_page(&[
                item.as_str(),
                "Object Class: Safe",
                "Special Containment Procedures: None",
            ])
        };
        mount_page(&server, &format!("/scp-{:03}", n), page).await;
    }

    let scraper = scraper_for(&server);
    let report = scraper.audit_series(1).await.unwrap();
    assert_eq!(report.incomplete, 3);
    assert_eq!(report.error_rate(), 0.75);
}

#[tokio::test]
async fn test_audit_unknown_series() {
    let server = start_wiki().await;
    let scraper = scraper_for(&server);

    let result = scraper.audit_series(9).await;
    assert!(matches!(
        result,
        Err(ScrapeError::SeriesOutOfRange { series: 9, .. })
    ));
}

#[tokio::test]
async fn test_root_fetch_failure_propagates() {
    let server = MockServer::start().await;
    mount_error(&server, "/", 503).await;

    let scraper = scraper_for(&server);
    assert!(matches!(
        scraper.get_record(1).await,
        Err(ScrapeError::Status { status: 503, .. })
    ));
    assert!(scraper.series_count().await.is_err());
}
