use quote_scraper::config::Config;
use quote_scraper::crawler::{HttpPageFetcher, StopReason};
use quote_scraper::output::{
    read_quotes_csv, ChartRenderer, OutputResult, QuoteReport, TerminalBarChart,
};
use quote_scraper::pipeline::run_pipeline;
use quote_scraper::{QuoteRecord, ScrapeError};
use std::cell::RefCell;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Keeps every report it is asked to render
#[derive(Default)]
struct RecordingRenderer {
    reports: RefCell<Vec<QuoteReport>>,
}

impl ChartRenderer for RecordingRenderer {
    fn render(&self, report: &QuoteReport) -> OutputResult<()> {
        self.reports.borrow_mut().push(report.clone());
        Ok(())
    }
}

/// Creates a test configuration scraping `base_url` into `dir`
fn create_test_config(base_url: &str, dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.scraper.base_url = base_url.to_string();
    config.scraper.user_agent = "TestBot/1.0".to_string();
    config.scraper.request_timeout_secs = Some(5);
    config.output.csv_path = dir
        .path()
        .join("quotes.csv")
        .to_string_lossy()
        .into_owned();
    config
}

/// Renders a listing page in the quotes.toscrape.com layout
fn listing_page(page: u32, count: usize) -> String {
    let quotes: String = (0..count)
        .map(|i| {
            format!(
                r#"<div class="quote" itemscope itemtype="http://schema.org/CreativeWork">
                    <span class="text" itemprop="text">Quote {i} of page {page}.</span>
                    <span>by <small class="author" itemprop="author">Author {a}</small>
                    <a href="/author/x">(about)</a></span>
                    <div class="tags">Tags:
                        <a class="tag" href="/tag/common/page/1/">common</a>
                        <a class="tag" href="/tag/p{page}/page/1/">p{page}</a>
                    </div>
                </div>"#,
                a = i % 4
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html><html lang="en"><head><title>Quotes to Scrape</title></head>
        <body><div class="container"><div class="row"><div class="col-md-8">{quotes}
        {no_quotes}</div></div></div></body></html>"#,
        no_quotes = if count == 0 { "No quotes found!" } else { "" }
    )
}

async fn mount_page(server: &MockServer, page: u32, body: String, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/page/{}/", page)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_two_pages_then_empty() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_page(&mock_server, 1, listing_page(1, 10), 1).await;
    mount_page(&mock_server, 2, listing_page(2, 3), 1).await;
    mount_page(&mock_server, 3, listing_page(3, 0), 1).await;
    // Must never be requested
    mount_page(&mock_server, 4, listing_page(4, 5), 0).await;

    let config = create_test_config(&format!("{}/", mock_server.uri()), &dir);
    let fetcher = HttpPageFetcher::new(&config.scraper).expect("Failed to create fetcher");
    let renderer = RecordingRenderer::default();

    let result = run_pipeline(&fetcher, &config, None, Some(&renderer))
        .await
        .expect("Pipeline failed");

    assert_eq!(result.records.len(), 13);
    assert_eq!(result.pages_fetched, 3);
    assert_eq!(result.pages_with_quotes, 2);
    assert_eq!(result.stop_reason, StopReason::EmptyPage { page: 3 });

    // Page order, then document order
    assert_eq!(result.records[0].text, "Quote 0 of page 1.");
    assert_eq!(result.records[9].text, "Quote 9 of page 1.");
    assert_eq!(result.records[10].text, "Quote 0 of page 2.");
    assert_eq!(result.records[10].tags, "common, p2");

    let written = read_quotes_csv(Path::new(&config.output.csv_path)).unwrap();
    assert_eq!(written, result.records);

    let reports = renderer.reports.borrow();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].top_tags[0], ("common".to_string(), 13));
    assert_eq!(reports[0].top_tags[1], ("p1".to_string(), 10));
    assert_eq!(reports[0].top_authors[0], ("Author 0".to_string(), 4));
}

#[tokio::test]
async fn test_first_page_transport_error() {
    // Reserve a port and release it so nothing is listening there
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let dir = TempDir::new().unwrap();
    let config = create_test_config(&format!("http://127.0.0.1:{}/", port), &dir);
    let fetcher = HttpPageFetcher::new(&config.scraper).unwrap();
    let renderer = RecordingRenderer::default();

    let result = run_pipeline(&fetcher, &config, None, Some(&renderer))
        .await
        .expect("Fetch failures must not be errors");

    assert!(result.records.is_empty());
    assert_eq!(result.stop_reason, StopReason::FetchFailed { page: 1 });

    let csv = std::fs::read_to_string(&config.output.csv_path).unwrap();
    assert_eq!(csv, "quote,author,tags\r\n");

    // Empty aggregates still render
    let reports = renderer.reports.borrow();
    let report = &reports[0];
    assert!(report.is_empty());
    let mut buffer = Vec::new();
    TerminalBarChart::default()
        .render_to(report, &mut buffer)
        .unwrap();
    assert!(String::from_utf8(buffer).unwrap().contains("(no data)"));
}

#[tokio::test]
async fn test_http_error_ends_pagination() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_page(&mock_server, 1, listing_page(1, 4), 1).await;
    Mock::given(method("GET"))
        .and(path("/page/2/"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, 3, listing_page(3, 4), 0).await;

    let config = create_test_config(&format!("{}/", mock_server.uri()), &dir);
    let fetcher = HttpPageFetcher::new(&config.scraper).unwrap();

    let result = run_pipeline(&fetcher, &config, None, None).await.unwrap();

    assert_eq!(result.records.len(), 4);
    assert_eq!(result.stop_reason, StopReason::FetchFailed { page: 2 });
    assert_eq!(
        read_quotes_csv(Path::new(&config.output.csv_path))
            .unwrap()
            .len(),
        4
    );
}

#[tokio::test]
async fn test_non_ascii_is_stripped_before_saving() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    let page = r#"<html><body>
        <div class="quote">
            <span class="text">“The world as we have created it is a process of our thinking.”</span>
            <small class="author">Albert Einstein</small>
            <a class="tag">change</a><a class="tag">deep-thoughts</a>
        </div>
        <div class="quote">
            <span class="text">“A lady’s imagination is very rapid.”</span>
            <small class="author">Jane Austen</small>
        </div>
    </body></html>"#;
    mount_page(&mock_server, 1, page.to_string(), 1).await;
    mount_page(&mock_server, 2, listing_page(2, 0), 1).await;

    let config = create_test_config(&format!("{}/", mock_server.uri()), &dir);
    let fetcher = HttpPageFetcher::new(&config.scraper).unwrap();

    run_pipeline(&fetcher, &config, None, None).await.unwrap();

    let written = read_quotes_csv(Path::new(&config.output.csv_path)).unwrap();
    assert_eq!(
        written,
        vec![
            QuoteRecord::new(
                "The world as we have created it is a process of our thinking.",
                "Albert Einstein",
                ["change", "deep-thoughts"],
            ),
            QuoteRecord::new(
                "A ladys imagination is very rapid.",
                "Jane Austen",
                Vec::<&str>::new(),
            ),
        ]
    );
}

#[tokio::test]
async fn test_changed_markup_aborts_without_output() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_page(&mock_server, 1, listing_page(1, 2), 1).await;
    mount_page(
        &mock_server,
        2,
        r#"<div class="quote"><p class="quote-body">moved</p></div>"#.to_string(),
        1,
    )
    .await;

    let config = create_test_config(&format!("{}/", mock_server.uri()), &dir);
    let fetcher = HttpPageFetcher::new(&config.scraper).unwrap();

    let result = run_pipeline(&fetcher, &config, None, None).await;

    assert!(matches!(
        result,
        Err(ScrapeError::MissingElement { page: 2, index: 0, .. })
    ));
    assert!(!Path::new(&config.output.csv_path).exists());
}

#[tokio::test]
async fn test_base_url_without_trailing_slash() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/archive/page/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(1, 1)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&format!("{}/archive", mock_server.uri()), &dir);
    let fetcher = HttpPageFetcher::new(&config.scraper).unwrap();

    let result = run_pipeline(&fetcher, &config, None, None).await.unwrap();

    // Page 2 is unmatched, so wiremock answers 404
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.stop_reason, StopReason::FetchFailed { page: 2 });
}
