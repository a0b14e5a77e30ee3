//! Integration tests for the walker
//!
//! These tests load site maps through the config layer and run full walks
//! end-to-end through the public API.

use std::collections::HashSet;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tempfile::NamedTempFile;
use web_walker::config::{load_config, Config};
use web_walker::crawler::{crawl, Coordinator, CountingFetcher, StaticFetcher};
use web_walker::output::{CrawlEvent, MemoryReporter};
use web_walker::FetchError;

/// Writes a TOML site map to a temp file
fn create_temp_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    file.flush().expect("Failed to flush config");
    file
}

/// Runs the walk described by `config` and returns the fetcher and reporter
async fn run_config(
    config: &Config,
) -> (Arc<CountingFetcher<StaticFetcher>>, Arc<MemoryReporter>) {
    let fetcher = StaticFetcher::from_pages(&config.pages)
        .with_latency(Duration::from_millis(config.crawler.fetch_latency_ms));
    let fetcher = Arc::new(CountingFetcher::new(fetcher));
    let reporter = Arc::new(MemoryReporter::new());

    Coordinator::new(fetcher.clone())
        .with_reporter(reporter.clone())
        .run(&config.crawler.seed, config.crawler.max_depth)
        .await;

    (fetcher, reporter)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_sample_walk_end_to_end() {
    let (fetcher, reporter) = run_config(&Config::sample()).await;

    let fetched: HashSet<String> = fetcher.counts().into_keys().collect();
    let expected: HashSet<String> = [
        "https://golang.org/",
        "https://golang.org/pkg/",
        "https://golang.org/cmd/",
        "https://golang.org/pkg/fmt/",
        "https://golang.org/pkg/os/",
    ]
    .iter()
    .map(|u| u.to_string())
    .collect();

    assert_eq!(fetched, expected);
    assert!(fetcher.counts().values().all(|count| *count == 1));
    assert_eq!(
        reporter.errors(),
        vec![FetchError::NotFound {
            url: "https://golang.org/cmd/".to_string()
        }]
    );
    assert_eq!(reporter.body_of("https://golang.org/pkg/").as_deref(), Some("Packages"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_cycle_from_config_file() {
    let file = create_temp_config(
        r#"
[crawler]
seed = "A"
max-depth = 10
fetch-latency-ms = 1

[[page]]
url = "A"
body = "Page A"
links = ["B"]

[[page]]
url = "B"
body = "Page B"
links = ["A"]
"#,
    );
    let config = load_config(file.path()).expect("Failed to load config");

    let (fetcher, reporter) = run_config(&config).await;

    assert_eq!(fetcher.count("A"), 1);
    assert_eq!(fetcher.count("B"), 1);
    assert_eq!(fetcher.total(), 2);
    assert!(reporter.errors().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_diamond_shared_child_fetched_once() {
    // Two parents discover the same child at the same time
    let file = create_temp_config(
        r#"
[crawler]
seed = "root"
max-depth = 3
fetch-latency-ms = 5

[[page]]
url = "root"
body = "root"
links = ["left", "right"]

[[page]]
url = "left"
body = "left"
links = ["shared"]

[[page]]
url = "right"
body = "right"
links = ["shared"]

[[page]]
url = "shared"
body = "shared"
"#,
    );
    let config = load_config(file.path()).expect("Failed to load config");

    let (fetcher, reporter) = run_config(&config).await;

    assert_eq!(fetcher.count("shared"), 1);
    assert_eq!(reporter.found_urls().len(), 4);

    let found_events = reporter
        .events()
        .into_iter()
        .filter(|e| matches!(e, CrawlEvent::Found { url, .. } if url == "shared"))
        .count();
    assert_eq!(found_events, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_unknown_seed_reports_error_and_returns() {
    let mut config = Config::sample();
    config.crawler.seed = "https://unknown/".to_string();

    let (fetcher, reporter) = run_config(&config).await;

    assert_eq!(fetcher.total(), 1);
    assert_eq!(reporter.errors().len(), 1);
    assert_eq!(
        reporter.errors()[0].to_string(),
        "not found: https://unknown/"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_depth_zero_and_one() {
    let mut config = Config::sample();

    config.crawler.max_depth = 0;
    let (fetcher, _) = run_config(&config).await;
    assert_eq!(fetcher.total(), 0);

    config.crawler.max_depth = 1;
    let (fetcher, reporter) = run_config(&config).await;
    assert_eq!(fetcher.total(), 1);
    assert_eq!(
        reporter.body_of("https://golang.org/").as_deref(),
        Some("The Go Programming Language")
    );
}

#[tokio::test]
async fn test_crawl_prints_and_returns() {
    let fetcher = Arc::new(CountingFetcher::new(StaticFetcher::sample()));

    crawl("https://golang.org/", 4, fetcher.clone()).await;

    assert_eq!(fetcher.total(), 5);
}
