use serde::Deserialize;

/// Main configuration structure for Web-Walker
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(default, rename = "page")]
    pub pages: Vec<PageEntry>,
}

/// Walk behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// URL the walk starts from
    pub seed: String,

    /// Maximum depth to walk from the seed (the seed itself needs depth >= 1)
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Simulated latency for every canned fetch (milliseconds)
    #[serde(rename = "fetch-latency-ms", default)]
    pub fetch_latency_ms: u64,
}

/// One canned page of the site map
#[derive(Debug, Clone, Deserialize)]
pub struct PageEntry {
    /// URL the page is served under
    pub url: String,

    /// Page body
    pub body: String,

    /// URLs this page links to, in document order
    #[serde(default)]
    pub links: Vec<String>,
}

impl PageEntry {
    fn new(url: &str, body: &str, links: &[&str]) -> Self {
        Self {
            url: url.to_string(),
            body: body.to_string(),
            links: links.iter().map(|l| l.to_string()).collect(),
        }
    }
}

impl Config {
    /// The built-in sample site map, walked from `https://golang.org/` to depth 4
    ///
    /// `https://golang.org/cmd/` is linked but deliberately absent, so a walk
    /// over the sample always exercises the not-found path.
    pub fn sample() -> Self {
        Self {
            crawler: CrawlerConfig {
                seed: "https://golang.org/".to_string(),
                max_depth: 4,
                fetch_latency_ms: 0,
            },
            pages: vec![
                PageEntry::new(
                    "https://golang.org/",
                    "The Go Programming Language",
                    &["https://golang.org/pkg/", "https://golang.org/cmd/"],
                ),
                PageEntry::new(
                    "https://golang.org/pkg/",
                    "Packages",
                    &[
                        "https://golang.org/",
                        "https://golang.org/cmd/",
                        "https://golang.org/pkg/fmt/",
                        "https://golang.org/pkg/os/",
                    ],
                ),
                PageEntry::new(
                    "https://golang.org/pkg/fmt/",
                    "Package fmt",
                    &["https://golang.org/", "https://golang.org/pkg/"],
                ),
                PageEntry::new(
                    "https://golang.org/pkg/os/",
                    "Package os",
                    &["https://golang.org/", "https://golang.org/pkg/"],
                ),
            ],
        }
    }
}
