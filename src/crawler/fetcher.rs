//! Fetcher capability and its canned implementations
//!
//! The walker only ever talks to a [`Fetcher`]. This module provides:
//! - `StaticFetcher`, a fixed URL -> page mapping used by the CLI and tests
//! - `CountingFetcher`, a wrapper that records how often each URL was fetched

use crate::config::PageEntry;
use crate::FetchError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Successful outcome of fetching one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// Page body
    pub body: String,
    /// Linked URLs, in the order the page lists them
    pub links: Vec<String>,
}

impl FetchResult {
    pub fn new(body: impl Into<String>, links: Vec<String>) -> Self {
        Self {
            body: body.into(),
            links,
        }
    }
}

/// Capability that resolves a URL to its body and outgoing links
///
/// Implementations are called from many walk tasks at once with no external
/// synchronization, so they must be safe for concurrent use.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchResult, FetchError>;
}

#[async_trait]
impl<F: Fetcher + ?Sized> Fetcher for Arc<F> {
    async fn fetch(&self, url: &str) -> Result<FetchResult, FetchError> {
        (**self).fetch(url).await
    }
}

/// Fetcher backed by a fixed URL -> page mapping
///
/// The same URL always yields the same result. URLs missing from the mapping
/// fail with [`FetchError::NotFound`].
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    pages: HashMap<String, FetchResult>,
    latency: Option<Duration>,
}

impl StaticFetcher {
    /// Creates an empty fetcher; every fetch fails until pages are inserted
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fetcher from configured site map entries
    pub fn from_pages(pages: &[PageEntry]) -> Self {
        let mut fetcher = Self::new();
        for page in pages {
            fetcher.insert(&page.url, &page.body, page.links.clone());
        }
        fetcher
    }

    /// Fetcher over the built-in sample site map
    pub fn sample() -> Self {
        Self::from_pages(&crate::config::Config::sample().pages)
    }

    /// Adds or replaces the page served for `url`
    pub fn insert(&mut self, url: &str, body: &str, links: Vec<String>) {
        self.pages
            .insert(url.to_string(), FetchResult::new(body, links));
    }

    /// Delays every fetch by `latency` to simulate I/O
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = (!latency.is_zero()).then_some(latency);
        self
    }

    /// Number of pages in the mapping
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResult, FetchError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                url: url.to_string(),
            })
    }
}

/// Wraps a fetcher and counts fetches per URL
///
/// Failed fetches are counted too: what matters is how often the underlying
/// fetcher was asked.
#[derive(Debug, Default)]
pub struct CountingFetcher<F> {
    inner: F,
    counts: Mutex<HashMap<String, usize>>,
}

impl<F: Fetcher> CountingFetcher<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            counts: Mutex::new(HashMap::new()),
        }
    }

    /// How many times `url` was fetched
    pub fn count(&self, url: &str) -> usize {
        self.lock_counts().get(url).copied().unwrap_or(0)
    }

    /// Total number of fetches across all URLs
    pub fn total(&self) -> usize {
        self.lock_counts().values().sum()
    }

    /// Snapshot of per-URL fetch counts
    pub fn counts(&self) -> HashMap<String, usize> {
        self.lock_counts().clone()
    }

    fn lock_counts(&self) -> std::sync::MutexGuard<'_, HashMap<String, usize>> {
        self.counts.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl<F: Fetcher> Fetcher for CountingFetcher<F> {
    async fn fetch(&self, url: &str) -> Result<FetchResult, FetchError> {
        *self.lock_counts().entry(url.to_string()).or_insert(0) += 1;
        self.inner.fetch(url).await
    }
}
