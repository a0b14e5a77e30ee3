//! In-memory reporter
//!
//! Keeps every event in arrival order so callers can inspect a finished walk.

use crate::output::traits::{CrawlEvent, Reporter};
use crate::state::StepState;
use crate::FetchError;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

/// Reporter that records events instead of printing them
#[derive(Debug, Default)]
pub struct MemoryReporter {
    events: Mutex<Vec<CrawlEvent>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, in the order they were reported
    pub fn events(&self) -> Vec<CrawlEvent> {
        self.lock().clone()
    }

    /// URLs that were fetched successfully
    pub fn found_urls(&self) -> HashSet<String> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                CrawlEvent::Found { url, .. } => Some(url.clone()),
                _ => None,
            })
            .collect()
    }

    /// Body reported for `url`, if it was found
    pub fn body_of(&self, url: &str) -> Option<String> {
        self.lock().iter().find_map(|event| match event {
            CrawlEvent::Found { url: u, body } if u == url => Some(body.clone()),
            _ => None,
        })
    }

    /// Fetch errors, in the order they were reported
    pub fn errors(&self) -> Vec<FetchError> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                CrawlEvent::Error(error) => Some(error.clone()),
                _ => None,
            })
            .collect()
    }

    /// URLs the fetcher was asked for, successfully or not
    pub fn fetched_urls(&self) -> HashSet<String> {
        self.lock()
            .iter()
            .filter(|event| !matches!(event, CrawlEvent::Skipped { .. }))
            .map(|event| event.url().to_string())
            .collect()
    }

    /// Number of skipped steps with the given state
    pub fn skip_count(&self, state: StepState) -> usize {
        self.lock()
            .iter()
            .filter(|event| matches!(event, CrawlEvent::Skipped { state: s, .. } if *s == state))
            .count()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CrawlEvent>> {
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Reporter for MemoryReporter {
    fn record_found(&self, url: &str, body: &str) {
        self.lock().push(CrawlEvent::Found {
            url: url.to_string(),
            body: body.to_string(),
        });
    }

    fn record_error(&self, error: &FetchError) {
        self.lock().push(CrawlEvent::Error(error.clone()));
    }

    fn record_skip(&self, url: &str, depth: u32, state: StepState) {
        self.lock().push(CrawlEvent::Skipped {
            url: url.to_string(),
            depth,
            state,
        });
    }
}
