//! Reporter trait and event types
//!
//! A reporter receives everything a walk makes observable: each fetched page,
//! each fetch error, and each step that ended without fetching.

use crate::state::StepState;
use crate::FetchError;

/// One observable walk event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlEvent {
    /// A URL was fetched successfully
    Found { url: String, body: String },

    /// A URL could not be fetched
    Error(FetchError),

    /// A step ended without fetching (depth exhausted or already visited)
    Skipped {
        url: String,
        depth: u32,
        state: StepState,
    },
}

impl CrawlEvent {
    /// URL the event is about
    pub fn url(&self) -> &str {
        match self {
            Self::Found { url, .. } | Self::Skipped { url, .. } => url,
            Self::Error(error) => error.url(),
        }
    }
}

/// Trait for walk reporters
///
/// Reporters are shared by every walk task, so implementations must be
/// thread-safe. Calls from sibling steps arrive in no particular order.
pub trait Reporter: Send + Sync {
    /// Records a successfully fetched page
    ///
    /// # Arguments
    ///
    /// * `url` - The fetched URL
    /// * `body` - The page body
    fn record_found(&self, url: &str, body: &str);

    /// Records a failed fetch
    ///
    /// # Arguments
    ///
    /// * `error` - The error returned by the fetcher
    fn record_error(&self, error: &FetchError);

    /// Records a step that ended without fetching
    ///
    /// Ignored by default.
    fn record_skip(&self, _url: &str, _depth: u32, _state: StepState) {}
}
