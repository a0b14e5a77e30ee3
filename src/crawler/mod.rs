//! Crawler module for concurrent link walking
//!
//! This module contains the core walking logic, including:
//! - The fetcher capability and its canned implementations
//! - The shared visited set with its atomic claim operation
//! - Completion tracking for a dynamically spawned task tree
//! - Overall walk coordination

mod coordinator;
mod fetcher;
mod tracker;
mod visited;

pub use coordinator::{crawl, Coordinator};
pub use fetcher::{CountingFetcher, FetchResult, Fetcher, StaticFetcher};
pub use tracker::{CompletionTracker, StepToken};
pub use visited::VisitedSet;
