//! Web-Walker: a concurrent, depth-bounded link walker
//!
//! This crate walks a link graph starting from a seed URL. Every discovered
//! link is fetched in its own task, each URL is fetched at most once per walk,
//! and the walk returns only after every spawned task has finished.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;

use thiserror::Error;

/// Main error type for Web-Walker setup operations
#[derive(Debug, Error)]
pub enum WalkerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors produced by a [`crawler::Fetcher`]
///
/// A fetch error never aborts a walk: it is reported by the step that hit it
/// and that branch stops there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("not found: {url}")]
    NotFound { url: String },

    #[error("fetch failed for {url}: {reason}")]
    Failed { url: String, reason: String },
}

impl FetchError {
    /// The URL whose fetch failed
    pub fn url(&self) -> &str {
        match self {
            Self::NotFound { url } | Self::Failed { url, .. } => url,
        }
    }
}

/// Result type alias for Web-Walker operations
pub type Result<T> = std::result::Result<T, WalkerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, Coordinator, FetchResult, Fetcher, StaticFetcher};
pub use output::{CrawlStats, Reporter};
pub use state::StepState;
