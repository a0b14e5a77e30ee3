//! Configuration module for Web-Walker
//!
//! This module handles loading, parsing, and validating TOML configuration files
//! that describe a walk (seed and depth) and the canned site map it runs over.
//!
//! # Example
//!
//! ```no_run
//! use web_walker::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("site.toml")).unwrap();
//! println!("Walker will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, PageEntry};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::{validate, MAX_DEPTH_LIMIT};
