//! Output module for walk events and statistics
//!
//! This module handles:
//! - Printing discoveries and fetch errors as they happen
//! - Recording events in memory for inspection after a walk
//! - Counting step outcomes and printing walk statistics

mod console;
mod memory;
pub mod stats;
mod traits;

pub use console::{format_found, ConsoleReporter};
pub use memory::MemoryReporter;
pub use stats::{print_statistics, CrawlStats, StepCounters};
pub use traits::{CrawlEvent, Reporter};
