//! Console reporter
//!
//! Prints discoveries and fetch errors to stdout, one line each. Skipped steps
//! only go to the debug log.

use crate::output::traits::Reporter;
use crate::state::StepState;
use crate::FetchError;

/// Reporter that writes walk events to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

/// Formats the line printed for a fetched page
pub fn format_found(url: &str, body: &str) -> String {
    format!("found: {} {:?}", url, body)
}

impl Reporter for ConsoleReporter {
    fn record_found(&self, url: &str, body: &str) {
        println!("{}", format_found(url, body));
    }

    fn record_error(&self, error: &FetchError) {
        println!("{}", error);
    }

    fn record_skip(&self, url: &str, depth: u32, state: StepState) {
        tracing::debug!("Skipped {} at depth {}: {}", url, depth, state);
    }
}
