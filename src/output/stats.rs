//! Walk statistics
//!
//! Counts how every step of a walk ended. Counters are bumped concurrently by
//! the walk tasks and read once as a `CrawlStats` snapshot when the walk ends.

use crate::state::StepState;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Snapshot of a finished walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Steps that fetched their URL successfully
    pub fetched: u64,

    /// Steps whose fetch failed
    pub fetch_failed: u64,

    /// Steps that found the URL already claimed
    pub already_visited: u64,

    /// Steps that ran out of depth
    pub depth_exhausted: u64,

    /// Child steps spawned by successful fetches
    pub children_spawned: u64,

    /// Wall-clock duration of the walk
    pub elapsed: Duration,
}

impl CrawlStats {
    /// Total number of steps that ran, the seed included
    pub fn total_steps(&self) -> u64 {
        self.fetched + self.fetch_failed + self.already_visited + self.depth_exhausted
    }

    /// Number of calls made to the fetcher
    pub fn fetch_attempts(&self) -> u64 {
        self.fetched + self.fetch_failed
    }

    /// Returns the fetch success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        let attempts = self.fetch_attempts();
        if attempts == 0 {
            return 0.0;
        }
        (self.fetched as f64 / attempts as f64) * 100.0
    }
}

/// Concurrent step counters for one walk
#[derive(Debug, Default)]
pub struct StepCounters {
    fetched: AtomicU64,
    fetch_failed: AtomicU64,
    already_visited: AtomicU64,
    depth_exhausted: AtomicU64,
    children_spawned: AtomicU64,
}

impl StepCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the terminal state of one step
    pub fn record(&self, state: StepState) {
        let counter = match state {
            StepState::Pending => return,
            StepState::DepthExhausted => &self.depth_exhausted,
            StepState::AlreadyVisited => &self.already_visited,
            StepState::FetchFailed => &self.fetch_failed,
            StepState::Fetched { children } => {
                self.children_spawned
                    .fetch_add(children as u64, Ordering::Relaxed);
                &self.fetched
            }
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Takes a snapshot of the counters
    pub fn snapshot(&self, elapsed: Duration) -> CrawlStats {
        CrawlStats {
            fetched: self.fetched.load(Ordering::Relaxed),
            fetch_failed: self.fetch_failed.load(Ordering::Relaxed),
            already_visited: self.already_visited.load(Ordering::Relaxed),
            depth_exhausted: self.depth_exhausted.load(Ordering::Relaxed),
            children_spawned: self.children_spawned.load(Ordering::Relaxed),
            elapsed,
        }
    }
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &CrawlStats) {
    println!("=== Walk Statistics ===\n");

    println!("Steps by Outcome:");
    println!("  Fetched: {}", stats.fetched);
    println!("  Fetch failed: {}", stats.fetch_failed);
    println!("  Already visited: {}", stats.already_visited);
    println!("  Depth exhausted: {}", stats.depth_exhausted);
    println!("  Total steps: {}", stats.total_steps());
    println!();

    println!("Children spawned: {}", stats.children_spawned);
    println!("Elapsed: {:.3}s", stats.elapsed.as_secs_f64());
    println!(
        "Success Rate: {:.1}% ({} / {} fetches succeeded)",
        stats.success_rate(),
        stats.fetched,
        stats.fetch_attempts()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_record_each_state() {
        let counters = StepCounters::new();
        counters.record(StepState::Fetched { children: 2 });
        counters.record(StepState::Fetched { children: 4 });
        counters.record(StepState::FetchFailed);
        counters.record(StepState::AlreadyVisited);
        counters.record(StepState::DepthExhausted);
        counters.record(StepState::DepthExhausted);
        counters.record(StepState::Pending);

        let stats = counters.snapshot(Duration::from_millis(5));
        assert_eq!(stats.fetched, 2);
        assert_eq!(stats.fetch_failed, 1);
        assert_eq!(stats.already_visited, 1);
        assert_eq!(stats.depth_exhausted, 2);
        assert_eq!(stats.children_spawned, 6);
        assert_eq!(stats.total_steps(), 6);
        assert_eq!(stats.elapsed, Duration::from_millis(5));
    }

    #[test]
    fn test_success_rate() {
        let stats = CrawlStats {
            fetched: 4,
            fetch_failed: 1,
            ..Default::default()
        };
        assert!((stats.success_rate() - 80.0).abs() < 0.01);
        assert_eq!(stats.fetch_attempts(), 5);
    }

    #[test]
    fn test_success_rate_zero_fetches() {
        let stats = CrawlStats::default();
        assert_eq!(stats.success_rate(), 0.0);
    }
}
