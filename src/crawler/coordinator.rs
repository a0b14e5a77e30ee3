//! Walk coordinator - concurrent, depth-bounded, deduplicated traversal
//!
//! Every step runs in its own tokio task. A step:
//! 1. Stops if its remaining depth is zero
//! 2. Claims its URL in the shared visited set, stopping if another step got there first
//! 3. Fetches the URL and reports the page (or the error)
//! 4. Spawns one child step per link at `depth - 1`
//!
//! The walk returns once the completion tracker sees every step finish.

use crate::crawler::fetcher::Fetcher;
use crate::crawler::tracker::CompletionTracker;
use crate::crawler::visited::VisitedSet;
use crate::output::{ConsoleReporter, CrawlStats, Reporter, StepCounters};
use crate::state::StepState;
use std::sync::Arc;
use std::time::Instant;

/// State shared by every step of a single walk
///
/// Built fresh for each walk and handed to each spawned step explicitly.
struct CrawlContext {
    fetcher: Arc<dyn Fetcher>,
    reporter: Arc<dyn Reporter>,
    visited: VisitedSet,
    tracker: CompletionTracker,
    counters: StepCounters,
}

/// Main walk coordinator structure
///
/// Holds the collaborators a walk needs. Each call to [`Coordinator::run`]
/// starts from an empty visited set, so one coordinator can run many walks.
#[derive(Clone)]
pub struct Coordinator {
    fetcher: Arc<dyn Fetcher>,
    reporter: Arc<dyn Reporter>,
}

impl Coordinator {
    /// Creates a coordinator that prints events to stdout
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            reporter: Arc::new(ConsoleReporter::new()),
        }
    }

    /// Replaces the reporter that receives walk events
    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Walks the link graph from `seed` and waits for every step to finish
    ///
    /// # Arguments
    ///
    /// * `seed` - URL to start from
    /// * `max_depth` - Depth budget of the seed; 0 fetches nothing, 1 fetches only the seed
    ///
    /// # Returns
    ///
    /// Counts of how each step ended. Fetch errors are reported, never returned.
    pub async fn run(&self, seed: &str, max_depth: u32) -> CrawlStats {
        tracing::info!("Starting walk from {} (max depth {})", seed, max_depth);

        let ctx = Arc::new(CrawlContext {
            fetcher: Arc::clone(&self.fetcher),
            reporter: Arc::clone(&self.reporter),
            visited: VisitedSet::new(),
            tracker: CompletionTracker::new(),
            counters: StepCounters::new(),
        });
        let start_time = Instant::now();

        spawn_step(&ctx, seed.to_string(), max_depth);
        ctx.tracker.wait().await;

        let stats = ctx.counters.snapshot(start_time.elapsed());
        tracing::info!(
            "Walk completed: {} fetched, {} failed, {} steps in {:?}",
            stats.fetched,
            stats.fetch_failed,
            stats.total_steps(),
            stats.elapsed
        );

        stats
    }
}

/// Walks the link graph from `seed`, printing every discovery and error to stdout
///
/// Returns only after the whole traversal, including every spawned step, has
/// completed.
pub async fn crawl(seed: &str, max_depth: u32, fetcher: Arc<dyn Fetcher>) {
    Coordinator::new(fetcher).run(seed, max_depth).await;
}

/// Tracks a new step and spawns it
///
/// The token is taken here, in the caller, so a parent's children are counted
/// before the parent itself is marked done.
fn spawn_step(ctx: &Arc<CrawlContext>, url: String, depth: u32) {
    let token = ctx.tracker.track();
    let ctx = Arc::clone(ctx);

    tokio::spawn(async move {
        let _token = token;
        let state = run_step(&ctx, &url, depth).await;
        tracing::trace!("Step {} at depth {} ended: {}", url, depth, state);
        ctx.counters.record(state);
    });
}

/// Runs one step to its terminal state
async fn run_step(ctx: &Arc<CrawlContext>, url: &str, depth: u32) -> StepState {
    if depth == 0 {
        ctx.reporter.record_skip(url, depth, StepState::DepthExhausted);
        return StepState::DepthExhausted;
    }

    if !ctx.visited.claim(url) {
        ctx.reporter.record_skip(url, depth, StepState::AlreadyVisited);
        return StepState::AlreadyVisited;
    }

    let page = match ctx.fetcher.fetch(url).await {
        Ok(page) => page,
        Err(e) => {
            tracing::debug!("Fetch failed for {}: {}", url, e);
            ctx.reporter.record_error(&e);
            return StepState::FetchFailed;
        }
    };

    ctx.reporter.record_found(url, &page.body);

    for link in &page.links {
        spawn_step(ctx, link.clone(), depth - 1);
    }

    StepState::Fetched {
        children: page.links.len(),
    }
}
